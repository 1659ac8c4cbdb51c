use std::time::Duration;

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::options::{AuthMechanism, ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Database};
use tracing::info;

use configs::DatabaseConfig;

/// Connect to MongoDB with the credentials from the environment-backed
/// config and fail fast with a ping. The client is created once per
/// process and shared through the router state.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Database> {
    let credential = Credential::builder()
        .username(cfg.user.clone())
        .password(cfg.pass.clone())
        .source(cfg.auth_source.clone())
        .mechanism(AuthMechanism::ScramSha256)
        .build();
    let options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp { host: cfg.host.clone(), port: Some(cfg.port) }])
        .credential(credential)
        .server_selection_timeout(Duration::from_secs(cfg.server_selection_timeout_secs))
        .build();
    let client = Client::with_options(options).context("invalid MongoDB client options")?;
    let db = client.database(&cfg.name);
    db.run_command(doc! { "ping": 1 }, None)
        .await
        .context("failed to connect to the database")?;
    info!(host = %cfg.host, database = %cfg.name, "connected to MongoDB");
    Ok(db)
}
