use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tracing::{error, info};
use utoipa::openapi::OpenApi as OpenApiSpec;

use common::utils::logging::init_logging;
use configs::AppConfig;
use service::db;
use service::storage::mongo::MongoStore;
use service::storage::RecordStore;

use crate::routes::{self, AppState};

/// Public entry for every resource binary: load configuration, connect
/// storage, build the app and serve until shutdown. Missing MongoDB
/// credentials or an unreachable database abort startup.
pub async fn run(
    service_name: &str,
    resources: fn() -> Router<AppState>,
    doc: OpenApiSpec,
) -> anyhow::Result<()> {
    dotenv().ok();
    init_logging(service_name);

    let cfg = AppConfig::load().map_err(|e| {
        error!(service = service_name, error = %e, "invalid configuration");
        e
    })?;
    let database = db::connect(&cfg.database).await.map_err(|e| {
        error!(service = service_name, error = %e, "failed to connect to the database");
        e
    })?;
    let store: Arc<dyn RecordStore> = Arc::new(MongoStore::new(database));
    let state = AppState { store };

    let app = routes::build_router(state, resources(), doc);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(service = service_name, %addr, "starting service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
