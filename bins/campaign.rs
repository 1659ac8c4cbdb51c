use utoipa::OpenApi;

use server::routes::campaign;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-campaign", campaign::router, campaign::ApiDoc::openapi()).await
}
