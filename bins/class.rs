use utoipa::OpenApi;

use server::routes::class;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-class", class::router, class::ApiDoc::openapi()).await
}
