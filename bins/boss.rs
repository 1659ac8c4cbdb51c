use utoipa::OpenApi;

use server::routes::boss;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-boss", boss::router, boss::ApiDoc::openapi()).await
}
