use utoipa::OpenApi;

use server::routes::character;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-character", character::router, character::ApiDoc::openapi()).await
}
