use utoipa::OpenApi;

use server::routes::weapon;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-weapon", weapon::router, weapon::ApiDoc::openapi()).await
}
