use utoipa::OpenApi;

use server::routes::npc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run("api-npc", npc::router, npc::ApiDoc::openapi()).await
}
