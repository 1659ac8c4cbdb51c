use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::npc::Npc;

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_npcs, add_npc, update_npc, delete_npc, crate::routes::healthcheck),
    components(schemas(Npc)),
    tags((name = "npcs", description = "Non-player character reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/npcs", get(list_npcs).post(add_npc))
        .route("/api/v1/npcs/:id", put(update_npc).delete(delete_npc))
}

#[utoipa::path(
    get, path = "/api/v1/npcs", tag = "npcs",
    responses(
        (status = 200, description = "List of npcs"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_npcs(State(state): State<AppState>) -> Response {
    generic::list::<Npc>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/npcs", tag = "npcs",
    request_body = Npc,
    responses(
        (status = 201, description = "Npc successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_npc(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Npc>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/npcs/{id}", tag = "npcs",
    params(("id" = i64, Path, description = "Npc id")),
    request_body = Npc,
    responses(
        (status = 200, description = "Npc successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Npc not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_npc(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Npc>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/npcs/{id}", tag = "npcs",
    params(("id" = i64, Path, description = "Npc id")),
    responses(
        (status = 200, description = "Npc successfully deleted"),
        (status = 404, description = "Npc not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_npc(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Npc>(state, id).await
}
