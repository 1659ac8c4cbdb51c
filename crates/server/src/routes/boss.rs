use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::boss::Boss;

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_bosses, add_boss, update_boss, delete_boss, crate::routes::healthcheck),
    components(schemas(Boss)),
    tags((name = "bosses", description = "Boss reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/bosses", get(list_bosses).post(add_boss))
        .route("/api/v1/bosses/:id", put(update_boss).delete(delete_boss))
}

#[utoipa::path(
    get, path = "/api/v1/bosses", tag = "bosses",
    responses(
        (status = 200, description = "List of bosses"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_bosses(State(state): State<AppState>) -> Response {
    generic::list::<Boss>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/bosses", tag = "bosses",
    request_body = Boss,
    responses(
        (status = 201, description = "Boss successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_boss(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Boss>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/bosses/{id}", tag = "bosses",
    params(("id" = i64, Path, description = "Boss id")),
    request_body = Boss,
    responses(
        (status = 200, description = "Boss successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Boss not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_boss(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Boss>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/bosses/{id}", tag = "bosses",
    params(("id" = i64, Path, description = "Boss id")),
    responses(
        (status = 200, description = "Boss successfully deleted"),
        (status = 404, description = "Boss not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_boss(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Boss>(state, id).await
}
