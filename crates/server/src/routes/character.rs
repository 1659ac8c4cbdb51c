use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::character::Character;

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_characters, add_character, update_character, delete_character, crate::routes::healthcheck),
    components(schemas(Character)),
    tags((name = "characters", description = "Player character reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/characters", get(list_characters).post(add_character))
        .route("/api/v1/characters/:id", put(update_character).delete(delete_character))
}

#[utoipa::path(
    get, path = "/api/v1/characters", tag = "characters",
    responses(
        (status = 200, description = "List of characters"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_characters(State(state): State<AppState>) -> Response {
    generic::list::<Character>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/characters", tag = "characters",
    request_body = Character,
    responses(
        (status = 201, description = "Character successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_character(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Character>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/characters/{id}", tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    request_body = Character,
    responses(
        (status = 200, description = "Character successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Character not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Character>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/characters/{id}", tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character successfully deleted"),
        (status = 404, description = "Character not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_character(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Character>(state, id).await
}
