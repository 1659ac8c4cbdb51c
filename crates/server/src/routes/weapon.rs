use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::weapon::Weapon;

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_weapons, add_weapon, update_weapon, delete_weapon, crate::routes::healthcheck),
    components(schemas(Weapon)),
    tags((name = "weapons", description = "Weapon reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/weapons", get(list_weapons).post(add_weapon))
        .route("/api/v1/weapons/:id", put(update_weapon).delete(delete_weapon))
}

#[utoipa::path(
    get, path = "/api/v1/weapons", tag = "weapons",
    responses(
        (status = 200, description = "List of weapons"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_weapons(State(state): State<AppState>) -> Response {
    generic::list::<Weapon>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/weapons", tag = "weapons",
    request_body = Weapon,
    responses(
        (status = 201, description = "Weapon successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_weapon(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Weapon>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/weapons/{id}", tag = "weapons",
    params(("id" = i64, Path, description = "Weapon id")),
    request_body = Weapon,
    responses(
        (status = 200, description = "Weapon successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Weapon not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_weapon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Weapon>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/weapons/{id}", tag = "weapons",
    params(("id" = i64, Path, description = "Weapon id")),
    responses(
        (status = 200, description = "Weapon successfully deleted"),
        (status = 404, description = "Weapon not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_weapon(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Weapon>(state, id).await
}
