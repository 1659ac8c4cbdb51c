use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::class::Class;

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_classes, add_class, update_class, delete_class, crate::routes::healthcheck),
    components(schemas(Class)),
    tags((name = "classes", description = "Character class reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/classes", get(list_classes).post(add_class))
        .route("/api/v1/classes/:id", put(update_class).delete(delete_class))
}

#[utoipa::path(
    get, path = "/api/v1/classes", tag = "classes",
    responses(
        (status = 200, description = "List of classes"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_classes(State(state): State<AppState>) -> Response {
    generic::list::<Class>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/classes", tag = "classes",
    request_body = Class,
    responses(
        (status = 201, description = "Class successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_class(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Class>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/classes/{id}", tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    request_body = Class,
    responses(
        (status = 200, description = "Class successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Class not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Class>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/classes/{id}", tag = "classes",
    params(("id" = i64, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class successfully deleted"),
        (status = 404, description = "Class not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_class(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Class>(state, id).await
}
