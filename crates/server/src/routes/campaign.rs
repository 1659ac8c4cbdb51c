use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;
use utoipa::OpenApi;

use models::campaign::{Campaign, PlayerCharacter};

use crate::routes::{generic, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(list_campaigns, add_campaign, update_campaign, delete_campaign, crate::routes::healthcheck),
    components(schemas(Campaign, PlayerCharacter)),
    tags((name = "campaigns", description = "Campaign reference records"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/campaigns", get(list_campaigns).post(add_campaign))
        .route("/api/v1/campaigns/:id", put(update_campaign).delete(delete_campaign))
}

#[utoipa::path(
    get, path = "/api/v1/campaigns", tag = "campaigns",
    responses(
        (status = 200, description = "List of campaigns"),
        (status = 500, description = "Internal server error")
    )
)]
async fn list_campaigns(State(state): State<AppState>) -> Response {
    generic::list::<Campaign>(state).await
}

#[utoipa::path(
    post, path = "/api/v1/campaigns", tag = "campaigns",
    request_body = Campaign,
    responses(
        (status = 201, description = "Campaign successfully created"),
        (status = 400, description = "Invalid data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn add_campaign(State(state): State<AppState>, payload: Option<Json<Value>>) -> Response {
    generic::create::<Campaign>(state, payload).await
}

#[utoipa::path(
    put, path = "/api/v1/campaigns/{id}", tag = "campaigns",
    params(("id" = i64, Path, description = "Campaign id")),
    request_body = Campaign,
    responses(
        (status = 200, description = "Campaign successfully updated"),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Campaign not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Response {
    generic::update::<Campaign>(state, id, payload).await
}

#[utoipa::path(
    delete, path = "/api/v1/campaigns/{id}", tag = "campaigns",
    params(("id" = i64, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign successfully deleted"),
        (status = 404, description = "Campaign not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_campaign(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    generic::delete::<Campaign>(state, id).await
}
