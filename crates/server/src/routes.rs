use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::openapi::OpenApi as OpenApiSpec;

use common::types::Health;
use service::storage::RecordStore;

pub mod generic;

pub mod boss;
pub mod campaign;
pub mod character;
pub mod class;
pub mod npc;
pub mod weapon;

/// Shared router state: the storage handle, created once at startup and
/// injected into every service instantiation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

#[utoipa::path(
    get, path = "/healthcheck", tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn healthcheck() -> Json<Health> {
    Json(Health { status: "up" })
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the full application: health endpoint, one resource's CRUD
/// routes, Swagger UI, CORS and request tracing.
pub fn build_router(state: AppState, resources: Router<AppState>, doc: OpenApiSpec) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(resources)
        .with_state(state)
        .merge(crate::openapi::swagger_ui(doc))
        .layer(build_cors())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
