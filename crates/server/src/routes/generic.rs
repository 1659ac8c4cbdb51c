//! The generic endpoint implementations behind every resource's routes.
//! Each per-resource module instantiates these with its record type; the
//! only per-resource code left is routing glue and OpenAPI metadata.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::info;

use models::resource::ApiResource;
use service::crud::{CrudService, UpdateOutcome};

use crate::errors::JsonApiError;
use crate::routes::AppState;

fn service<R: ApiResource>(state: &AppState) -> CrudService<R> {
    CrudService::new(Arc::clone(&state.store))
}

/// Decode and validate a request body. Absent, non-JSON, non-object and
/// empty-object bodies all collapse to the same 400.
fn parse_body<R: ApiResource>(payload: Option<Json<Value>>) -> Result<R, JsonApiError> {
    let Some(Json(Value::Object(map))) = payload else {
        return Err(JsonApiError::bad_request("Invalid data, empty"));
    };
    if map.is_empty() {
        return Err(JsonApiError::bad_request("Invalid data, empty"));
    }
    R::from_payload(&map).map_err(|e| JsonApiError::bad_request(format!("Invalid data: {e}")))
}

pub async fn list<R: ApiResource>(state: AppState) -> Response {
    match service::<R>(&state).list().await {
        Ok(records) => {
            info!(resource = R::NAME, count = records.len(), "listed records");
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => JsonApiError::from(e).into_response(),
    }
}

pub async fn create<R: ApiResource>(state: AppState, payload: Option<Json<Value>>) -> Response {
    let record = match parse_body::<R>(payload) {
        Ok(record) => record,
        Err(e) => return e.into_response(),
    };
    match service::<R>(&state).create(record).await {
        Ok(stored) => {
            info!(resource = R::NAME, id = stored.id, "created record");
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(e) => JsonApiError::from(e).into_response(),
    }
}

pub async fn update<R: ApiResource>(
    state: AppState,
    id: i64,
    payload: Option<Json<Value>>,
) -> Response {
    let record = match parse_body::<R>(payload) {
        Ok(record) => record,
        Err(e) => return e.into_response(),
    };
    match service::<R>(&state).update(id, record).await {
        Ok(UpdateOutcome::Updated(stored)) => {
            info!(resource = R::NAME, id, "updated record");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Ok(UpdateOutcome::Unchanged(stored)) => {
            info!(resource = R::NAME, id, "record already up to date");
            (StatusCode::OK, Json(stored)).into_response()
        }
        Err(e) => JsonApiError::from(e).into_response(),
    }
}

pub async fn delete<R: ApiResource>(state: AppState, id: i64) -> Response {
    match service::<R>(&state).delete(id).await {
        Ok(snapshot) => {
            info!(resource = R::NAME, id, "deleted record");
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(e) => JsonApiError::from(e).into_response(),
    }
}
