use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error envelope: every failure renders as `{"error": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ServiceError::Db(_) => {
                error!(error = %err, "request failed on storage");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "An internal error has occurred")
            }
        }
    }
}
