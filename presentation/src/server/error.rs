//! JSON error responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use persona_application::{DirectoryError, ReplyError};
use serde_json::json;
use tracing::warn;

/// API failure rendered as `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_persona_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid persona ID")
    }

    pub fn persona_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Persona not found")
    }

    pub fn invalid_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid request")
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::NotFound(_) => Self::persona_not_found(),
            DirectoryError::Unauthorized => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized"),
            other => {
                warn!("Catalog failure: {}", other);
                Self::internal()
            }
        }
    }
}

impl From<ReplyError> for ApiError {
    fn from(e: ReplyError) -> Self {
        warn!("Reply failure: {}", e);
        Self::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
