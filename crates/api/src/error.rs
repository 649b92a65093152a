//! Error type shared by every asset handler and its JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventory_core::error::CoreError;
use serde::Serialize;

/// Message sent in place of storage failure details.
pub const MSG_INTERNAL: &str = "An internal error occurred";

/// Everything a handler can fail with.
///
/// Domain failures come from `inventory_core`, storage failures from sqlx,
/// and malformed request bodies from the JSON extractor.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read as JSON.
    #[error("Malformed request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response: `{"error": ..., "code": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status, stable error code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                MSG_INTERNAL.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();

        if status.is_server_error() {
            // The cause stays in the log; the client only sees MSG_INTERNAL.
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(%status, code, message = %error, "Request rejected");
        }

        (status, Json(ErrorBody { error, code })).into_response()
    }
}
