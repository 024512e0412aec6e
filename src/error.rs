//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a distinct, stable HTTP status code and error code;
/// none is downgraded to a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Message body is missing, blank, or too long.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid input")]
    InvalidInput(String),

    /// The dare id does not resolve to a live dare.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Dare not found")]
    DareNotFound,

    /// This sender already has a message on the dare.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("You have already sent a message for this dare")]
    DuplicateSender,

    /// Storage layer failed (connection error, query error).
    ///
    /// Returns HTTP 500 and hides details from the client. Never retried here.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

/// Malformed send bodies are invalid input, never a bare framework rejection.
///
/// A body without a JSON content type is read as an empty body, so it reports
/// the same "Message is required" as `{}`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::InvalidInput("Message is required".to_string())
            }
            other => AppError::InvalidInput(other.body_text()),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// `error` stays a plain string, which is what the browser client displays.
///
/// ```json
/// {
///   "error": "Human-readable error message",
///   "code": "error_type"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidInput` → 400 Bad Request
/// - `DareNotFound` → 404 Not Found
/// - `DuplicateSender` → 409 Conflict
/// - `StorageUnavailable` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidInput(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_input", msg.clone())
            }
            AppError::DareNotFound => (StatusCode::NOT_FOUND, "dare_not_found", self.to_string()),
            AppError::DuplicateSender => {
                (StatusCode::CONFLICT, "duplicate_sender", self.to_string())
            }
            AppError::StorageUnavailable(ref e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
