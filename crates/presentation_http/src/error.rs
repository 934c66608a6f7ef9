//! API error handling
//!
//! Every failure response carries the `{"success": false, "error": "..."}`
//! envelope the session UI expects: validation problems with a 400 status,
//! generation and storage problems with a 500.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false for error responses
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Generation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate audio: {msg}"),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::BadRequest(msg),
            ApplicationError::Generation(e) => Self::Generation(e.to_string()),
            ApplicationError::Storage(e) => Self::Internal(e.to_string()),
        }
    }
}
