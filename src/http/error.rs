//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body returned for input that does not parse as an integer.
///
/// Echoes the original raw value (`null` when the parameter was absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidInputBody {
    pub number: Option<String>,
    pub error: bool,
}

/// Error response body for internal failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The query value is not an integer; carries the original raw value.
    InvalidNumber(Option<String>),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidNumber(raw) => (
                StatusCode::BAD_REQUEST,
                Json(InvalidInputBody {
                    number: raw,
                    error: true,
                }),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("INTERNAL_ERROR", msg)),
            )
                .into_response(),
        }
    }
}
