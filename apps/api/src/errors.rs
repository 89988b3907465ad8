use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every body carries a `message` field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Any failure of the generation call. Reported to the caller as-is.
    #[error("{0}")]
    Upstream(String),

    #[error("Failed to parse JSON from AI response: {parse_error}")]
    Unparseable { raw: String, parse_error: String },

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            AppError::Upstream(message) => {
                tracing::warn!("AI call failed: {message}");
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
            AppError::Unparseable { raw, parse_error } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "message": "Failed to parse JSON from AI response",
                    "aiRaw": raw,
                    "parseError": parse_error,
                }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Authentication required" }),
            ),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "A database error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
