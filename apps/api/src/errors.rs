use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Stable, caller-facing messages. Internal detail never reaches the body.
pub const MISSING_CONTENT_MESSAGE: &str = "No content provided";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to optimize resume";

/// Wire shape of every error response: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No content provided")]
    MissingContent,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingContent | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingContent => MISSING_CONTENT_MESSAGE,
            AppError::InvalidBody(detail) => {
                tracing::warn!("Rejected request body: {detail}");
                INVALID_BODY_MESSAGE
            }
            AppError::PayloadTooLarge => PAYLOAD_TOO_LARGE_MESSAGE,
            AppError::GenerationFailed(e) => {
                tracing::error!("Generation error: {e}");
                GENERATION_FAILED_MESSAGE
            }
        };

        let body = Json(ErrorBody {
            error: message.to_string(),
        });

        (self.status(), body).into_response()
    }
}
