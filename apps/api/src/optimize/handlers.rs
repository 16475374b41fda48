//! Axum route handlers for the Optimize API.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::optimize::optimizer::optimize_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimized_content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/optimize
///
/// Rewrites the submitted resume text with a single generation call.
/// The body is parsed as JSON whatever its `Content-Type`.
/// 400 when `content` is missing or empty (or the body is not JSON),
/// 413 above the body limit, 500 when generation fails.
pub async fn handle_optimize(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        _ => AppError::InvalidBody(rejection.body_text()),
    })?;
    let request: OptimizeRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    let optimized_content =
        optimize_resume(state.generator.as_ref(), request.content.as_deref()).await?;

    Ok(Json(OptimizeResponse { optimized_content }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_content_deserializes() {
        let request: OptimizeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let json = serde_json::to_value(OptimizeResponse {
            optimized_content: "done".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"optimizedContent": "done"}));
    }
}
