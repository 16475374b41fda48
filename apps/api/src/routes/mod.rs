pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::optimize::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/optimize", post(handlers::handle_optimize))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::{GENERATION_FAILED_MESSAGE, MISSING_CONTENT_MESSAGE};
    use crate::llm_client::stub::{StubBehavior, StubGenerator};
    use crate::optimize::prompts::build_optimize_prompt;

    fn test_config() -> Config {
        Config {
            llm_api_key: "unused".to_string(),
            llm_base_url: "http://localhost:0".to_string(),
            llm_model: "stub".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            max_body_bytes: 1024,
        }
    }

    fn router_with(stub: &StubGenerator) -> Router {
        build_router(AppState {
            generator: Arc::new(stub.clone()),
            config: test_config(),
        })
    }

    fn post_optimize(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/optimize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_optimize_success_returns_generated_text() {
        let stub = StubGenerator::new(StubBehavior::Reply(
            "John Doe, Senior Engineer".to_string(),
        ));
        let response = router_with(&stub)
            .oneshot(post_optimize(
                json!({"content": "John Doe, Engineer"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"optimizedContent": "John Doe, Senior Engineer"})
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_body_object_is_400_without_generation() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(post_optimize("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": MISSING_CONTENT_MESSAGE})
        );
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_string_content_is_400() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(post_optimize(json!({"content": ""}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_content_is_forwarded() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(post_optimize(json!({"content": "   \n"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["optimizedContent"],
            json!(build_optimize_prompt("   \n"))
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_accepted() {
        let stub = StubGenerator::new(StubBehavior::Reply("better".to_string()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/optimize")
            .body(Body::from(json!({"content": "resume"}).to_string()))
            .unwrap();
        let response = router_with(&stub).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"optimizedContent": "better"})
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_with_error_field() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(post_optimize("{\"content\":"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_is_generic_500() {
        let internal = "upstream key sk-live-1234 rejected by provider";
        let stub = StubGenerator::new(StubBehavior::Fail(internal.to_string()));
        let response = router_with(&stub)
            .oneshot(post_optimize(json!({"content": "resume"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body, json!({"error": GENERATION_FAILED_MESSAGE}));
        assert!(!body.to_string().contains(internal));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_echo_generator_round_trips_prompt() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(post_optimize(json!({"content": "X"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["optimizedContent"], json!(build_optimize_prompt("X")));
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let huge = "a".repeat(4096);
        let response = router_with(&stub)
            .oneshot(post_optimize(json!({"content": huge}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let stub = StubGenerator::new(StubBehavior::Echo);
        let response = router_with(&stub)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }
}
