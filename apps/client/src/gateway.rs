//! Optimization client, the controller's only way to reach `POST /api/optimize`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ClientError;

/// Resume text in, optimized text out. The controller depends on this trait,
/// never on `GatewayClient` directly.
#[async_trait]
pub trait OptimizationService: Send + Sync {
    async fn optimize(&self, content: &str) -> Result<String, ClientError>;
}

#[derive(Debug, Serialize)]
struct OptimizeRequest<'a> {
    content: &'a str,
}

/// Either field may be present; the gateway sends exactly one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeResponse {
    optimized_content: Option<String>,
    error: Option<String>,
}

/// HTTP implementation of `OptimizationService`. Uses the transport's
/// default timeout.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn optimize_url(&self) -> String {
        format!("{}/api/optimize", self.base_url)
    }
}

#[async_trait]
impl OptimizationService for GatewayClient {
    async fn optimize(&self, content: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.optimize_url())
            .json(&OptimizeRequest { content })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Gateway responded {} ({} bytes)", status, body.len());

        let parsed = serde_json::from_str::<OptimizeResponse>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parsed.map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        // An empty optimizedContent is no result at all.
        match (parsed.optimized_content, parsed.error) {
            (Some(text), _) if !text.is_empty() => Ok(text),
            (_, Some(error)) => Err(ClientError::Gateway(error)),
            (_, None) => Err(ClientError::MalformedResponse(
                "missing optimizedContent".to_string(),
            )),
        }
    }
}
