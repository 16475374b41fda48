use anyhow::Result;

const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080";

/// Client configuration loaded from environment variables. CLI flags take
/// precedence over anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gateway_url: std::env::var("GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
