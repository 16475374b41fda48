use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; no per-request data lives here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
