//! Test double for `TextGenerator` that records how often it was called.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Returns the prompt unchanged.
    Echo,
    Reply(String),
    /// Fails with an API error carrying this message.
    Fail(String),
}

#[derive(Debug, Clone)]
pub struct StubGenerator {
    behavior: StubBehavior,
    calls: Arc<AtomicUsize>,
}

impl StubGenerator {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Echo => Ok(prompt.to_string()),
            StubBehavior::Reply(text) => Ok(text.clone()),
            StubBehavior::Fail(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }

    fn model(&self) -> &str {
        "stub"
    }
}
