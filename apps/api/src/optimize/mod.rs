// Optimization gateway: prompt composition and the single generation call.
// All LLM calls go through llm_client; no direct backend calls here.

pub mod handlers;
pub mod optimizer;
pub mod prompts;
