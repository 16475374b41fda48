//! Resume Optimization. Validates the submitted text, composes the prompt and
//! makes exactly one generation call.
//!
//! All-or-nothing: the caller gets the full generated text or an `AppError`.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::optimize::prompts::build_optimize_prompt;

/// Runs one optimization. Absent or empty content is rejected before the
/// generator is touched; anything else, whitespace included, is sent as is.
pub async fn optimize_resume(
    generator: &dyn TextGenerator,
    content: Option<&str>,
) -> Result<String, AppError> {
    let content = match content {
        Some(c) if !c.is_empty() => c,
        _ => return Err(AppError::MissingContent),
    };

    let prompt = build_optimize_prompt(content);
    info!(
        "Optimizing resume ({} chars) with model {}",
        content.chars().count(),
        generator.model()
    );

    let optimized = generator.generate(&prompt).await?;

    info!("Optimization complete ({} chars)", optimized.chars().count());
    Ok(optimized)
}
