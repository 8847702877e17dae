//! The generation pipeline: prompt → inference → sanitize/parse/validate.
//!
//! Strictly sequential, one backend round trip per request, no shared state.

use crate::config::GenerationConfig;

use super::parser::parse_categories;
use super::prompt::build_category_prompt;
use super::types::{GenerationRequest, GenerationResponse, LlmClient};
use super::GenerationError;

/// Run one generation pass for a request.
///
/// Builds the prompt, sends it to the backend, and converts the raw reply
/// into a validated `GenerationResponse` echoing the request theme.
pub fn generate_categories(
    client: &dyn LlmClient,
    config: &GenerationConfig,
    req: &GenerationRequest,
) -> Result<GenerationResponse, GenerationError> {
    let prompt = build_category_prompt(&req.theme, req.num_categories, req.num_options);
    let raw = client.generate(&config.model, &prompt)?;
    tracing::debug!(raw = %raw, "raw model reply");

    let categories = parse_categories(&raw, req.num_options)?;

    Ok(GenerationResponse {
        theme: req.theme.clone(),
        categories,
    })
}
