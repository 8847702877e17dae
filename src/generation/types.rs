use serde::{Deserialize, Serialize};

use super::GenerationError;

/// Lifecycle state of a category option during a MASH round.
/// The service only ever emits freshly generated options in `Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    Waiting,
    Chosen,
    Discarded,
}

/// A single selectable value within a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOption {
    pub title: String,
    pub state: OptionState,
}

/// A named group of options, e.g. "Vacation Destination".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub options: Vec<CategoryOption>,
}

/// Inbound request body for `POST /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub theme: String,
    #[serde(default = "default_num_categories")]
    pub num_categories: u32,
    #[serde(default = "default_num_options")]
    pub num_options: u32,
}

fn default_num_categories() -> u32 {
    10
}

fn default_num_options() -> u32 {
    4
}

/// Outbound payload: the request theme echoed verbatim plus the
/// generated categories in the order the model produced them.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub theme: String,
    pub categories: Vec<Category>,
}

/// LLM client abstraction (allows mocking the inference backend).
pub trait LlmClient: Send + Sync {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}
