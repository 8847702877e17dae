pub mod ollama;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;
pub mod types;

pub use ollama::*;
pub use parser::*;
pub use pipeline::*;
pub use prompt::*;
pub use sanitize::*;
pub use types::*;

use thiserror::Error;

/// Failure kinds for one generation pass. Typed so tests and logs can
/// distinguish causes; the API boundary flattens them to a single
/// user-facing error.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("inference backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("model returned an empty response")]
    EmptyOutput,

    #[error("model output is not valid JSON: {reason}. Raw response: {raw}")]
    MalformedOutput { reason: String, raw: String },

    #[error("model output has invalid structure: {0}")]
    InvalidShape(String),
}
