//! Parse and validate the model's raw reply into typed categories.
//!
//! Validation is all-or-nothing: the first structural violation fails the
//! whole request. Option count per category is hard-validated against the
//! request; category count and title uniqueness are deliberately not
//! re-checked (the prompt requests them, the pipeline trusts compliance).

use super::sanitize::strip_line_comments;
use super::types::Category;
use super::GenerationError;

/// Convert raw model output into validated categories.
///
/// Fails with `EmptyOutput` on empty text, `MalformedOutput` when the
/// sanitized text is not a JSON array, and `InvalidShape` when a category
/// is missing required fields or its option count differs from
/// `num_options`. Element order is preserved.
pub fn parse_categories(raw: &str, num_options: u32) -> Result<Vec<Category>, GenerationError> {
    if raw.trim().is_empty() {
        return Err(GenerationError::EmptyOutput);
    }

    let cleaned = strip_line_comments(raw);
    let values: Vec<serde_json::Value> =
        serde_json::from_str(&cleaned).map_err(|e| GenerationError::MalformedOutput {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    let mut categories = Vec::with_capacity(values.len());
    for value in &values {
        categories.push(validate_category(value, num_options)?);
    }
    Ok(categories)
}

/// Check one parsed element against the required shape and deserialize it.
fn validate_category(
    value: &serde_json::Value,
    num_options: u32,
) -> Result<Category, GenerationError> {
    let obj = value.as_object().ok_or_else(|| {
        GenerationError::InvalidShape(format!("category is not an object: {value}"))
    })?;

    if !obj.contains_key("title") || !obj.contains_key("options") {
        return Err(GenerationError::InvalidShape(format!(
            "category missing required fields: {value}"
        )));
    }

    let options = obj["options"].as_array().ok_or_else(|| {
        GenerationError::InvalidShape(format!("'options' is not an array: {value}"))
    })?;

    if options.len() != num_options as usize {
        let title = obj["title"].as_str().unwrap_or("<untitled>");
        return Err(GenerationError::InvalidShape(format!(
            "category '{title}' has {} options, expected {num_options}",
            options.len()
        )));
    }

    serde_json::from_value(value.clone())
        .map_err(|e| GenerationError::InvalidShape(format!("category does not deserialize: {e}")))
}
