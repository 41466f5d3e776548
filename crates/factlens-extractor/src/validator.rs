//! Enforce the result schema on recovered objects

use crate::error::SchemaError;
use crate::parser::{Extraction, JsonObject};
use factlens_domain::{FactCheckRequest, FactCheckResult, Rating};
use serde_json::Value;
use tracing::warn;

/// Turn an extraction into the canonical result
///
/// A fallback passes through unchanged. A parsed object that fails
/// [`validate_object`] degrades to the fallback, so callers never see a
/// partially populated result.
pub fn validate(extraction: Extraction, request: &FactCheckRequest) -> FactCheckResult {
    match extraction {
        Extraction::Fallback(result) => result,
        Extraction::Parsed(object) => validate_object(&object).unwrap_or_else(|e| {
            warn!("Model output failed schema validation: {}", e);
            FactCheckResult::fallback(request)
        }),
    }
}

/// Validate a recovered object strictly
///
/// `rating`, `explanation` and `analyzedText` must be non-blank strings and
/// the rating one of the four verdicts. `verificationSources` is coerced to
/// an empty list when absent or not a list; non-string entries are dropped.
/// String fields are kept verbatim.
pub fn validate_object(object: &JsonObject) -> Result<FactCheckResult, SchemaError> {
    let rating_str = required_str(object, "rating")?;
    let rating = Rating::parse(rating_str.trim())
        .ok_or_else(|| SchemaError::InvalidRating(rating_str.to_string()))?;

    let explanation = required_str(object, "explanation")?;
    let analyzed_text = required_str(object, "analyzedText")?;

    Ok(FactCheckResult {
        rating,
        explanation: explanation.to_string(),
        analyzed_text: analyzed_text.to_string(),
        verification_sources: verification_sources(object),
    })
}

fn required_str<'a>(object: &'a JsonObject, field: &'static str) -> Result<&'a str, SchemaError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .ok_or(SchemaError::MissingField(field))
}

fn verification_sources(object: &JsonObject) -> Vec<String> {
    object
        .get("verificationSources")
        .and_then(Value::as_array)
        .map(|sources| {
            sources
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
