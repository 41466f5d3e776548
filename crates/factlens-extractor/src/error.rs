//! Error types for fact-checking

use factlens_gatekeeper::GateError;
use factlens_llm::LlmError;
use thiserror::Error;

/// Errors surfaced to callers of a fact-check
///
/// Unusable model output is not an error: it degrades to the fallback result.
#[derive(Error, Debug)]
pub enum FactCheckError {
    /// The request carried no content; no upstream call was made
    #[error(transparent)]
    Validation(#[from] GateError),

    /// Required upstream credential or configuration is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The model call failed or returned no usable candidate
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<LlmError> for FactCheckError {
    fn from(e: LlmError) -> Self {
        if e.is_configuration() {
            FactCheckError::Configuration(e.to_string())
        } else {
            FactCheckError::Upstream(e.to_string())
        }
    }
}

/// Why a recovered object is not a valid result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required field is absent, not a string, or blank
    #[error("invalid response structure: missing field '{0}'")]
    MissingField(&'static str),

    /// The rating is not one of the four verdicts
    #[error("invalid response structure: unknown rating '{0}'")]
    InvalidRating(String),
}
