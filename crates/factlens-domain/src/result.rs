//! Fact-check verdicts

use crate::request::FactCheckRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explanation carried by the fallback result
pub const FALLBACK_EXPLANATION: &str =
    "The AI response could not be processed into the expected format. Please try again.";

/// Analyzed text used when the request carried neither text nor a URL
pub const UNANALYZED_PLACEHOLDER: &str = "Content could not be analyzed";

/// Verdict assigned to a fact-check request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// The content is accurate
    True,

    /// The content is inaccurate
    False,

    /// The content is partly accurate or lacks context
    Misleading,

    /// The content could not be checked
    Unverifiable,
}

impl Rating {
    /// Get the rating as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::True => "True",
            Rating::False => "False",
            Rating::Misleading => "Misleading",
            Rating::Unverifiable => "Unverifiable",
        }
    }

    /// Parse a rating from its exact wire form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "True" => Some(Rating::True),
            "False" => Some(Rating::False),
            "Misleading" => Some(Rating::Misleading),
            "Unverifiable" => Some(Rating::Unverifiable),
            _ => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid rating: {}", s))
    }
}

/// The canonical answer to a fact-check request
///
/// `rating`, `explanation` and `analyzed_text` are always populated;
/// `verification_sources` is always present and may be empty. Spans of
/// `analyzed_text` that were checked are wrapped in `**`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckResult {
    /// Verdict
    pub rating: Rating,

    /// Human-readable justification
    pub explanation: String,

    /// Original content with checked spans marked `**like this**`
    pub analyzed_text: String,

    /// URLs consulted to reach the verdict
    #[serde(default)]
    pub verification_sources: Vec<String>,
}

impl FactCheckResult {
    /// Deterministic result for model output that could not be used
    ///
    /// The analyzed text falls back from the request text, to its URL, to
    /// [`UNANALYZED_PLACEHOLDER`]. Blank text counts as absent, as it does
    /// for admission.
    pub fn fallback(request: &FactCheckRequest) -> Self {
        let analyzed_text = request
            .text()
            .filter(|text| !text.trim().is_empty())
            .or_else(|| request.url())
            .unwrap_or(UNANALYZED_PLACEHOLDER);

        Self {
            rating: Rating::Unverifiable,
            explanation: FALLBACK_EXPLANATION.to_string(),
            analyzed_text: analyzed_text.to_string(),
            verification_sources: Vec::new(),
        }
    }

    /// Whether this is the fallback shape
    pub fn is_fallback(&self) -> bool {
        self.rating == Rating::Unverifiable
            && self.explanation == FALLBACK_EXPLANATION
            && self.verification_sources.is_empty()
    }
}
