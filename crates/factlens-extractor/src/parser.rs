//! Recover a JSON object from free-form model output
//!
//! Models are asked for bare JSON but regularly wrap it in markdown fences or
//! add commentary around it. Recovery is an ordered pipeline of pure
//! strategies; the first one that yields an object wins, and when none does
//! the caller gets the fallback result instead of an error.

use factlens_domain::{FactCheckRequest, FactCheckResult};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A JSON object recovered from model output
pub type JsonObject = Map<String, Value>;

/// Triple-backtick block with an optional `json` tag around a `{...}` body
static RE_JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?i:json)?\s*(\{.*?\})\s*```").unwrap());

type Strategy = fn(&str) -> Option<JsonObject>;

/// Strategies in the order they are tried
const STRATEGIES: [(&str, Strategy); 3] = [
    ("strict", parse_strict),
    ("fenced", parse_fenced),
    ("brace_span", parse_brace_span),
];

/// Outcome of extraction
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// An object recovered from the model text, not yet validated
    Parsed(JsonObject),

    /// The model text held no usable object
    Fallback(FactCheckResult),
}

/// Extract a JSON object from raw model output
///
/// Never fails: unusable output yields [`Extraction::Fallback`] built from
/// the originating request.
pub fn extract(raw: &str, request: &FactCheckRequest) -> Extraction {
    let trimmed = raw.trim();

    for (name, strategy) in STRATEGIES {
        if let Some(object) = strategy(trimmed) {
            debug!(strategy = name, fields = object.len(), "Recovered JSON object from model output");
            return Extraction::Parsed(object);
        }
    }

    warn!(
        raw_len = raw.len(),
        "Model output held no JSON object, using fallback result"
    );
    Extraction::Fallback(FactCheckResult::fallback(request))
}

/// Parse the whole string as an object; it must begin with `{`
pub fn parse_strict(s: &str) -> Option<JsonObject> {
    if !s.starts_with('{') {
        return None;
    }
    match serde_json::from_str(s) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Parse the body of the first json-fenced block
pub fn parse_fenced(s: &str) -> Option<JsonObject> {
    let body = RE_JSON_FENCE.captures(s)?.get(1)?.as_str();
    parse_brace_span(body)
}

/// Parse the span from the first `{` to the last `}`, discarding commentary
pub fn parse_brace_span(s: &str) -> Option<JsonObject> {
    let span = brace_span(s)?;
    parse_strict(span)
}

/// Inclusive span from the first `{` to the last `}`, when they are in order
fn brace_span(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    (start < end).then(|| &s[start..=end])
}
