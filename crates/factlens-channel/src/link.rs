//! Result transport through a navigable address
//!
//! The result is serialized to JSON, percent-encoded and carried as the
//! value of the [`EXTENSION_DATA_PARAM`] query parameter. Reading back is
//! lenient: anything that does not decode to a complete result is treated
//! as no result.

use crate::error::ChannelError;
use factlens_domain::FactCheckResult;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

/// Query parameter that carries an embedded result
pub const EXTENSION_DATA_PARAM: &str = "extensionData";

/// What an address carries under [`EXTENSION_DATA_PARAM`]
#[derive(Debug, Clone, PartialEq)]
pub enum LinkPayload {
    /// The parameter is not present
    Absent,

    /// The parameter decoded to a complete result
    Result(FactCheckResult),

    /// The parameter is present but does not decode to a result
    Unreadable,
}

/// Build a consumer address carrying `result`
///
/// Any existing `extensionData` parameter on `base_url` is replaced; other
/// query parameters and the fragment are kept.
pub fn embed_result(base_url: &str, result: &FactCheckResult) -> Result<String, ChannelError> {
    let mut url = strip_extension_data(&Url::parse(base_url)?);

    let json = serde_json::to_string(result)?;
    let param = format!("{}={}", EXTENSION_DATA_PARAM, urlencoding::encode(&json));

    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{}&{}", existing, param),
        _ => param,
    };
    url.set_query(Some(&query));

    debug!(len = query.len(), "Embedded result in consumer URL");
    Ok(url.into())
}

/// Read the embedded result from an address
pub fn read_link(url: &Url) -> LinkPayload {
    let Some((_, value)) = url.query_pairs().find(|(key, _)| key == EXTENSION_DATA_PARAM) else {
        return LinkPayload::Absent;
    };

    match serde_json::from_str::<FactCheckResult>(&value) {
        Ok(result) if is_complete(&result) => LinkPayload::Result(result),
        Ok(_) => {
            warn!("Embedded result has blank fields, ignoring it");
            LinkPayload::Unreadable
        }
        Err(e) => {
            warn!("Failed to decode embedded result: {}", e);
            LinkPayload::Unreadable
        }
    }
}

/// The address with every `extensionData` parameter removed
///
/// The remaining parameters are kept exactly as written, including their
/// original percent-encoding and order.
pub fn strip_extension_data(url: &Url) -> Url {
    let mut stripped = url.clone();
    let Some(query) = url.query() else {
        return stripped;
    };

    if !query.split('&').any(is_payload) {
        return stripped;
    }

    let kept: Vec<&str> = query
        .split('&')
        .filter(|segment| !segment.is_empty() && !is_payload(segment))
        .collect();

    if kept.is_empty() {
        stripped.set_query(None);
    } else {
        stripped.set_query(Some(&kept.join("&")));
    }
    stripped
}

fn is_payload(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == EXTENSION_DATA_PARAM)
}

fn is_complete(result: &FactCheckResult) -> bool {
    !result.explanation.trim().is_empty() && !result.analyzed_text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use factlens_domain::Rating;

    fn sample() -> FactCheckResult {
        FactCheckResult {
            rating: Rating::Misleading,
            explanation: "Partly right & partly wrong: 50% of \"claims\" hold.".to_string(),
            analyzed_text: "**Café prices** rose 100% + more #today".to_string(),
            verification_sources: vec![
                "https://example.com/a?x=1&y=2".to_string(),
                "https://example.org/b#frag".to_string(),
            ],
        }
    }

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let link = embed_result("http://localhost:3000/results", &sample()).unwrap();
        assert!(link.starts_with("http://localhost:3000/results?extensionData="));
        assert_eq!(read_link(&parse(&link)), LinkPayload::Result(sample()));
    }

    #[test]
    fn test_embed_keeps_other_params_and_fragment() {
        let link = embed_result("http://localhost:3000/results?tab=sources#top", &sample()).unwrap();
        let url = parse(&link);

        assert_eq!(url.fragment(), Some("top"));
        assert!(url.query_pairs().any(|(k, v)| k == "tab" && v == "sources"));
        assert_eq!(read_link(&url), LinkPayload::Result(sample()));
    }

    #[test]
    fn test_embed_replaces_existing_payload() {
        let first = embed_result("http://localhost:3000/results", &sample()).unwrap();

        let mut other = sample();
        other.rating = Rating::True;
        let second = embed_result(&first, &other).unwrap();

        let url = parse(&second);
        let count = url
            .query_pairs()
            .filter(|(k, _)| k == EXTENSION_DATA_PARAM)
            .count();
        assert_eq!(count, 1);
        assert_eq!(read_link(&url), LinkPayload::Result(other));
    }

    #[test]
    fn test_embed_rejects_relative_base() {
        assert!(matches!(
            embed_result("/results", &sample()),
            Err(ChannelError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_read_absent() {
        assert_eq!(read_link(&parse("http://localhost:3000/results?tab=1")), LinkPayload::Absent);
    }

    #[test]
    fn test_read_unreadable_payloads() {
        for query in [
            "extensionData=not-json",
            "extensionData=%7B%22rating%22%3A%22Maybe%22%7D",
            "extensionData=",
            "extensionData=%7B%22rating%22%3A%22True%22%2C%22explanation%22%3A%22%20%22%2C%22analyzedText%22%3A%22x%22%7D",
        ] {
            let url = parse(&format!("http://localhost:3000/results?{}", query));
            assert_eq!(read_link(&url), LinkPayload::Unreadable, "query: {}", query);
        }
    }

    #[test]
    fn test_read_defaults_missing_sources() {
        let url = parse(
            "http://localhost:3000/results?extensionData=%7B%22rating%22%3A%22True%22%2C%22explanation%22%3A%22ok%22%2C%22analyzedText%22%3A%22x%22%7D",
        );
        match read_link(&url) {
            LinkPayload::Result(result) => assert!(result.verification_sources.is_empty()),
            other => panic!("expected result, got {:?}", other),
        }
    }

    #[test]
    fn test_strip() {
        let link = embed_result("http://localhost:3000/results", &sample()).unwrap();
        assert_eq!(
            strip_extension_data(&parse(&link)).as_str(),
            "http://localhost:3000/results"
        );

        let with_other = embed_result("http://localhost:3000/results?tab=1", &sample()).unwrap();
        assert_eq!(
            strip_extension_data(&parse(&with_other)).as_str(),
            "http://localhost:3000/results?tab=1"
        );
    }

    #[test]
    fn test_strip_keeps_other_params_verbatim() {
        let url = parse("http://localhost:3000/results?q=a%20b&extensionData=%7B%7D&tag=x+y&k=%2B");
        assert_eq!(
            strip_extension_data(&url).as_str(),
            "http://localhost:3000/results?q=a%20b&tag=x+y&k=%2B"
        );

        let encoded_key = parse("http://localhost:3000/results?extension%44ata=%7B%7D&q=a%20b");
        assert_eq!(
            strip_extension_data(&encoded_key).as_str(),
            "http://localhost:3000/results?q=a%20b"
        );
    }

    #[test]
    fn test_fallback_with_blank_text_round_trips() {
        let request = factlens_domain::FactCheckRequest {
            text: Some("   ".to_string()),
            url: Some("https://example.com/a".to_string()),
            images: None,
        };
        let fallback = FactCheckResult::fallback(&request);

        let link = embed_result("http://localhost:3000/results", &fallback).unwrap();
        assert_eq!(read_link(&parse(&link)), LinkPayload::Result(fallback));
    }

    #[test]
    fn test_strip_without_payload_is_unchanged() {
        let url = parse("http://localhost:3000/results?q=a%20b");
        assert_eq!(strip_extension_data(&url), url);
    }
}
