//! Inbound fact-check request

use serde::{Deserialize, Serialize};

/// Content submitted for fact-checking
///
/// At least one of `text`, `url` or `images` must carry content before the
/// request is sent upstream. The gate in `factlens-gatekeeper` enforces this.
///
/// # Examples
///
/// ```
/// use factlens_domain::FactCheckRequest;
///
/// let request = FactCheckRequest::from_text("The moon is made of cheese.")
///     .with_url("https://example.com/moon");
/// assert_eq!(request.text(), Some("The moon is made of cheese."));
/// assert_eq!(request.url(), Some("https://example.com/moon"));
/// assert!(request.images().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckRequest {
    /// Free-form content to verify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Web address whose main content should be fetched and verified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Base64 images, bare or as `data:<mime>;base64,` URIs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl FactCheckRequest {
    /// Create a request carrying only text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a request carrying only a URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Set the URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append an image payload
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.get_or_insert_with(Vec::new).push(image.into());
        self
    }

    /// Text, if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// URL, if present and non-empty
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Image payloads (empty when absent)
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or(&[])
    }

    /// Whether any field carries usable content
    ///
    /// Whitespace-only text does not count.
    pub fn has_content(&self) -> bool {
        self.text().is_some_and(|t| !t.trim().is_empty())
            || self.url().is_some()
            || !self.images().is_empty()
    }
}
