//! FactLens LLM Provider Layer
//!
//! Implementations of the `ModelProvider` trait from `factlens-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini `generateContent` with search grounding
//!
//! # Examples
//!
//! ```
//! use factlens_domain::{FactCheckRequest, ModelProvider};
//! use factlens_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"rating":"True"}"#);
//! let raw = provider.generate(&FactCheckRequest::from_text("claim")).await.unwrap();
//! assert_eq!(raw, r#"{"rating":"True"}"#);
//! assert_eq!(provider.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod prompt;

use factlens_domain::{FactCheckRequest, ModelProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use prompt::{PromptBuilder, PROMPT_VERSION, SYSTEM_INSTRUCTION};

/// Errors that can occur during model calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// Provider could not be constructed from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response carried no usable candidate text
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl LlmError {
    /// Whether the failure comes from local configuration rather than the upstream call
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::MissingApiKey | LlmError::Configuration(_))
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(String),
}

/// Mock model provider for deterministic testing
///
/// Returns pre-configured raw text without making any network calls.
/// Replies can be keyed on the request text; everything else gets the
/// default reply.
///
/// # Examples
///
/// ```
/// use factlens_llm::MockProvider;
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("The sky is green.", r#"{"rating":"False"}"#);
/// provider.add_error("boom");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<FactCheckRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockProvider {
    /// Create a new MockProvider with a fixed raw reply for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(response.into()))
    }

    /// Create a MockProvider whose every call fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Fail(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific raw reply for requests carrying the given text
    pub fn add_response(&mut self, text: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(text.into(), MockReply::Text(response.into()));
    }

    /// Configure to fail for requests carrying the given text
    pub fn add_error(&mut self, text: impl Into<String>) {
        lock(&self.responses).insert(text.into(), MockReply::Fail("Mock error".to_string()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    /// The most recent request passed to generate
    pub fn last_request(&self) -> Option<FactCheckRequest> {
        lock(&self.last_request).clone()
    }

    fn reply_for(&self, request: &FactCheckRequest) -> MockReply {
        request
            .text()
            .and_then(|text| lock(&self.responses).get(text).cloned())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl ModelProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, request: &FactCheckRequest) -> Result<String, Self::Error> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_request) = Some(request.clone());

        match self.reply_for(request) {
            MockReply::Text(text) => Ok(text),
            MockReply::Fail(message) => Err(LlmError::Other(message)),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate(&FactCheckRequest::from_text("anything")).await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        let hello = provider.generate(&FactCheckRequest::from_text("hello")).await.unwrap();
        let foo = provider.generate(&FactCheckRequest::from_text("foo")).await.unwrap();
        let url_only = provider
            .generate(&FactCheckRequest::from_url("https://example.com"))
            .await
            .unwrap();

        assert_eq!(hello, "world");
        assert_eq!(foo, "bar");
        assert_eq!(url_only, "Default mock response");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate(&FactCheckRequest::from_text("a")).await.unwrap();
        provider.generate(&FactCheckRequest::from_text("b")).await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_request().unwrap().text(), Some("b"));

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad content");

        let result = provider.generate(&FactCheckRequest::from_text("bad content")).await;
        assert!(matches!(result, Err(LlmError::Other(_))));

        let failing = MockProvider::failing("upstream down");
        let result = failing.generate(&FactCheckRequest::from_text("x")).await;
        assert_eq!(result.unwrap_err().to_string(), "LLM error: upstream down");
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate(&FactCheckRequest::from_text("x")).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_configuration_errors() {
        assert!(LlmError::MissingApiKey.is_configuration());
        assert!(LlmError::Configuration("bad".into()).is_configuration());
        assert!(!LlmError::Communication("down".into()).is_configuration());
        assert!(!LlmError::EmptyResponse("none".into()).is_configuration());
    }
}
