//! Gemini Provider Implementation
//!
//! Sends one `generateContent` call per fact-check with the fixed system
//! instruction, the user content, Google Search grounding (plus URL context
//! retrieval when a URL is present) and fixed safety thresholds.
//!
//! There is no retry: a failed call surfaces immediately to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use factlens_llm::{GeminiConfig, GeminiProvider};
//!
//! let config = GeminiConfig {
//!     api_key: Some("your-key".to_string()),
//!     ..GeminiConfig::default()
//! };
//! let provider = GeminiProvider::new(config).unwrap();
//! ```

use crate::prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
use crate::LlmError;
use factlens_domain::{FactCheckRequest, ModelProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for a single call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Media type assumed for every image payload
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Blocking level applied to every safety category
pub const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Safety categories that are thresholded
pub const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Gemini connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; calls fail with [`LlmError::MissingApiKey`] when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Whether a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Google Gemini provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

/// Content part of an outgoing message
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text
    Text {
        /// Text body
        text: String,
    },
    /// Inline binary payload
    InlineData {
        /// Payload and its media type
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Inline base64 data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Media type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Bare base64 payload
    pub data: String,
}

/// A message
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Author role; omitted for the system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Message parts
    pub parts: Vec<Part>,
}

/// Empty tool configuration object
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolConfig {}

/// Tool enablement; exactly one field is set per entry
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web search grounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<ToolConfig>,
    /// URL content retrieval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_context: Option<ToolConfig>,
}

/// Safety threshold for one harm category
#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    /// Harm category
    pub category: &'static str,
    /// Blocking threshold
    pub threshold: &'static str,
}

/// Body of a `generateContent` call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// System instruction
    pub system_instruction: Content,
    /// Enabled tools
    pub tools: Vec<Tool>,
    /// Safety thresholds
    pub safety_settings: Vec<SafetySetting>,
}

/// Response from `generateContent`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate answers
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback when the prompt itself was blocked
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Candidate answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content; absent when the candidate was blocked
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    /// Response parts; non-text parts carry no `text`
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// Response part
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Text, when this is a text part
    #[serde(default)]
    pub text: Option<String>,
}

/// Prompt-level feedback
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error body returned on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// Strip a `data:<mime>;base64,` prefix, leaving the bare payload
pub fn strip_data_uri_prefix(image: &str) -> &str {
    if !image.starts_with("data:") {
        return image;
    }
    match image.find(";base64,") {
        Some(pos) => &image[pos + ";base64,".len()..],
        None => image,
    }
}

/// Build the `generateContent` body for a request
pub fn build_request(request: &FactCheckRequest) -> GenerateContentRequest {
    let mut parts = vec![Part::Text {
        text: PromptBuilder::new(request).build(),
    }];

    parts.extend(request.images().iter().map(|image| Part::InlineData {
        inline_data: InlineData {
            mime_type: IMAGE_MIME_TYPE.to_string(),
            data: strip_data_uri_prefix(image).to_string(),
        },
    }));

    let mut tools = vec![Tool {
        google_search: Some(ToolConfig {}),
        ..Tool::default()
    }];
    if request.url().is_some() {
        tools.push(Tool {
            url_context: Some(ToolConfig {}),
            ..Tool::default()
        });
    }

    let safety_settings = SAFETY_CATEGORIES
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: SAFETY_THRESHOLD,
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        tools,
        safety_settings,
    }
}

/// Concatenate the text parts of the first candidate
pub fn first_candidate_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("no candidates returned (blocked: {})", reason))
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(LlmError::EmptyResponse(reason));
    };

    let text: String = candidate
        .content
        .unwrap_or_default()
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        let reason = match candidate.finish_reason {
            Some(finish) => format!("candidate has no text content (finish reason: {})", finish),
            None => "candidate has no text content".to_string(),
        };
        return Err(LlmError::EmptyResponse(reason));
    }

    Ok(text)
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Provider configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Issue one `generateContent` call and return the first candidate's text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured (no request is sent)
    /// - Network communication fails or the API answers non-2xx
    /// - The response body is not a `generateContent` response
    /// - There are no candidates, or the first has no text
    pub async fn call(&self, request: &FactCheckRequest) -> Result<String, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );
        let body = build_request(request);

        debug!(
            model = %self.config.model,
            images = request.images().len(),
            tools = body.tools.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            error!(%status, "Gemini call failed");
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, message)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let raw = first_candidate_text(parsed)?;
        debug!("Gemini response length: {} chars", raw.len());
        Ok(raw)
    }
}

impl ModelProvider for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, request: &FactCheckRequest) -> Result<String, Self::Error> {
        self.call(request).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
