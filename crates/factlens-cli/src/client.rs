//! HTTP client for a FactLens server

use crate::error::{CliError, Result};
use factlens_domain::{FactCheckRequest, FactCheckResult};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// Server health information
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    /// Overall status
    pub status: String,
    /// Model in use
    pub model: String,
    /// System instruction version
    pub prompt_version: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the FactLens HTTP API
pub struct FactLensClient {
    base_url: String,
    http: reqwest::Client,
}

impl FactLensClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Server base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Results page address on this server
    pub fn results_url(&self) -> String {
        format!("{}/results", self.base_url)
    }

    /// Submit a fact-check request
    pub async fn check(&self, request: &FactCheckRequest) -> Result<FactCheckResult> {
        let response = self
            .http
            .post(format!("{}/api/fact-check", self.base_url))
            .json(request)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// Fetch server health
    pub async fn health(&self) -> Result<Health> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// The server's latest result, if it has one
    pub async fn latest(&self) -> Result<Option<FactCheckResult>> {
        let response = self.http.get(self.results_url()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(ensure_success(response).await?.json().await?))
    }

    /// Clear the server's latest result
    pub async fn clear(&self) -> Result<()> {
        let response = self.http.delete(self.results_url()).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into [`CliError::Server`]
///
/// The `error` field of a JSON error body is surfaced verbatim.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                text
            }
        });

    Err(CliError::Server {
        status: status.as_u16(),
        message,
    })
}
