//! Core FactChecker implementation

use crate::error::FactCheckError;
use crate::parser::extract;
use crate::validator::validate;
use factlens_domain::{FactCheckRequest, FactCheckResult, ModelProvider};
use factlens_gatekeeper::Gatekeeper;
use std::time::Instant;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

/// The FactChecker runs one request through gate, model, extractor and validator
///
/// One upstream call per admitted request, no retry and no timeout of its own;
/// any timeout belongs to the provider's transport.
pub struct FactChecker<P> {
    provider: P,
    gatekeeper: Gatekeeper,
}

impl<P> FactChecker<P>
where
    P: ModelProvider + Sync,
    P::Error: Into<FactCheckError>,
{
    /// Create a new FactChecker
    pub fn new(provider: P, gatekeeper: Gatekeeper) -> Self {
        Self {
            provider,
            gatekeeper,
        }
    }

    /// The underlying model provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fact-check a request
    ///
    /// # Errors
    ///
    /// - [`FactCheckError::Validation`] when the request has no content
    /// - [`FactCheckError::Configuration`] when the provider is not configured
    /// - [`FactCheckError::Upstream`] when the model call fails
    ///
    /// Output the model formats badly is never an error; it yields an
    /// `Unverifiable` fallback result.
    pub async fn check(&self, request: &FactCheckRequest) -> Result<FactCheckResult, FactCheckError> {
        let request_id = Uuid::now_v7();
        let span = info_span!("fact_check", %request_id, model = self.provider.model_name());

        async move {
            self.gatekeeper.admit(request)?;

            info!(
                text_len = request.text().map_or(0, str::len),
                has_url = request.url().is_some(),
                images = request.images().len(),
                "Starting fact-check"
            );
            let start_time = Instant::now();

            let raw = self.provider.generate(request).await.map_err(|e| {
                let e: FactCheckError = e.into();
                error!("Model call failed: {}", e);
                e
            })?;

            debug!("Model response length: {} chars", raw.len());

            let result = validate(extract(&raw, request), request);

            info!(
                rating = %result.rating,
                sources = result.verification_sources.len(),
                fallback = result.is_fallback(),
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Fact-check complete"
            );

            Ok(result)
        }
        .instrument(span)
        .await
    }
}
