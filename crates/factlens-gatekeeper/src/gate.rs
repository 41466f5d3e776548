//! Request admission

use crate::GateError;
use factlens_domain::FactCheckRequest;
use tracing::{debug, warn};

/// The Gatekeeper admits requests before they reach the model
#[derive(Debug, Clone, Copy, Default)]
pub struct Gatekeeper;

impl Gatekeeper {
    /// Create a new Gatekeeper
    pub fn new() -> Self {
        Self
    }

    /// Admit a request, or explain why it cannot be checked
    ///
    /// The request itself is never modified.
    pub fn admit(&self, request: &FactCheckRequest) -> Result<(), GateError> {
        if !request.has_content() {
            warn!("Rejected fact-check request with no content");
            return Err(GateError::NoContent);
        }

        debug!(
            has_text = request.text().is_some(),
            has_url = request.url().is_some(),
            images = request.images().len(),
            "Admitted fact-check request"
        );
        Ok(())
    }
}
