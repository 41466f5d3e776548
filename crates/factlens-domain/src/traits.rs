//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{FactCheckRequest, FactCheckResult};
use std::future::Future;

/// Trait for the generative model that performs the fact-check
///
/// Implemented by the infrastructure layer (factlens-llm)
pub trait ModelProvider {
    /// Error type for model calls
    type Error;

    /// Send one request upstream and return the raw text of the first candidate
    ///
    /// Implementations make exactly one call and never retry.
    fn generate(
        &self,
        request: &FactCheckRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Model identifier, for logging and health reporting
    fn model_name(&self) -> &str;
}

/// Single-slot handoff for the most recent result
///
/// Implemented by the infrastructure layer (factlens-channel). Exactly one
/// result is live at a time; concurrent writers race and the last write wins.
pub trait ResultStore {
    /// Replace the stored result
    fn set(&self, result: FactCheckResult);

    /// Read the stored result, if any
    fn get(&self) -> Option<FactCheckResult>;

    /// Drop the stored result
    fn clear(&self);
}
