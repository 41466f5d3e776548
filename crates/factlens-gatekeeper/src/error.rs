//! Gatekeeper error types

use thiserror::Error;

/// Reasons a request is turned away
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// None of text, URL or images carries content
    #[error("Either text, URL, or images must be provided for fact-checking")]
    NoContent,
}
