//! Error types for the result channel

use thiserror::Error;

/// Errors raised while publishing a result
///
/// Reading is infallible by contract: an unreadable embedded result counts
/// as no result.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The consumer address is not a valid absolute URL
    #[error("Invalid consumer URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The result could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
