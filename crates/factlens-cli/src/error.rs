//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Request rejected locally before any network I/O
    #[error("{0}")]
    Gate(#[from] factlens_gatekeeper::GateError),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Server answered with an error body
    #[error("Server error (HTTP {status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// The server's `error` field, verbatim
        message: String,
    },

    /// Results link could not be built
    #[error("Link error: {0}")]
    Link(#[from] factlens_channel::ChannelError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CliError::InvalidInput(format!("Unexpected server response: {}", e))
        } else {
            CliError::Connection(e.to_string())
        }
    }
}
