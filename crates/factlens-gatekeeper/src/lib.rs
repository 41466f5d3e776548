//! FactLens Gatekeeper
//!
//! Rejects fact-check requests that carry nothing to check, before any
//! upstream call is made.
//!
//! A request passes when at least one of these holds:
//! - `text` is non-empty after trimming whitespace
//! - `url` is non-empty
//! - `images` is a non-empty sequence
//!
//! # Examples
//!
//! ```
//! use factlens_domain::FactCheckRequest;
//! use factlens_gatekeeper::{GateError, Gatekeeper};
//!
//! let gatekeeper = Gatekeeper::new();
//! assert!(gatekeeper.admit(&FactCheckRequest::from_text("Claim")).is_ok());
//! assert!(matches!(
//!     gatekeeper.admit(&FactCheckRequest::default()),
//!     Err(GateError::NoContent)
//! ));
//! ```

#![warn(missing_docs)]

mod error;
mod gate;

pub use error::GateError;
pub use gate::Gatekeeper;
