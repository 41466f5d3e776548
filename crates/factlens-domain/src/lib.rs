//! FactLens Domain Layer
//!
//! Core types and trait seams shared by every other FactLens crate.
//! Apart from `serde` for the wire shape, this crate has no external
//! dependencies and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **FactCheckRequest**: text, a URL and/or images submitted for verification
//! - **FactCheckResult**: the canonical, validated verdict
//! - **Rating**: the four-valued verdict (`True`, `False`, `Misleading`, `Unverifiable`)
//! - **Fallback result**: the `Unverifiable` answer used when model output is unusable
//!
//! ## Architecture
//!
//! Infrastructure lives in other crates and plugs in through the traits in
//! [`traits`]:
//! - `ModelProvider` is implemented by `factlens-llm`
//! - `ResultStore` is implemented by `factlens-channel`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod request;
pub mod result;
pub mod traits;

// Re-exports for convenience
pub use request::FactCheckRequest;
pub use result::{FactCheckResult, Rating};
pub use traits::{ModelProvider, ResultStore};
