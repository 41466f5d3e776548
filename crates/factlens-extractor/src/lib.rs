//! FactLens Extractor
//!
//! Turns raw model output into a dependable `FactCheckResult`.
//!
//! # Architecture
//!
//! ```text
//! Request → Gatekeeper → ModelProvider → parser::extract → validator::validate → Result
//! ```
//!
//! # Key Features
//!
//! - **Layered recovery**: strict parse, then fenced block, then brace span
//! - **Schema enforcement**: required fields, four-valued rating, list coercion
//! - **Graceful degradation**: unusable output becomes an `Unverifiable`
//!   fallback instead of an error
//!
//! # Example Usage
//!
//! ```no_run
//! use factlens_domain::FactCheckRequest;
//! use factlens_extractor::FactChecker;
//! use factlens_gatekeeper::Gatekeeper;
//! use factlens_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("Sorry, I cannot help with that.");
//! let checker = FactChecker::new(provider, Gatekeeper::new());
//!
//! let result = checker
//!     .check(&FactCheckRequest::from_text("The moon is made of cheese."))
//!     .await?;
//!
//! println!("{}: {}", result.rating, result.explanation);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod checker;
mod error;
pub mod parser;
pub mod validator;


pub use checker::FactChecker;
pub use error::{FactCheckError, SchemaError};
pub use parser::{extract, Extraction};
pub use validator::{validate, validate_object};
