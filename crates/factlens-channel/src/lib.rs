//! FactLens Result Channel
//!
//! Hands the most recent result from whoever obtained it to whoever displays
//! it, including across a boundary that cannot share memory (for example a
//! browser extension opening the results page in a new tab).
//!
//! Two paths:
//! - a single-slot [`ResultStore`](factlens_domain::ResultStore), last write wins
//! - the result serialized, percent-encoded and embedded in the consumer's URL
//!   under the `extensionData` query parameter
//!
//! # Examples
//!
//! ```
//! use factlens_channel::{embed_result, InMemoryResultStore, ResultChannel};
//! use factlens_domain::{FactCheckRequest, FactCheckResult};
//! use std::sync::Arc;
//! use url::Url;
//!
//! let result = FactCheckResult::fallback(&FactCheckRequest::from_text("claim"));
//! let link = embed_result("http://localhost:3000/results", &result).unwrap();
//!
//! let channel = ResultChannel::new(Arc::new(InMemoryResultStore::new()));
//! let received = channel.receive(&Url::parse(&link).unwrap());
//! assert_eq!(received.result, Some(result));
//! assert_eq!(received.clean_url.unwrap().as_str(), "http://localhost:3000/results");
//! ```

#![warn(missing_docs)]

mod channel;
mod error;
pub mod link;
mod store;

pub use channel::{Received, ResultChannel};
pub use error::ChannelError;
pub use link::{embed_result, read_link, strip_extension_data, LinkPayload, EXTENSION_DATA_PARAM};
pub use store::InMemoryResultStore;
