//! Consumer side of the result channel

use crate::link::{read_link, strip_extension_data, LinkPayload};
use factlens_domain::{FactCheckResult, ResultStore};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// What a consumer should do after receiving an address
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
    /// Result to display, if any
    pub result: Option<FactCheckResult>,

    /// Set when the address carried a payload: the same address without it,
    /// which the consumer should switch to so a reload does not re-apply it
    pub clean_url: Option<Url>,
}

/// Single-slot store plus the address transport
#[derive(Clone)]
pub struct ResultChannel {
    store: Arc<dyn ResultStore + Send + Sync>,
}

impl ResultChannel {
    /// Create a channel over the given store
    pub fn new(store: Arc<dyn ResultStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Record the latest result; replaces any previous one
    pub fn publish(&self, result: FactCheckResult) {
        debug!(rating = %result.rating, "Publishing result");
        self.store.set(result);
    }

    /// The stored result, without consuming it
    pub fn current(&self) -> Option<FactCheckResult> {
        self.store.get()
    }

    /// Drop the stored result
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Resolve the result for a consumer address
    ///
    /// An embedded result takes precedence over the store and is written to
    /// it. An unreadable payload is ignored in favour of the store. Either
    /// way a present payload yields a `clean_url`.
    pub fn receive(&self, url: &Url) -> Received {
        match read_link(url) {
            LinkPayload::Absent => Received {
                result: self.current(),
                clean_url: None,
            },
            LinkPayload::Result(result) => {
                info!(rating = %result.rating, "Received result through address");
                self.publish(result.clone());
                Received {
                    result: Some(result),
                    clean_url: Some(strip_extension_data(url)),
                }
            }
            LinkPayload::Unreadable => Received {
                result: self.current(),
                clean_url: Some(strip_extension_data(url)),
            },
        }
    }
}
