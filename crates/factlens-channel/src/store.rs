//! In-memory single-slot result store

use factlens_domain::{FactCheckResult, ResultStore};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide slot holding at most one result
///
/// Clones share the same slot. Concurrent writers are not ordered beyond
/// last-write-wins; the lock only keeps the slot itself consistent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultStore {
    slot: Arc<RwLock<Option<FactCheckResult>>>,
}

impl InMemoryResultStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<FactCheckResult>> {
        self.slot.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<FactCheckResult>> {
        self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResultStore for InMemoryResultStore {
    fn set(&self, result: FactCheckResult) {
        *self.write() = Some(result);
    }

    fn get(&self) -> Option<FactCheckResult> {
        self.read().clone()
    }

    fn clear(&self) {
        *self.write() = None;
    }
}
