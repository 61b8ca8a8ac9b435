use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::{Child, Reward, Task, Transaction};

/// All tracker state, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub children: Vec<Child>,
    pub tasks: Vec<Task>,
    pub rewards: Vec<Reward>,
    pub transactions: Vec<Transaction>,
}

/// Shared handle to the in-memory store.
///
/// Plays the role a database connection plays in a persistent setup: every
/// repository clones the handle and operates on the same state. Mutation
/// happens synchronously in response to a single user action, so there is
/// exactly one writer at a time.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Single-writer access leaves no torn state behind a poisoned lock;
    // recover instead of panicking.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
