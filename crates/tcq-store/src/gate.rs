use tokio::sync::{Mutex, MutexGuard};

use crate::error::{StoreError, StoreResult};

/// Fail-fast single-writer exclusion for commits.
///
/// The gate has exactly two states, free and held. [`CommitGate::try_acquire`]
/// either returns a permit immediately or fails with
/// [`StoreError::CommitInProgress`]; there is deliberately no blocking or
/// waiting variant. Serializing commits is the queue's job, not the gate's.
///
/// The permit is an RAII guard, so the gate is released on every exit path,
/// including early returns and failures while a commit is in flight.
#[derive(Debug, Default)]
pub struct CommitGate {
    inner: Mutex<()>,
}

impl CommitGate {
    /// Create a gate in the free state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the gate without waiting.
    ///
    /// Fails with [`StoreError::CommitInProgress`] if another permit is
    /// live. The returned permit may be held across await points.
    pub fn try_acquire(&self) -> StoreResult<CommitPermit<'_>> {
        match self.inner.try_lock() {
            Ok(guard) => Ok(CommitPermit { _guard: guard }),
            Err(_) => Err(StoreError::CommitInProgress),
        }
    }
}

/// Exclusive permission to commit. Dropping the permit frees the gate.
pub struct CommitPermit<'a> {
    _guard: MutexGuard<'a, ()>,
}
