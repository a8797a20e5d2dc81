use std::sync::RwLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tcq_types::{QueueTaskId, TaskId};
use tracing::debug;

use crate::clock::QueueIdClock;
use crate::error::{QueueError, QueueResult};
use crate::record::QueuedTask;

/// Entry counts by state, for logs and the health endpoint.
///
/// `pending` counts every uncommitted entry; `failing` is the subset of
/// `pending` with at least one failed attempt. `pending + committed`
/// equals the total number of entries ever enqueued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCounts {
    pub pending: usize,
    pub failing: usize,
    pub committed: usize,
}

/// In-memory, append-only commit queue.
///
/// Entries are held in arrival order behind a `RwLock` and are never
/// removed; a committed entry stays listed and queryable as a record of
/// what happened. Ids come from an owned [`QueueIdClock`]. All methods are
/// synchronous and never hold a lock across an await.
pub struct CommitQueue {
    entries: RwLock<Vec<QueuedTask>>,
    clock: QueueIdClock,
}

impl CommitQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            clock: QueueIdClock::new(),
        }
    }

    /// Append a pending entry and return it immediately.
    ///
    /// Never fails and never touches the store's commit gate; the actual
    /// commit happens later, on a processor tick.
    pub fn enqueue(&self, title: &str, description: &str) -> QueuedTask {
        let entry = QueuedTask::new(self.clock.next_id(), title, description, Utc::now());
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.push(entry.clone());
        debug!(id = %entry.id, title = %entry.title, "task enqueued");
        entry
    }

    /// Every entry ever enqueued, in arrival order, regardless of state.
    pub fn list(&self) -> Vec<QueuedTask> {
        self.entries.read().expect("lock poisoned").clone()
    }

    /// Look up a single entry by id.
    pub fn get(&self, id: QueueTaskId) -> QueueResult<QueuedTask> {
        self.entries
            .read()
            .expect("lock poisoned")
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(QueueError::NotFound(id))
    }

    /// The oldest uncommitted entry, if any.
    ///
    /// Scans fresh on every call; failed entries stay eligible and keep
    /// their place at the head.
    pub fn first_pending(&self) -> Option<QueuedTask> {
        self.entries
            .read()
            .expect("lock poisoned")
            .iter()
            .find(|entry| entry.is_pending())
            .cloned()
    }

    /// Mark an entry committed, pointing at the stored task.
    ///
    /// Fails with [`QueueError::AlreadyCommitted`] if the entry committed
    /// before; the `false -> true` transition happens at most once.
    pub fn mark_committed(&self, id: QueueTaskId, task_id: TaskId) -> QueueResult<QueuedTask> {
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(QueueError::NotFound(id))?;
        if entry.committed {
            return Err(QueueError::AlreadyCommitted(id));
        }
        entry.record_commit(task_id, Utc::now());
        Ok(entry.clone())
    }

    /// Record a failed commit attempt against an entry.
    ///
    /// The entry stays pending and keeps its queue position.
    pub fn mark_failed(&self, id: QueueTaskId, error: impl Into<String>) -> QueueResult<QueuedTask> {
        let mut entries = self.entries.write().expect("lock poisoned");
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(QueueError::NotFound(id))?;
        if entry.committed {
            return Err(QueueError::AlreadyCommitted(id));
        }
        entry.record_failure(error, Utc::now());
        Ok(entry.clone())
    }

    /// Entry counts by state.
    pub fn counts(&self) -> QueueCounts {
        let entries = self.entries.read().expect("lock poisoned");
        let mut counts = QueueCounts::default();
        for entry in entries.iter() {
            if entry.committed {
                counts.committed += 1;
            } else {
                counts.pending += 1;
                if entry.try_count > 0 {
                    counts.failing += 1;
                }
            }
        }
        counts
    }

    /// Total number of entries ever enqueued.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing was ever enqueued.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Default for CommitQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommitQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitQueue")
            .field("counts", &self.counts())
            .finish()
    }
}
