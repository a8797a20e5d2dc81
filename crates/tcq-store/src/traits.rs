use async_trait::async_trait;

use crate::error::StoreResult;
use crate::task::Task;

/// Write boundary for task commits.
///
/// Implementations must satisfy these invariants:
/// - A commit either fully succeeds (returns the stored [`Task`]) or fully
///   fails; there is no partially committed state.
/// - At most one commit is in flight at a time. A commit attempted while
///   another is in flight fails fast with
///   [`StoreError`](crate::StoreError)`::CommitInProgress` rather than
///   waiting.
/// - A failed commit leaves the writer ready to accept the next attempt.
///
/// Both the HTTP create path and the queue processor drive this trait; tests
/// substitute failing writers through it.
#[async_trait]
pub trait TaskWriter: Send + Sync {
    /// Commit a new task and return the stored record.
    async fn commit(&self, title: &str, description: &str) -> StoreResult<Task>;
}
