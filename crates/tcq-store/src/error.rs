/// Errors from task store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Another commit holds the gate. Callers fail fast; the queue
    /// processor retries on a later tick.
    #[error("commit already in progress")]
    CommitInProgress,

    /// The backing write failed after the gate was acquired.
    #[error("backing write failed: {0}")]
    WriteFailed(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
