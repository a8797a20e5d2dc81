use tcq_types::QueueTaskId;

/// Errors from commit queue operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// No entry with the given id was ever enqueued.
    #[error("queue entry not found: {0}")]
    NotFound(QueueTaskId),

    /// The entry already committed; its state cannot change again.
    #[error("queue entry already committed: {0}")]
    AlreadyCommitted(QueueTaskId),
}

/// Result alias for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;
