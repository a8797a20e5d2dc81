use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a committed task in the store.
///
/// Assigned sequentially by the store (`count + 1`) while the commit gate is
/// held, so ids are contiguous from 1 for the lifetime of the store. Never
/// reused.
///
/// Serializes as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a queue entry.
///
/// Produced by the queue's monotonic id clock: strictly increasing,
/// seeded from wall-clock milliseconds, unique under arbitrarily rapid
/// calls. A separate identifier space from [`TaskId`]; the two never mix.
///
/// Serializes as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueueTaskId(u64);

impl QueueTaskId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QueueTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_roundtrips_value() {
        let id = TaskId::new(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn task_id_display_is_bare_number() {
        let id = TaskId::new(42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn task_id_serializes_as_integer() {
        let id = TaskId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let parsed: TaskId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn task_ids_order_by_value() {
        assert!(TaskId::new(1) < TaskId::new(2));
        assert_eq!(TaskId::new(5), TaskId::new(5));
    }

    #[test]
    fn queue_task_id_display_and_serde() {
        let id = QueueTaskId::new(1_700_000_000_123);
        assert_eq!(format!("{id}"), "1700000000123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "1700000000123");
        let parsed: QueueTaskId = serde_json::from_str("1700000000123").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn queue_task_ids_order_by_value() {
        assert!(QueueTaskId::new(10) < QueueTaskId::new(11));
    }
}
