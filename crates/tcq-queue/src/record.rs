use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tcq_types::{QueueTaskId, TaskId};

/// A queue entry: the requested task plus commit bookkeeping.
///
/// This is the single source of truth for an entry's state. The record is
/// created pending on enqueue and mutated only through the transition
/// methods, which the queue applies on behalf of the processor.
///
/// Lifecycle: pending, possibly through any number of failed attempts, until
/// one attempt commits. `committed` is terminal; `try_count` and `error`
/// keep the attempt history even after the commit lands.
///
/// Wire shape is camelCase; `refId`, `error`, and `updatedAt` are omitted
/// from JSON until they are first set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedTask {
    /// Clock-assigned identifier, unique across the queue's lifetime.
    pub id: QueueTaskId,
    pub title: String,
    pub description: String,
    /// `false` until some attempt commits; flips to `true` at most once.
    pub committed: bool,
    /// Failed attempts so far; first failure sets it to 1.
    pub try_count: u32,
    /// Id of the committed task in the store. Present exactly when
    /// `committed` is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<TaskId>,
    /// Message of the most recent failed attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every commit attempt, successful or not. `None` until
    /// the first attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QueuedTask {
    /// Create a pending entry.
    pub fn new(
        id: QueueTaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            committed: false,
            try_count: 0,
            ref_id: None,
            error: None,
            created_at: now,
            updated_at: None,
        }
    }

    /// Mark the entry committed, pointing at the stored task.
    pub fn record_commit(&mut self, ref_id: TaskId, now: DateTime<Utc>) {
        self.committed = true;
        self.ref_id = Some(ref_id);
        self.updated_at = Some(now);
    }

    /// Record a failed commit attempt. The entry stays pending.
    pub fn record_failure(&mut self, error: impl Into<String>, now: DateTime<Utc>) {
        self.error = Some(error.into());
        self.try_count += 1;
        self.updated_at = Some(now);
    }

    /// Returns `true` while the entry has not committed.
    pub fn is_pending(&self) -> bool {
        !self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> QueuedTask {
        QueuedTask::new(QueueTaskId::new(100), "title", "description", Utc::now())
    }

    #[test]
    fn new_entry_is_pending_with_no_history() {
        let entry = make_entry();
        assert!(entry.is_pending());
        assert!(!entry.committed);
        assert_eq!(entry.try_count, 0);
        assert!(entry.ref_id.is_none());
        assert!(entry.error.is_none());
        assert!(entry.updated_at.is_none());
    }

    #[test]
    fn record_failure_accumulates_attempts() {
        let mut entry = make_entry();
        entry.record_failure("first failure", Utc::now());
        assert_eq!(entry.try_count, 1);
        assert_eq!(entry.error.as_deref(), Some("first failure"));
        assert!(entry.is_pending());
        assert!(entry.updated_at.is_some());

        entry.record_failure("second failure", Utc::now());
        assert_eq!(entry.try_count, 2);
        assert_eq!(entry.error.as_deref(), Some("second failure"));
    }

    #[test]
    fn record_commit_is_terminal_and_keeps_history() {
        let mut entry = make_entry();
        entry.record_failure("transient", Utc::now());
        entry.record_commit(TaskId::new(7), Utc::now());

        assert!(entry.committed);
        assert!(!entry.is_pending());
        assert_eq!(entry.ref_id, Some(TaskId::new(7)));
        // Attempt history survives the commit.
        assert_eq!(entry.try_count, 1);
        assert_eq!(entry.error.as_deref(), Some("transient"));
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let entry = make_entry();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 100);
        assert_eq!(json["committed"], false);
        assert_eq!(json["tryCount"], 0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("refId").is_none());
        assert!(json.get("error").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn committed_entry_serializes_ref_id() {
        let mut entry = make_entry();
        entry.record_commit(TaskId::new(3), Utc::now());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["committed"], true);
        assert_eq!(json["refId"], 3);
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn serde_roundtrip_with_unset_fields() {
        let entry = make_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: QueuedTask = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
