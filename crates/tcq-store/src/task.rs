use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tcq_types::TaskId;

/// A committed task record.
///
/// Created only by a successful commit through the gate, with the id the
/// store assigned. Immutable afterwards: there is no update or delete, and
/// `completed` stays `false` for the lifetime of the record.
///
/// Wire shape is camelCase (`createdAt`, `updatedAt`); timestamps serialize
/// as RFC 3339 strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Sequential store-assigned identifier.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Always `false`; completion is out of scope for the commit path.
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a freshly committed task. `created_at` and `updated_at` start
    /// equal.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
