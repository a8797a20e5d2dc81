use chrono::{DateTime, Utc};
use serde::Serialize;

/// `status` field of every response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Success body: `{result, message, status, fetchedAt?}`.
///
/// `fetchedAt` is only present on responses that opt in via
/// [`with_fetched_at`](ApiEnvelope::with_fetched_at) (the queue listing).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub result: T,
    pub message: String,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a result with a success message.
    pub fn success(result: T, message: impl Into<String>) -> Self {
        Self {
            result,
            message: message.into(),
            status: ResponseStatus::Success,
            fetched_at: None,
        }
    }

    /// Stamp the envelope with a fetch time.
    pub fn with_fetched_at(mut self, at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(at);
        self
    }
}

/// Failure body: `{message, status: "error"}`. There is no `result` field.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub status: ResponseStatus,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Error,
        }
    }
}
