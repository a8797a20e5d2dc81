use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tcq_queue::QueueError;
use thiserror::Error;

use crate::response::ErrorEnvelope;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] tcq_store::StoreError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    /// The queue id path parameter did not parse as an integer.
    #[error("invalid queue id: {0}")]
    InvalidQueueId(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // The wire keeps one 404 wording for unknown and malformed ids.
            ServerError::Queue(QueueError::NotFound(_)) | ServerError::InvalidQueueId(_) => {
                (StatusCode::NOT_FOUND, "Todo queue not found".to_string())
            }
            // Gate contention and other store failures surface the store's
            // own message ("commit already in progress" for a held gate).
            ServerError::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        if status.is_server_error() {
            tracing::warn!(%status, error = %self, "request failed");
        }
        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
