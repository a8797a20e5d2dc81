use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tcq_queue::QueuedTask;
use tcq_store::{Task, TaskWriter};
use tcq_types::QueueTaskId;

use crate::error::{ServerError, ServerResult};
use crate::response::ApiEnvelope;
use crate::state::AppState;

/// Request body for creating or enqueueing a task.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

/// GET /todos
pub async fn list_todos_handler(State(state): State<AppState>) -> Json<ApiEnvelope<Vec<Task>>> {
    let tasks = state.store.list();
    Json(ApiEnvelope::success(tasks, "Todos fetched successfully"))
}

/// POST /todos
///
/// Commits directly through the gate. Fails fast with the 500 envelope if
/// another commit is in flight; nothing waits.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ServerResult<(StatusCode, Json<ApiEnvelope<Task>>)> {
    let task = state
        .store
        .commit(&request.title, &request.description)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::success(task, "Todo created successfully")),
    ))
}

/// POST /todos/queue
///
/// Always accepts and returns the pending entry; the processor commits it
/// on a later tick.
pub async fn enqueue_todo_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> (StatusCode, Json<ApiEnvelope<QueuedTask>>) {
    let entry = state.queue.enqueue(&request.title, &request.description);
    (
        StatusCode::CREATED,
        Json(ApiEnvelope::success(entry, "Todo added to queue")),
    )
}

/// GET /todos/queue
pub async fn list_queue_handler(
    State(state): State<AppState>,
) -> Json<ApiEnvelope<Vec<QueuedTask>>> {
    let entries = state.queue.list();
    Json(
        ApiEnvelope::success(entries, "Todos queue fetched successfully")
            .with_fetched_at(Utc::now()),
    )
}

/// GET /todos/queue/:id
///
/// The id arrives as a raw path segment; anything that does not parse as an
/// integer gets the same 404 as an unknown id.
pub async fn get_queue_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<ApiEnvelope<QueuedTask>>> {
    let id = id
        .parse::<u64>()
        .map(QueueTaskId::new)
        .map_err(|_| ServerError::InvalidQueueId(id))?;
    let entry = state.queue.get(id)?;
    Ok(Json(ApiEnvelope::success(
        entry,
        "Todo queue fetched successfully",
    )))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "queue": state.queue.counts(),
    }))
}
