//! HTTP server for the Task Commit Queue service.
//!
//! Exposes the todo store and its commit queue over REST, and owns the
//! lifecycle of the background queue processor.
//!
//! # Endpoints
//!
//! - `GET /todos` / `POST /todos` -- list tasks, commit a task directly
//! - `POST /todos/queue` -- enqueue a task for background commit
//! - `GET /todos/queue` -- list every queue entry (with `fetchedAt`)
//! - `GET /todos/queue/:id` -- poll a single entry
//! - `GET /health` -- liveness plus queue counts
//!
//! Every body is the uniform envelope: `result`/`message`/`status` on
//! success, `message`/`status` on failure.

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use response::{ApiEnvelope, ErrorEnvelope, ResponseStatus};
pub use server::TcqServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tcq_queue::{CommitQueue, ProcessorConfig, QueueProcessor, TickOutcome};
    use tcq_store::{InMemoryTaskStore, StoreConfig, TaskWriter};
    use tower::util::ServiceExt;

    use super::*;

    fn make_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryTaskStore::new(StoreConfig::instant())),
            Arc::new(CommitQueue::new()),
        )
    }

    fn make_app(state: &AppState) -> axum::Router {
        router::build_router(state.clone())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn health_endpoint() {
        let app = make_app(&make_state());
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["queue"]["pending"], 0);
    }

    // -----------------------------------------------------------------------
    // Direct commits
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn todos_start_empty() {
        let app = make_app(&make_state());
        let response = app.oneshot(get("/todos")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result"], json!([]));
        assert_eq!(body["message"], "Todos fetched successfully");
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn create_todo_commits_and_lists() {
        let state = make_state();
        let app = make_app(&state);

        let response = app
            .clone()
            .oneshot(post_json(
                "/todos",
                json!({"title": "Buy milk", "description": "Two liters"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo created successfully");
        assert_eq!(body["status"], "success");
        assert_eq!(body["result"]["id"], 1);
        assert_eq!(body["result"]["completed"], false);
        assert!(body["result"].get("createdAt").is_some());

        let listed = body_json(app.oneshot(get("/todos")).await.unwrap()).await;
        assert_eq!(listed["result"].as_array().unwrap().len(), 1);
        assert_eq!(listed["result"][0]["title"], "Buy milk");
    }

    #[tokio::test]
    async fn concurrent_creates_get_one_500() {
        let state = AppState::new(
            Arc::new(InMemoryTaskStore::new(StoreConfig {
                commit_latency: Duration::from_millis(50),
            })),
            Arc::new(CommitQueue::new()),
        );
        let app = make_app(&state);

        let left = app
            .clone()
            .oneshot(post_json("/todos", json!({"title": "a", "description": ""})));
        let right = app
            .clone()
            .oneshot(post_json("/todos", json!({"title": "b", "description": ""})));
        let (left, right) = tokio::join!(left, right);

        let statuses = [left.unwrap(), right.unwrap()];
        let created = statuses
            .iter()
            .filter(|r| r.status() == StatusCode::CREATED)
            .count();
        assert_eq!(created, 1);

        let loser = statuses
            .into_iter()
            .find(|r| r.status() == StatusCode::INTERNAL_SERVER_ERROR)
            .expect("one commit must bounce off the gate");
        let body = body_json(loser).await;
        assert_eq!(body["message"], "commit already in progress");
        assert_eq!(body["status"], "error");
        assert!(body.get("result").is_none());

        assert_eq!(state.store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Queue endpoints
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn enqueue_returns_pending_entry() {
        let app = make_app(&make_state());
        let response = app
            .oneshot(post_json(
                "/todos/queue",
                json!({"title": "Defer me", "description": "later"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo added to queue");
        assert_eq!(body["result"]["committed"], false);
        assert_eq!(body["result"]["tryCount"], 0);
        assert!(body["result"].get("refId").is_none());
        assert!(body["result"]["id"].as_u64().is_some());
    }

    #[tokio::test]
    async fn queue_listing_carries_fetched_at() {
        let state = make_state();
        let app = make_app(&state);

        app.clone()
            .oneshot(post_json(
                "/todos/queue",
                json!({"title": "one", "description": ""}),
            ))
            .await
            .unwrap();

        let body = body_json(app.oneshot(get("/todos/queue")).await.unwrap()).await;
        assert_eq!(body["message"], "Todos queue fetched successfully");
        assert_eq!(body["result"].as_array().unwrap().len(), 1);
        assert!(body.get("fetchedAt").is_some());
    }

    #[tokio::test]
    async fn queue_entry_fetched_by_id() {
        let state = make_state();
        let app = make_app(&state);

        let created = body_json(
            app.clone()
                .oneshot(post_json(
                    "/todos/queue",
                    json!({"title": "find me", "description": ""}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["result"]["id"].as_u64().unwrap();

        let response = app.oneshot(get(&format!("/todos/queue/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo queue fetched successfully");
        assert_eq!(body["result"]["title"], "find me");
    }

    #[tokio::test]
    async fn unknown_queue_id_is_404() {
        let app = make_app(&make_state());
        let response = app.oneshot(get("/todos/queue/999999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Todo queue not found");
        assert_eq!(body["status"], "error");
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn malformed_queue_id_is_404() {
        let app = make_app(&make_state());
        let response = app.oneshot(get("/todos/queue/not-a-number")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Todo queue not found");
    }

    // -----------------------------------------------------------------------
    // Queue to store, end to end
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn enqueued_task_commits_through_processor() {
        let state = make_state();
        let app = make_app(&state);

        let created = body_json(
            app.clone()
                .oneshot(post_json(
                    "/todos/queue",
                    json!({"title": "Ship it", "description": "eventually"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["result"]["id"].as_u64().unwrap();

        let processor = QueueProcessor::new(
            Arc::clone(&state.queue),
            Arc::clone(&state.store) as Arc<dyn TaskWriter>,
            ProcessorConfig::default(),
        );
        assert!(matches!(
            processor.tick().await,
            TickOutcome::Committed { .. }
        ));

        let entry = body_json(app.clone().oneshot(get(&format!("/todos/queue/{id}"))).await.unwrap())
            .await;
        assert_eq!(entry["result"]["committed"], true);
        assert_eq!(entry["result"]["refId"], 1);

        let todos = body_json(app.oneshot(get("/todos")).await.unwrap()).await;
        assert_eq!(todos["result"].as_array().unwrap().len(), 1);
        assert_eq!(todos["result"][0]["id"], 1);
        assert_eq!(todos["result"][0]["title"], "Ship it");
    }
}
