use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all TCQ endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handler::list_todos_handler).post(handler::create_todo_handler),
        )
        .route(
            "/todos/queue",
            get(handler::list_queue_handler).post(handler::enqueue_todo_handler),
        )
        .route("/todos/queue/:id", get(handler::get_queue_todo_handler))
        .route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
