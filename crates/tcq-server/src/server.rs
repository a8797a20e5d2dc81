use std::sync::Arc;

use tcq_queue::{ProcessorConfig, QueueProcessor};
use tcq_store::TaskWriter;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// TCQ HTTP server: the REST surface plus the queue processor lifecycle.
pub struct TcqServer {
    config: ServerConfig,
}

impl TcqServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over fresh state (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::from_config(&self.config))
    }

    /// Start serving requests; runs until ctrl-c.
    ///
    /// The queue processor starts before the listener accepts traffic and
    /// is joined after the listener stops, so every accepted enqueue has a
    /// processor behind it.
    pub async fn serve(self) -> ServerResult<()> {
        let state = AppState::from_config(&self.config);
        if self.config.seed_demo {
            state.store.seed_demo()?;
            tracing::info!(task_count = state.store.len(), "store seeded with demo tasks");
        }

        let processor = QueueProcessor::new(
            Arc::clone(&state.queue),
            Arc::clone(&state.store) as Arc<dyn TaskWriter>,
            ProcessorConfig {
                tick_interval: self.config.tick_interval(),
            },
        );
        let processor_handle = processor.spawn();

        let app = build_router(state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("TCQ server listening on {}", self.config.bind_addr);

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()));

        processor_handle.shutdown_and_join().await;
        served
    }
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        // Resolving here would stop the server immediately.
        std::future::pending::<()>().await;
    }
}
