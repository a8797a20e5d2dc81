use std::sync::Arc;

use tcq_queue::CommitQueue;
use tcq_store::{InMemoryTaskStore, StoreConfig};

use crate::config::ServerConfig;

/// Shared handles the handlers and the processor work with.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<InMemoryTaskStore>,
    pub queue: Arc<CommitQueue>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryTaskStore>, queue: Arc<CommitQueue>) -> Self {
        Self { store, queue }
    }

    /// Fresh store and queue wired from config.
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = InMemoryTaskStore::new(StoreConfig {
            commit_latency: config.commit_latency(),
        });
        Self::new(Arc::new(store), Arc::new(CommitQueue::new()))
    }
}
