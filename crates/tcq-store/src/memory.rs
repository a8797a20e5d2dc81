use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tcq_types::TaskId;
use tracing::debug;

use crate::error::StoreResult;
use crate::gate::CommitGate;
use crate::task::Task;
use crate::traits::TaskWriter;

/// Tuning for the in-memory store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Simulated latency of the backing write. The gate stays held for the
    /// whole window, so this bounds how long direct commits can collide.
    pub commit_latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            commit_latency: Duration::from_millis(250),
        }
    }
}

impl StoreConfig {
    /// Config with zero commit latency, for tests and embedding.
    pub fn instant() -> Self {
        Self {
            commit_latency: Duration::ZERO,
        }
    }
}

/// In-memory, Vec-based task store.
///
/// Tasks are held in insertion order behind a `RwLock`; the owned
/// [`CommitGate`] admits one writer at a time. Ids are assigned as
/// `count + 1` while the permit is held, which keeps them contiguous from 1
/// no matter how commits interleave.
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
    gate: CommitGate,
    commit_latency: Duration,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
            gate: CommitGate::new(),
            commit_latency: config.commit_latency,
        }
    }

    /// All committed tasks in insertion order.
    ///
    /// Never touches the gate; safe to call while a commit is in flight
    /// (the in-flight task is not visible until its commit completes).
    pub fn list(&self) -> Vec<Task> {
        self.tasks.read().expect("lock poisoned").clone()
    }

    /// Number of committed tasks.
    pub fn len(&self) -> usize {
        self.tasks.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.tasks.read().expect("lock poisoned").is_empty()
    }

    /// Seed the demo fixtures ("Buy groceries", "Buy shoes") through the
    /// gate, skipping the commit latency. Intended for `serve --seed` and
    /// tests; fails like any commit if a write is in flight.
    pub fn seed_demo(&self) -> StoreResult<()> {
        let _permit = self.gate.try_acquire()?;
        let mut tasks = self.tasks.write().expect("lock poisoned");
        let now = Utc::now();
        let base = tasks.len() as u64;
        tasks.push(Task::new(
            TaskId::new(base + 1),
            "Buy groceries",
            "Buy groceries from the store",
            now,
        ));
        tasks.push(Task::new(
            TaskId::new(base + 2),
            "Buy shoes",
            "Buy shoes from the store",
            now,
        ));
        Ok(())
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[async_trait]
impl TaskWriter for InMemoryTaskStore {
    async fn commit(&self, title: &str, description: &str) -> StoreResult<Task> {
        let _permit = self.gate.try_acquire()?;

        // Id reserved under the permit: no other writer can run until the
        // permit drops, so `count + 1` cannot collide.
        let id = TaskId::new(self.tasks.read().expect("lock poisoned").len() as u64 + 1);

        // Simulated backing write. Suspension point; reads proceed, writers
        // bounce off the gate.
        tokio::time::sleep(self.commit_latency).await;

        let task = Task::new(id, title, description, Utc::now());
        self.tasks.write().expect("lock poisoned").push(task.clone());
        debug!(id = %task.id, title = %task.title, "task committed");
        Ok(task)
    }
}

impl std::fmt::Debug for InMemoryTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("task_count", &self.len())
            .field("commit_latency", &self.commit_latency)
            .finish()
    }
}
