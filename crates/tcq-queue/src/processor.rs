use std::sync::Arc;
use std::time::Duration;

use tcq_store::TaskWriter;
use tcq_types::{QueueTaskId, TaskId};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::queue::CommitQueue;

/// Tuning for the queue processor.
#[derive(Clone, Copy, Debug)]
pub struct ProcessorConfig {
    /// Delay between ticks. Ticks never overlap; a tick that outlives the
    /// interval simply delays the next one.
    pub tick_interval: Duration,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No uncommitted entries were waiting.
    Idle,
    /// The head entry committed into the store.
    Committed {
        queue_id: QueueTaskId,
        task_id: TaskId,
    },
    /// The commit attempt failed; the entry stays at the head.
    Failed {
        queue_id: QueueTaskId,
        try_count: u32,
    },
}

/// Background drain loop for a [`CommitQueue`].
///
/// Each tick takes the oldest uncommitted entry and pushes it through the
/// writer's commit gate, recording the outcome on the entry. Retry is
/// unbounded with no backoff: a failing head entry is attempted again every
/// tick and entries behind it wait, so a permanently failing entry blocks
/// the queue. No failure, of the writer or of bookkeeping, stops the loop.
///
/// One processor per queue: after enqueue, `tick` is the only writer of
/// entry state.
///
/// [`tick`](QueueProcessor::tick) is public so tests and embedders can
/// drive the pipeline deterministically; [`spawn`](QueueProcessor::spawn)
/// runs it on an interval until shutdown.
pub struct QueueProcessor {
    queue: Arc<CommitQueue>,
    writer: Arc<dyn TaskWriter>,
    config: ProcessorConfig,
}

impl QueueProcessor {
    /// Create a processor over the given queue and writer.
    pub fn new(queue: Arc<CommitQueue>, writer: Arc<dyn TaskWriter>, config: ProcessorConfig) -> Self {
        Self {
            queue,
            writer,
            config,
        }
    }

    /// Run one drain step: commit the oldest uncommitted entry, if any.
    pub async fn tick(&self) -> TickOutcome {
        let Some(entry) = self.queue.first_pending() else {
            debug!("queue empty; nothing to commit");
            return TickOutcome::Idle;
        };

        match self.writer.commit(&entry.title, &entry.description).await {
            Ok(task) => {
                match self.queue.mark_committed(entry.id, task.id) {
                    Ok(updated) => {
                        info!(
                            queue_id = %updated.id,
                            task_id = %task.id,
                            try_count = updated.try_count,
                            "queued task committed"
                        );
                    }
                    Err(err) => {
                        // Unreachable while this processor is the only
                        // writer of entry state.
                        error!(
                            queue_id = %entry.id,
                            error = %err,
                            "commit landed but queue bookkeeping failed"
                        );
                    }
                }
                TickOutcome::Committed {
                    queue_id: entry.id,
                    task_id: task.id,
                }
            }
            Err(err) => {
                let message = err.to_string();
                let try_count = match self.queue.mark_failed(entry.id, message.clone()) {
                    Ok(updated) => updated.try_count,
                    Err(mark_err) => {
                        error!(
                            queue_id = %entry.id,
                            error = %mark_err,
                            "failure bookkeeping failed"
                        );
                        entry.try_count + 1
                    }
                };
                warn!(
                    queue_id = %entry.id,
                    error = %message,
                    try_count,
                    "commit attempt failed; entry stays at the head"
                );
                TickOutcome::Failed {
                    queue_id: entry.id,
                    try_count,
                }
            }
        }
    }

    /// Move the processor onto the runtime, ticking until shutdown.
    pub fn spawn(self) -> ProcessorHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let interval = self.config.tick_interval;

        let join = tokio::spawn(async move {
            info!(interval_ms = interval.as_millis() as u64, "queue processor started");
            loop {
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = sleep(interval) => {
                        self.tick().await;
                    }
                }
            }
            info!("queue processor stopped");
        });

        ProcessorHandle { shutdown_tx, join }
    }
}

/// Handle to a spawned processor loop.
///
/// Dropping the handle also stops the loop: the shutdown channel closes and
/// the next `select!` pass exits.
pub struct ProcessorHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl ProcessorHandle {
    /// Ask the loop to stop after the tick in progress, without waiting.
    pub fn request_shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Request shutdown and wait for the loop to exit.
    pub async fn shutdown_and_join(self) {
        self.request_shutdown();
        if let Err(err) = self.join.await {
            error!(error = %err, "queue processor task failed to join");
        }
    }
}
