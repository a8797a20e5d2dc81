//! Commit queue for the Task Commit Queue (TCQ) service.
//!
//! This crate implements the asynchronous side of the system: clients enqueue
//! work and get a pending record back immediately; a background processor
//! drains the queue one entry per tick through the store's commit gate.
//!
//! # Components
//!
//! - [`QueuedTask`] -- a queue entry with commit/failure bookkeeping
//! - [`QueueIdClock`] -- monotonic, wall-clock-seeded id source
//! - [`CommitQueue`] -- the append-only in-memory queue
//! - [`QueueProcessor`] / [`ProcessorHandle`] -- the tick loop and its
//!   lifecycle
//!
//! # Design Rules
//!
//! 1. Enqueue always succeeds and never touches the commit gate.
//! 2. Entries are never removed: committed entries stay listed and queryable
//!    as a record of what happened.
//! 3. Uncommitted entries commit in strict arrival order. A failing entry
//!    keeps the head position; entries behind it do not advance until it
//!    commits.
//! 4. `committed` flips `false -> true` at most once per entry, and exactly
//!    the committed entries carry a `ref_id`.
//! 5. The processor is the only writer of entry state after enqueue, and its
//!    loop outlives any single failure.

pub mod clock;
pub mod error;
pub mod processor;
pub mod queue;
pub mod record;

// Re-export primary types at crate root for ergonomic imports.
pub use clock::QueueIdClock;
pub use error::{QueueError, QueueResult};
pub use processor::{ProcessorConfig, ProcessorHandle, QueueProcessor, TickOutcome};
pub use queue::{CommitQueue, QueueCounts};
pub use record::QueuedTask;
