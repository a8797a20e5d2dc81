//! Single-writer task storage for the Task Commit Queue (TCQ) service.
//!
//! This crate implements the committed side of the system: an in-memory,
//! append-only collection of [`Task`] records guarded by a [`CommitGate`]
//! that admits exactly one writer at a time. A commit that arrives while
//! another commit is in flight fails immediately; nothing ever waits for
//! the gate.
//!
//! # Components
//!
//! - [`Task`] -- a committed task record with sequential id
//! - [`CommitGate`] / [`CommitPermit`] -- fail-fast single-writer exclusion
//! - [`TaskWriter`] -- the async write boundary driven by direct callers and
//!   by the queue processor
//! - [`InMemoryTaskStore`] -- the in-memory backend
//!
//! # Design Rules
//!
//! 1. Task ids are assigned only while the gate permit is held, so they are
//!    contiguous from 1 and never collide.
//! 2. Tasks are immutable once committed; there is no update or delete.
//! 3. Reads never touch the gate and are safe at any time, including during
//!    an in-flight commit.
//! 4. The gate is released on every exit path, success or failure.
//! 5. The store itself never retries; retry policy belongs to callers.

pub mod error;
pub mod gate;
pub mod memory;
pub mod task;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use gate::{CommitGate, CommitPermit};
pub use memory::{InMemoryTaskStore, StoreConfig};
pub use task::Task;
pub use traits::TaskWriter;
