//! Foundation types for the Task Commit Queue (TCQ) service.
//!
//! This crate provides the identifier types shared across the TCQ system.
//! Every other TCQ crate depends on `tcq-types`.
//!
//! # Key Types
//!
//! - [`TaskId`] — Sequential identifier of a committed task
//! - [`QueueTaskId`] — Clock-derived identifier of a queue entry

pub mod ids;

pub use ids::{QueueTaskId, TaskId};
