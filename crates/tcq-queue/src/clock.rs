use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tcq_types::QueueTaskId;

/// Monotonic id source for queue entries.
///
/// Ids are seeded from wall-clock milliseconds, so they stay recognizably
/// time-flavored, but each id is forced strictly past the previous one.
/// Safe for concurrent use across threads via an internal [`Mutex`].
///
/// # Allocation Rules
///
/// - `next = max(wall_clock_ms, last + 1)`; `last` is then set to `next`.
/// - **Guarantee**: ids are strictly increasing and never collide, no matter
///   how rapidly or concurrently they are drawn.
#[derive(Debug, Default)]
pub struct QueueIdClock {
    /// Last issued id value.
    last: Mutex<u64>,
}

impl QueueIdClock {
    /// Create a fresh clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next id, strictly greater than every id drawn before it.
    pub fn next_id(&self) -> QueueTaskId {
        let wall = Self::wall_clock_ms();
        let mut last = self.last.lock().expect("clock mutex poisoned");
        let next = wall.max(*last + 1);
        *last = next;
        QueueTaskId::new(next)
    }

    /// Current wall-clock time in milliseconds since the UNIX epoch.
    fn wall_clock_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
