//! Search limits shared by all engine implementations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Depth and wall-clock limits for a single move search.
///
/// Engines should respect both, stopping at whichever is reached first;
/// when the clock runs out the engine must return the best move found so
/// far.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Maximum wall-clock time for this move (None = unlimited).
    pub move_time: Option<Duration>,
    /// Stop signal consulted during search.
    pub clock: StopClock,
}

impl SearchLimits {
    /// Depth-only limits, no clock.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            clock: StopClock::new(),
        }
    }

    /// Depth plus a per-move time budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            clock: StopClock::new(),
        }
    }

    /// Arm the clock; engines call this when search begins.
    pub fn start(&self) {
        self.clock.start(self.move_time);
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Cheaply cloneable stop signal with an optional deadline.
///
/// `is_stopped` is an atomic load, fine to consult on every node;
/// `check` does the actual clock read and should be called on the
/// cadence [`StopClock::should_check`] suggests.
#[derive(Debug, Clone, Default)]
pub struct StopClock {
    stopped: Arc<AtomicBool>,
    deadline: Arc<RwLock<Option<Instant>>>,
}

impl StopClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the stop flag and set the deadline `limit` from now
    /// (None = no deadline).
    pub fn start(&self, limit: Option<Duration>) {
        *self.deadline.write().unwrap() = limit.map(|d| Instant::now() + d);
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force the search to stop immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and latches the stop flag once the deadline has
    /// passed.
    pub fn check(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(deadline) = *self.deadline.read().unwrap() {
            if Instant::now() >= deadline {
                self.stop();
                return true;
            }
        }
        false
    }

    /// Clock polling cadence; reading the clock every node is wasteful.
    #[inline]
    pub fn should_check(&self, nodes: u64) -> bool {
        nodes % 1024 == 0
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
