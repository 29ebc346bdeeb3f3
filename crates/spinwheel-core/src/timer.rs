//! Single-shot frame timer queried by the host event loop.

use std::time::{Duration, Instant};

/// Holds at most one pending animation tick.
///
/// The animator arms the timer after each frame; the host loop asks how
/// long it may wait for input (`time_until_due`) and calls `tick()` once
/// the timer is due. Cancelling drops the pending tick.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval: Duration,
    due_at: Option<Instant>,
}

impl FrameTimer {
    /// Create an idle timer with the given tick interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due_at: None,
        }
    }

    /// Tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the next tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.due_at = Some(now + self.interval);
    }

    /// Drop the pending tick, if any.
    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    /// Whether a tick is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due_at.is_some()
    }

    /// Whether the pending tick should run now.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.due_at.is_some_and(|due| now >= due)
    }

    /// Time left before the pending tick; zero when overdue.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.due_at.map(|due| due.saturating_duration_since(now))
    }
}
