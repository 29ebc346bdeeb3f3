//! Concrete observer implementations.

use std::cell::Cell;

use tracing::{debug, info, trace, warn};

use crate::error::WheelError;
use crate::observer::SpinObserver;
use crate::state::{SpinOutcome, WheelState};

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SpinObserver for NoOpObserver {
    fn on_trigger_enabled(&self, _enabled: bool) {}
    fn on_status(&self, _text: &str) {}
    fn on_frame(&self, _state: &WheelState) -> Result<(), WheelError> {
        Ok(())
    }
}

/// Observer that writes spin events to `tracing`.
///
/// Frames are logged at trace level and counted; the count is reported with
/// the outcome.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    frames: Cell<u64>,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames seen since the last completed spin.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

impl SpinObserver for LoggingObserver {
    fn on_trigger_enabled(&self, enabled: bool) {
        debug!(enabled, "spin trigger");
    }

    fn on_status(&self, text: &str) {
        debug!(status = text, "status changed");
    }

    fn on_frame(&self, state: &WheelState) -> Result<(), WheelError> {
        self.frames.set(self.frames.get() + 1);
        trace!(angle = state.angle_degrees, "frame");
        Ok(())
    }

    fn on_spin_complete(&self, outcome: &SpinOutcome) {
        info!(
            index = outcome.index,
            label = %outcome.label,
            angle = outcome.final_angle_degrees,
            elapsed_ms = outcome.elapsed_ms,
            frames = self.frames.get(),
            "spin complete"
        );
        self.frames.set(0);
    }

    fn on_notice(&self, message: &str) {
        warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> SpinOutcome {
        SpinOutcome {
            index: 1,
            label: "B".into(),
            target_angle_degrees: 2070.0,
            final_angle_degrees: 270.0,
            elapsed_ms: 3000,
        }
    }

    #[test]
    fn noop_accepts_frames() {
        let observer = NoOpObserver::new();
        observer.on_status("x");
        assert!(observer.on_frame(&WheelState::default()).is_ok());
    }

    #[test]
    fn logging_counts_and_resets_frames() {
        let observer = LoggingObserver::new();
        for _ in 0..5 {
            observer.on_frame(&WheelState::default()).unwrap();
        }
        assert_eq!(observer.frames(), 5);
        observer.on_spin_complete(&outcome());
        assert_eq!(observer.frames(), 0);
    }
}
