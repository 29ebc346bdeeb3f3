//! UI collaborator interface.
//!
//! The animator never touches a window or terminal directly. It reports
//! trigger state, status text, frames and the final outcome through a
//! [`SpinObserver`], and the front end decides what to do with them.

use crate::error::WheelError;
use crate::state::{SpinOutcome, WheelState};

/// Receives everything a spin reports.
pub trait SpinObserver {
    /// Enable or disable the spin trigger.
    fn on_trigger_enabled(&self, enabled: bool);

    /// Replace the status text.
    fn on_status(&self, text: &str);

    /// Redraw the wheel at the given state.
    ///
    /// An error skips the frame; the animator keeps going and forwards the
    /// message through [`SpinObserver::on_notice`].
    fn on_frame(&self, state: &WheelState) -> Result<(), WheelError>;

    /// Spin progress in `[0, 1]`, reported once per tick.
    fn on_progress(&self, _progress: f64) {}

    /// The spin settled.
    fn on_spin_complete(&self, _outcome: &SpinOutcome) {}

    /// Non-fatal problem worth showing to the user.
    fn on_notice(&self, _message: &str) {}
}

/// Fans every callback out to a list of observers.
///
/// `on_frame` calls every observer and returns the first error.
#[derive(Default)]
pub struct ObserverSet<'a> {
    observers: Vec<&'a dyn SpinObserver>,
}

impl<'a> ObserverSet<'a> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer.
    pub fn register(&mut self, observer: &'a dyn SpinObserver) {
        self.observers.push(observer);
    }

    /// Builder form of [`ObserverSet::register`].
    #[must_use]
    pub fn with(mut self, observer: &'a dyn SpinObserver) -> Self {
        self.register(observer);
        self
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SpinObserver for ObserverSet<'_> {
    fn on_trigger_enabled(&self, enabled: bool) {
        for observer in &self.observers {
            observer.on_trigger_enabled(enabled);
        }
    }

    fn on_status(&self, text: &str) {
        for observer in &self.observers {
            observer.on_status(text);
        }
    }

    fn on_frame(&self, state: &WheelState) -> Result<(), WheelError> {
        let mut first_error = None;
        for observer in &self.observers {
            if let Err(err) = observer.on_frame(state) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn on_progress(&self, progress: f64) {
        for observer in &self.observers {
            observer.on_progress(progress);
        }
    }

    fn on_spin_complete(&self, outcome: &SpinOutcome) {
        for observer in &self.observers {
            observer.on_spin_complete(outcome);
        }
    }

    fn on_notice(&self, message: &str) {
        for observer in &self.observers {
            observer.on_notice(message);
        }
    }
}
