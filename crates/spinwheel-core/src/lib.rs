//! # spinwheel-core
//!
//! Wheel model and spin animation engine for the SpinWheel prize wheel.
//! Owns segment layout, target selection, ease-out-cubic timing, and the
//! angle-to-segment policy; front ends plug in through [`SpinObserver`].

pub mod animator;
pub mod clock;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod model;
pub mod observer;
pub mod observers;
pub mod picker;
pub mod state;
pub mod timer;

// Re-exports
pub use animator::{SpinAnimator, SpinPhase, SpinRequest, TickOutcome};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::WheelConfig;
pub use constants::{exit_codes, DEFAULT_LABELS, PALETTE, STATUS_IDLE, STATUS_SPINNING};
pub use error::WheelError;
pub use model::{angle_to_segment, normalize_degrees, Segment, WheelModel};
pub use observer::{ObserverSet, SpinObserver};
pub use observers::{LoggingObserver, NoOpObserver};
pub use picker::{RandomPicker, SegmentPicker};
pub use state::{SpinOutcome, SpinTarget, WheelState};

/// Segment a spin toward `chosen` comes to rest on.
///
/// Shortcut for building a [`SpinTarget`] with the default rotation count
/// and reading the indicator at the resting angle.
///
/// # Example
/// ```
/// assert_eq!(spinwheel_core::resting_segment(2, 4), 2);
/// ```
#[must_use]
pub fn resting_segment(chosen: usize, count: usize) -> usize {
    let target = SpinTarget::for_segment(chosen, count, constants::FULL_ROTATIONS);
    angle_to_segment(normalize_degrees(target.target_angle_degrees), count.max(1))
}
