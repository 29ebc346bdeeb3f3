//! Spin timing curve.

use std::time::Duration;

/// Cubic ease-out: fast start, smooth stop.
///
/// `progress` is clamped to `[0, 1]`, so `ease_out_cubic(0) == 0` and
/// `ease_out_cubic(1) == 1`.
///
/// # Example
/// ```
/// use spinwheel_core::easing::ease_out_cubic;
///
/// assert_eq!(ease_out_cubic(0.0), 0.0);
/// assert_eq!(ease_out_cubic(1.0), 1.0);
/// assert!(ease_out_cubic(0.5) > 0.5);
/// ```
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fraction of the spin that has elapsed, unclamped.
///
/// A zero duration is complete immediately.
#[must_use]
pub fn spin_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    elapsed.as_secs_f64() / duration.as_secs_f64()
}
