//! Run one spin to completion without a terminal UI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use spinwheel_core::{SpinAnimator, SpinObserver, SpinOutcome, SpinRequest, TickOutcome, WheelError};
use tracing::debug;

/// Spin once and block until the wheel settles, sleeping between ticks.
///
/// Returns [`WheelError::Interrupted`] if `interrupted` is raised before
/// the wheel settles; the pending tick is cancelled first.
pub fn run_spin(
    animator: &mut SpinAnimator,
    observer: &dyn SpinObserver,
    interrupted: &AtomicBool,
) -> Result<SpinOutcome, WheelError> {
    run_spin_with(animator, observer, interrupted, std::thread::sleep)
}

/// [`run_spin`] with a caller-supplied wait between ticks.
pub fn run_spin_with(
    animator: &mut SpinAnimator,
    observer: &dyn SpinObserver,
    interrupted: &AtomicBool,
    mut wait: impl FnMut(Duration),
) -> Result<SpinOutcome, WheelError> {
    if let SpinRequest::Started(target) = animator.spin(observer) {
        debug!(target_angle = target.target_angle_degrees, "headless spin started");
    }

    while let Some(delay) = animator.time_until_next_tick() {
        if interrupted.load(Ordering::SeqCst) {
            animator.cancel();
            return Err(WheelError::Interrupted);
        }
        if !delay.is_zero() {
            wait(delay);
        }
        if let TickOutcome::Finished(outcome) = animator.tick(observer) {
            return Ok(outcome);
        }
    }

    animator
        .last_outcome()
        .cloned()
        .ok_or_else(|| WheelError::Render("spin ended without a result".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinwheel_core::{ManualClock, NoOpObserver, WheelConfig, WheelModel};
    use std::cell::Cell;

    fn animator(clock: &ManualClock, chosen: usize, config: &WheelConfig) -> SpinAnimator {
        let model = WheelModel::new(["A", "B", "C", "D"]).unwrap();
        SpinAnimator::new(model, config)
            .with_clock(clock.clone())
            .with_picker(move |_count: usize| chosen)
    }

    #[test]
    fn runs_to_the_chosen_segment() {
        let clock = ManualClock::new();
        let mut animator = animator(&clock, 2, &WheelConfig::DEFAULT);
        let flag = AtomicBool::new(false);
        let waits = Cell::new(0);
        let outcome = run_spin_with(&mut animator, &NoOpObserver, &flag, |d| {
            waits.set(waits.get() + 1);
            clock.advance(d);
        })
        .unwrap();
        assert_eq!(outcome.label, "C");
        assert_eq!(outcome.final_angle_degrees, 180.0);
        // 3000 ms at 16 ms per tick.
        assert_eq!(waits.get(), 188);
        assert!(!animator.timer().is_armed());
    }

    #[test]
    fn zero_duration_needs_no_waiting() {
        let clock = ManualClock::new();
        let config = WheelConfig {
            spin_duration: Duration::ZERO,
            ..WheelConfig::DEFAULT
        };
        let mut animator = animator(&clock, 1, &config);
        let flag = AtomicBool::new(false);
        let outcome = run_spin_with(&mut animator, &NoOpObserver, &flag, |_| {
            panic!("no wait expected");
        })
        .unwrap();
        assert_eq!(outcome.label, "B");
    }

    #[test]
    fn interruption_cancels_the_spin() {
        let clock = ManualClock::new();
        let mut animator = animator(&clock, 0, &WheelConfig::DEFAULT);
        let flag = AtomicBool::new(false);
        let result = run_spin_with(&mut animator, &NoOpObserver, &flag, |d| {
            clock.advance(d);
            if clock.elapsed() >= Duration::from_millis(500) {
                flag.store(true, Ordering::SeqCst);
            }
        });
        assert!(matches!(result, Err(WheelError::Interrupted)));
        assert!(!animator.is_spinning());
        assert!(animator.last_outcome().is_none());
    }

    #[test]
    fn real_sleep_with_short_spin() {
        let model = WheelModel::new(["A", "B"]).unwrap();
        let config = WheelConfig {
            spin_duration: Duration::from_millis(40),
            ..WheelConfig::DEFAULT
        };
        let mut animator = SpinAnimator::new(model, &config).with_picker(|_count: usize| 1);
        let flag = AtomicBool::new(false);
        let outcome = run_spin(&mut animator, &NoOpObserver, &flag).unwrap();
        assert_eq!(outcome.index, 1);
        assert!(outcome.elapsed_ms >= 40);
    }
}
