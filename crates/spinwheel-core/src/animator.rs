//! Spin animation state machine.
//!
//! A spin runs as `Idle → Spinning → Finalizing → Idle`. Nothing blocks:
//! `spin()` evaluates the first frame and arms the [`FrameTimer`], and the
//! host loop calls [`SpinAnimator::tick`] whenever the timer is due. Elapsed
//! wall-clock time (from the injected [`Clock`]) drives the easing curve, so
//! late or dropped ticks only cost smoothness, never the landing angle.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::WheelConfig;
use crate::constants::{result_status, STATUS_SPINNING};
use crate::easing::{ease_out_cubic, spin_progress};
use crate::model::{normalize_degrees, WheelModel};
use crate::observer::SpinObserver;
use crate::picker::{RandomPicker, SegmentPicker};
use crate::state::{SpinOutcome, SpinTarget, WheelState};
use crate::timer::FrameTimer;

/// Where the animator is in a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    /// No spin running; the trigger is enabled.
    Idle,
    /// Easing toward the target.
    Spinning {
        target: SpinTarget,
        started_at: Instant,
    },
    /// Snapping to the exact target and reporting the result.
    Finalizing { target: SpinTarget },
}

/// Answer to a spin request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    /// A new spin started toward this target.
    Started(SpinTarget),
    /// A spin was already running; the request was dropped.
    AlreadySpinning,
}

/// What a tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No spin was running.
    Idle,
    /// Drew an intermediate frame.
    Animating { progress: f64 },
    /// The spin settled.
    Finished(SpinOutcome),
}

/// Owns the wheel state and drives spins.
pub struct SpinAnimator {
    model: WheelModel,
    state: WheelState,
    phase: SpinPhase,
    timer: FrameTimer,
    duration: Duration,
    full_rotations: u32,
    clock: Box<dyn Clock>,
    picker: Box<dyn SegmentPicker>,
    progress: f64,
    last_outcome: Option<SpinOutcome>,
}

impl SpinAnimator {
    /// Animator on the wall clock with an entropy-seeded picker.
    #[must_use]
    pub fn new(model: WheelModel, config: &WheelConfig) -> Self {
        Self {
            model,
            state: WheelState::default(),
            phase: SpinPhase::Idle,
            timer: FrameTimer::new(config.frame_interval),
            duration: config.spin_duration,
            full_rotations: config.full_rotations,
            clock: Box::new(SystemClock),
            picker: Box::new(RandomPicker::from_entropy()),
            progress: 0.0,
            last_outcome: None,
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the segment picker.
    #[must_use]
    pub fn with_picker(mut self, picker: impl SegmentPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// The wheel being spun.
    #[must_use]
    pub fn model(&self) -> &WheelModel {
        &self.model
    }

    /// Current rotation and spinning flag.
    #[must_use]
    pub fn state(&self) -> WheelState {
        self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Whether a spin is running.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    /// Target of the running spin.
    #[must_use]
    pub fn target(&self) -> Option<SpinTarget> {
        match self.phase {
            SpinPhase::Idle => None,
            SpinPhase::Spinning { target, .. } | SpinPhase::Finalizing { target } => Some(target),
        }
    }

    /// Progress of the running spin, or of the last one.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Outcome of the most recent completed spin.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    /// Frame timer, for inspection.
    #[must_use]
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Configured spin length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the pending tick should run now.
    #[must_use]
    pub fn is_tick_due(&self) -> bool {
        self.timer.is_due(self.clock.now())
    }

    /// How long the host may wait before the next tick.
    ///
    /// `None` when no tick is pending.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timer.time_until_due(self.clock.now())
    }

    /// Start a spin unless one is already running.
    ///
    /// A second request during a spin is dropped without touching the
    /// running target. The first frame is evaluated immediately, so a
    /// zero-length spin finishes inside this call.
    pub fn spin(&mut self, observer: &dyn SpinObserver) -> SpinRequest {
        if self.state.spinning {
            debug!("spin request ignored: already spinning");
            return SpinRequest::AlreadySpinning;
        }

        let count = self.model.len();
        let chosen = self.picker.pick(count) % count;
        let target = SpinTarget::for_segment(chosen, count, self.full_rotations);

        self.state.spinning = true;
        self.progress = 0.0;
        observer.on_trigger_enabled(false);
        observer.on_status(STATUS_SPINNING);

        self.phase = SpinPhase::Spinning {
            target,
            started_at: self.clock.now(),
        };
        debug!(
            chosen = target.chosen_segment_index,
            target_angle = target.target_angle_degrees,
            "spin started"
        );

        self.tick(observer);
        SpinRequest::Started(target)
    }

    /// Advance the running spin to the current time.
    pub fn tick(&mut self, observer: &dyn SpinObserver) -> TickOutcome {
        let SpinPhase::Spinning { target, started_at } = self.phase else {
            self.timer.cancel();
            return TickOutcome::Idle;
        };

        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(started_at);
        let progress = spin_progress(elapsed, self.duration);

        if progress >= 1.0 {
            return TickOutcome::Finished(self.finalize(target, elapsed, observer));
        }

        self.progress = progress;
        let eased = ease_out_cubic(progress);
        self.state.angle_degrees = normalize_degrees(eased * target.target_angle_degrees);
        self.redraw(observer);
        observer.on_progress(progress);

        self.timer.arm(now);
        TickOutcome::Animating { progress }
    }

    /// Abandon any pending tick.
    ///
    /// Used on teardown so no tick runs against a disposed surface. A spin
    /// in flight is dropped without reporting a result.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        if self.state.spinning {
            debug!("spin cancelled on teardown");
        }
        self.state.spinning = false;
        self.phase = SpinPhase::Idle;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn finalize(
        &mut self,
        target: SpinTarget,
        elapsed: Duration,
        observer: &dyn SpinObserver,
    ) -> SpinOutcome {
        self.phase = SpinPhase::Finalizing { target };
        self.timer.cancel();
        self.progress = 1.0;

        self.state.angle_degrees = normalize_degrees(target.target_angle_degrees);
        self.redraw(observer);
        observer.on_progress(1.0);

        let index = self.model.angle_to_segment(self.state.angle_degrees);
        let label = self.model.segments()[index].label.clone();
        if index != target.chosen_segment_index {
            warn!(
                index,
                chosen = target.chosen_segment_index,
                "resting segment differs from chosen segment"
            );
        }

        let outcome = SpinOutcome {
            index,
            label,
            target_angle_degrees: target.target_angle_degrees,
            final_angle_degrees: self.state.angle_degrees,
            elapsed_ms: elapsed.as_millis() as u64,
        };
        info!(index, label = %outcome.label, "spin finished");

        observer.on_status(&result_status(&outcome.label));
        observer.on_spin_complete(&outcome);

        self.state.spinning = false;
        self.phase = SpinPhase::Idle;
        observer.on_trigger_enabled(true);

        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn redraw(&self, observer: &dyn SpinObserver) {
        if let Err(err) = observer.on_frame(&self.state) {
            warn!(error = %err, "frame skipped");
            observer.on_notice(&format!("Frame skipped: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::WheelError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
        frames: RefCell<Vec<WheelState>>,
        outcomes: RefCell<Vec<SpinOutcome>>,
        fail_frames: bool,
    }

    impl SpinObserver for Recorder {
        fn on_trigger_enabled(&self, enabled: bool) {
            self.events.borrow_mut().push(format!("trigger:{enabled}"));
        }

        fn on_status(&self, text: &str) {
            self.events.borrow_mut().push(format!("status:{text}"));
        }

        fn on_frame(&self, state: &WheelState) -> Result<(), WheelError> {
            self.frames.borrow_mut().push(*state);
            if self.fail_frames {
                return Err(WheelError::Render("surface gone".into()));
            }
            Ok(())
        }

        fn on_spin_complete(&self, outcome: &SpinOutcome) {
            self.outcomes.borrow_mut().push(outcome.clone());
        }

        fn on_notice(&self, message: &str) {
            self.events.borrow_mut().push(format!("notice:{message}"));
        }
    }

    fn animator_with(labels: &[&str], chosen: usize, clock: &ManualClock) -> SpinAnimator {
        let model = WheelModel::new(labels.iter().copied()).unwrap();
        SpinAnimator::new(model, &WheelConfig::DEFAULT)
            .with_clock(clock.clone())
            .with_picker(move |_count: usize| chosen)
    }

    fn run_to_end(animator: &mut SpinAnimator, clock: &ManualClock, observer: &Recorder) {
        while animator.is_spinning() {
            clock.advance(Duration::from_millis(16));
            animator.tick(observer);
        }
    }

    #[test]
    fn idle_initially() {
        let clock = ManualClock::new();
        let animator = animator_with(&["A", "B"], 0, &clock);
        assert_eq!(animator.phase(), SpinPhase::Idle);
        assert!(!animator.is_spinning());
        assert_eq!(animator.state().angle_degrees, 0.0);
        assert!(animator.target().is_none());
        assert!(animator.time_until_next_tick().is_none());
    }

    #[test]
    fn spin_disables_trigger_and_arms_timer() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D"], 2, &clock);
        let observer = Recorder::default();

        let request = animator.spin(&observer);
        let SpinRequest::Started(target) = request else {
            panic!("expected a started spin");
        };
        assert_eq!(target.target_angle_degrees, 1980.0);
        assert!(animator.is_spinning());
        assert!(matches!(animator.phase(), SpinPhase::Spinning { .. }));
        assert_eq!(
            animator.time_until_next_tick(),
            Some(Duration::from_millis(16))
        );
        assert!(!animator.is_tick_due());

        let events = observer.events.borrow();
        assert_eq!(events[0], "trigger:false");
        assert_eq!(events[1], format!("status:{STATUS_SPINNING}"));
        // First frame is drawn immediately at angle 0.
        assert_eq!(observer.frames.borrow().len(), 1);
        assert_eq!(observer.frames.borrow()[0].angle_degrees, 0.0);
    }

    #[test]
    fn scenario_four_segments_lands_on_c() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D"], 2, &clock);
        let observer = Recorder::default();

        animator.spin(&observer);
        run_to_end(&mut animator, &clock, &observer);

        let outcome = animator.last_outcome().unwrap();
        assert_eq!(outcome.index, 2);
        assert_eq!(outcome.label, "C");
        assert_eq!(outcome.final_angle_degrees, 180.0);
        assert_eq!(animator.state().angle_degrees, 180.0);

        let events = observer.events.borrow();
        let tail: Vec<&str> = events.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(tail, vec!["trigger:true", "status:Result: C"]);
    }

    #[test]
    fn finalize_snaps_to_exact_target() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D", "E", "F", "G"], 3, &clock);
        let observer = Recorder::default();
        animator.spin(&observer);
        // One huge jump: no intermediate frames, exact landing.
        clock.advance(Duration::from_secs(10));
        let outcome = animator.tick(&observer);
        let TickOutcome::Finished(outcome) = outcome else {
            panic!("expected finish");
        };
        let target = SpinTarget::for_segment(3, 7, 5);
        assert_eq!(
            outcome.final_angle_degrees,
            normalize_degrees(target.target_angle_degrees)
        );
        assert_eq!(outcome.index, 3);
        assert_eq!(outcome.elapsed_ms, 10_000);
    }

    #[test]
    fn second_spin_is_ignored_while_running() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D"], 1, &clock);
        let observer = Recorder::default();

        let first = animator.spin(&observer);
        let target_before = animator.target();
        let second = animator.spin(&observer);
        assert_eq!(second, SpinRequest::AlreadySpinning);
        assert_eq!(animator.target(), target_before);
        assert!(matches!(first, SpinRequest::Started(_)));

        run_to_end(&mut animator, &clock, &observer);
        assert_eq!(observer.outcomes.borrow().len(), 1);
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let clock = ManualClock::new();
        let model = WheelModel::new(["A", "B", "C"]).unwrap();
        let config = WheelConfig {
            spin_duration: Duration::ZERO,
            ..WheelConfig::DEFAULT
        };
        let mut animator = SpinAnimator::new(model, &config)
            .with_clock(clock.clone())
            .with_picker(|_count: usize| 1);
        let observer = Recorder::default();

        animator.spin(&observer);
        assert!(!animator.is_spinning());
        assert_eq!(animator.phase(), SpinPhase::Idle);
        assert!(!animator.timer().is_armed());
        let outcome = animator.last_outcome().unwrap();
        assert_eq!(outcome.index, 1);
        assert_eq!(observer.frames.borrow().len(), 1);
    }

    #[test]
    fn angle_follows_eased_curve() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D"], 0, &clock);
        let observer = Recorder::default();
        animator.spin(&observer);

        clock.advance(Duration::from_millis(1500));
        let tick = animator.tick(&observer);
        assert!(matches!(tick, TickOutcome::Animating { progress } if (progress - 0.5).abs() < 1e-9));
        let expected = normalize_degrees(ease_out_cubic(0.5) * 1800.0);
        assert!((animator.state().angle_degrees - expected).abs() < 1e-9);
        assert!((animator.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn angle_stays_in_range_every_frame() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C", "D", "E"], 4, &clock);
        let observer = Recorder::default();
        animator.spin(&observer);
        run_to_end(&mut animator, &clock, &observer);
        for frame in observer.frames.borrow().iter() {
            assert!((0.0..360.0).contains(&frame.angle_degrees));
        }
        // Every frame but the final one is drawn while spinning.
        let frames = observer.frames.borrow();
        assert!(frames[..frames.len() - 1].iter().all(|f| f.spinning));
    }

    #[test]
    fn dropped_ticks_do_not_change_landing() {
        let smooth_clock = ManualClock::new();
        let mut smooth = animator_with(&["A", "B", "C", "D", "E", "F"], 5, &smooth_clock);
        let choppy_clock = ManualClock::new();
        let mut choppy = animator_with(&["A", "B", "C", "D", "E", "F"], 5, &choppy_clock);
        let observer = Recorder::default();

        smooth.spin(&observer);
        run_to_end(&mut smooth, &smooth_clock, &observer);

        choppy.spin(&observer);
        while choppy.is_spinning() {
            choppy_clock.advance(Duration::from_millis(700));
            choppy.tick(&observer);
        }

        assert_eq!(
            smooth.last_outcome().map(|o| o.index),
            choppy.last_outcome().map(|o| o.index)
        );
        assert_eq!(smooth.state(), choppy.state());
    }

    #[test]
    fn failed_frames_become_notices() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B"], 1, &clock);
        let observer = Recorder {
            fail_frames: true,
            ..Recorder::default()
        };
        animator.spin(&observer);
        run_to_end(&mut animator, &clock, &observer);

        assert_eq!(observer.outcomes.borrow().len(), 1);
        assert!(observer
            .events
            .borrow()
            .iter()
            .any(|e| e.starts_with("notice:Frame skipped")));
    }

    #[test]
    fn tick_when_idle_does_nothing() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A"], 0, &clock);
        let observer = Recorder::default();
        assert_eq!(animator.tick(&observer), TickOutcome::Idle);
        assert!(observer.frames.borrow().is_empty());
    }

    #[test]
    fn cancel_drops_pending_tick() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C"], 0, &clock);
        let observer = Recorder::default();
        animator.spin(&observer);
        animator.cancel();
        assert!(!animator.is_spinning());
        assert!(!animator.timer().is_armed());
        clock.advance(Duration::from_secs(5));
        assert_eq!(animator.tick(&observer), TickOutcome::Idle);
        assert!(observer.outcomes.borrow().is_empty());
    }

    #[test]
    fn can_spin_again_after_finish() {
        let clock = ManualClock::new();
        let mut animator = animator_with(&["A", "B", "C"], 2, &clock);
        let observer = Recorder::default();
        animator.spin(&observer);
        run_to_end(&mut animator, &clock, &observer);
        assert!(matches!(animator.spin(&observer), SpinRequest::Started(_)));
        run_to_end(&mut animator, &clock, &observer);
        assert_eq!(observer.outcomes.borrow().len(), 2);
    }
}
