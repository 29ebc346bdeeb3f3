//! Terminal progress bar fed by spin events.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use spinwheel_core::{SpinObserver, SpinOutcome, WheelError, WheelState};

/// Bar length in steps; progress is scaled onto it.
const BAR_STEPS: u64 = 1000;

const BAR_TEMPLATE: &str = "{spinner:.cyan} {msg:<12} [{bar:32.cyan/blue}] {percent:>3}%";

/// Shows spin progress as an `indicatif` bar on stderr.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Bar drawn on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Bar that draws nowhere (`--quiet`, tests).
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::with_draw_target(Some(BAR_STEPS), target).with_style(style);
        Self { bar }
    }

    /// Current bar position in `[0, 1000]`.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar has been finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinObserver for ProgressBarObserver {
    fn on_trigger_enabled(&self, _enabled: bool) {}

    fn on_status(&self, text: &str) {
        self.bar.set_message(text.to_string());
    }

    fn on_frame(&self, _state: &WheelState) -> Result<(), WheelError> {
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn on_progress(&self, progress: f64) {
        let position = (progress.clamp(0.0, 1.0) * BAR_STEPS as f64).round() as u64;
        self.bar.set_position(position);
        self.bar.tick();
    }

    fn on_spin_complete(&self, _outcome: &SpinOutcome) {
        self.bar.finish_and_clear();
    }

    fn on_notice(&self, message: &str) {
        self.bar.suspend(|| crate::ui::print_notice(message));
    }
}
