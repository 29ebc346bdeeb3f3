//! CLI output formatting.

use std::time::Duration;

use spinwheel_core::constants::result_status;
use spinwheel_core::SpinOutcome;

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format an angle in degrees with two decimals.
#[must_use]
pub fn format_angle(degrees: f64) -> String {
    format!("{degrees:.2}°")
}

/// The one-line result shown to the user.
#[must_use]
pub fn result_line(outcome: &SpinOutcome) -> String {
    result_status(&outcome.label)
}

/// Single-line JSON for `--json`.
pub fn outcome_json(outcome: &SpinOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string(outcome)
}

/// Multi-line breakdown shown with `--verbose`.
#[must_use]
pub fn outcome_details(outcome: &SpinOutcome) -> Vec<String> {
    vec![
        format!("Segment: {} ({})", outcome.index, outcome.label),
        format!("Target angle: {}", format_angle(outcome.target_angle_degrees)),
        format!("Resting angle: {}", format_angle(outcome.final_angle_degrees)),
        format!(
            "Duration: {}",
            format_duration(Duration::from_millis(outcome.elapsed_ms))
        ),
    ]
}
