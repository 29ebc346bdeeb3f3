//! Wheel state, per-spin target, and spin outcome.

use serde::Serialize;

/// Current rotation and whether a spin is running.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WheelState {
    /// Rotation in `[0, 360)`, clockwise on screen.
    pub angle_degrees: f64,
    /// True from `spin()` until finalize.
    pub spinning: bool,
}

/// Where a spin will land, decided once when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpinTarget {
    /// Segment the indicator will point at when the wheel stops.
    pub chosen_segment_index: usize,
    /// Whole sectors turned past the full rotations.
    pub rotation_steps: usize,
    /// Absolute target rotation, at least `full_rotations * 360`.
    pub target_angle_degrees: f64,
}

impl SpinTarget {
    /// Target that brings `chosen` under the indicator after
    /// `full_rotations` whole turns.
    ///
    /// The wheel turns `rotation_steps` sectors past the whole turns, where
    /// `rotation_steps = (count - chosen) mod count`; at rest the indicator
    /// reads sector `360 - angle`, which is `chosen` again.
    ///
    /// # Example
    /// ```
    /// use spinwheel_core::state::SpinTarget;
    ///
    /// let target = SpinTarget::for_segment(2, 4, 5);
    /// assert_eq!(target.target_angle_degrees, 1980.0);
    /// ```
    #[must_use]
    pub fn for_segment(chosen: usize, count: usize, full_rotations: u32) -> Self {
        let count = count.max(1);
        let chosen = chosen % count;
        let rotation_steps = (count - chosen) % count;
        let target_angle_degrees =
            f64::from(full_rotations) * 360.0 + rotation_steps as f64 * 360.0 / count as f64;
        Self {
            chosen_segment_index: chosen,
            rotation_steps,
            target_angle_degrees,
        }
    }
}

/// Result handed to the UI once a spin settles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    /// Index of the segment under the indicator.
    pub index: usize,
    /// Label of that segment.
    pub label: String,
    /// Absolute target rotation of the spin.
    pub target_angle_degrees: f64,
    /// Resting rotation in `[0, 360)`.
    pub final_angle_degrees: f64,
    /// Wall-clock time from `spin()` to finalize.
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_at_zero() {
        let state = WheelState::default();
        assert_eq!(state.angle_degrees, 0.0);
        assert!(!state.spinning);
    }

    #[test]
    fn target_zero_is_whole_turns() {
        let target = SpinTarget::for_segment(0, 8, 5);
        assert_eq!(target.rotation_steps, 0);
        assert_eq!(target.target_angle_degrees, 1800.0);
    }

    #[test]
    fn target_scenario_four_segments() {
        let target = SpinTarget::for_segment(2, 4, 5);
        assert_eq!(target.chosen_segment_index, 2);
        assert_eq!(target.rotation_steps, 2);
        assert_eq!(target.target_angle_degrees, 1980.0);
    }

    #[test]
    fn target_always_past_full_rotations() {
        for count in 1..20 {
            for chosen in 0..count {
                let target = SpinTarget::for_segment(chosen, count, 5);
                assert!(target.target_angle_degrees >= 1800.0);
                assert!(target.target_angle_degrees < 2160.0);
            }
        }
    }

    #[test]
    fn out_of_range_choice_wraps() {
        let target = SpinTarget::for_segment(9, 8, 5);
        assert_eq!(target.chosen_segment_index, 1);
    }

    #[test]
    fn outcome_serializes() {
        let outcome = SpinOutcome {
            index: 2,
            label: "C".into(),
            target_angle_degrees: 1980.0,
            final_angle_degrees: 180.0,
            elapsed_ms: 3001,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"label\":\"C\""));
        assert!(json.contains("\"index\":2"));
    }
}
