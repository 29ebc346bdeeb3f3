//! Static wheel configuration.

use std::time::Duration;

use crate::constants::{
    BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_LABELS, FRAME_INTERVAL_MS, FULL_ROTATIONS,
    INDICATOR_POSITION, LABEL_RADIUS_RATIO, PALETTE, SPIN_DURATION_MS, WHEEL_CENTER, WHEEL_RADIUS,
};
use crate::error::WheelError;
use crate::model::WheelModel;

/// Everything that shapes a wheel, fixed at compile time.
///
/// The application only ever uses [`WheelConfig::DEFAULT`]; the fields are
/// public so tests can build variants (e.g. a zero-length spin) with struct
/// update syntax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    /// Canvas size in pixels (width, height).
    pub canvas_size: (u32, u32),
    /// Wheel centre on the canvas.
    pub wheel_center: (i32, i32),
    /// Wheel radius in pixels.
    pub wheel_radius: u32,
    /// Centre of the indicator image on the canvas.
    pub indicator_position: (i32, i32),
    /// Segment fill colours.
    pub palette: &'static [[u8; 3]],
    /// Canvas background colour.
    pub background: [u8; 3],
    /// Length of one spin.
    pub spin_duration: Duration,
    /// Extra whole turns before landing.
    pub full_rotations: u32,
    /// Delay between animation ticks.
    pub frame_interval: Duration,
    /// Label distance from the centre as a fraction of the radius.
    pub label_radius_ratio: f64,
    /// Item labels, in wheel order.
    pub labels: &'static [&'static str],
}

impl WheelConfig {
    /// The one configuration the application ships with.
    pub const DEFAULT: Self = Self {
        canvas_size: (CANVAS_WIDTH, CANVAS_HEIGHT),
        wheel_center: WHEEL_CENTER,
        wheel_radius: WHEEL_RADIUS,
        indicator_position: INDICATOR_POSITION,
        palette: &PALETTE,
        background: BACKGROUND,
        spin_duration: Duration::from_millis(SPIN_DURATION_MS),
        full_rotations: FULL_ROTATIONS,
        frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        label_radius_ratio: LABEL_RADIUS_RATIO,
        labels: &DEFAULT_LABELS,
    };

    /// Build the wheel model for the configured labels.
    pub fn model(&self) -> Result<WheelModel, WheelError> {
        WheelModel::with_palette_len(self.labels.iter().copied(), self.palette.len())
    }

    /// Side length of the square wheel image.
    #[must_use]
    pub fn wheel_diameter(&self) -> u32 {
        self.wheel_radius * 2
    }

    /// Colour for a segment's palette slot.
    #[must_use]
    pub fn color(&self, color_index: usize) -> [u8; 3] {
        if self.palette.is_empty() {
            return [0, 0, 0];
        }
        self.palette[color_index % self.palette.len()]
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = WheelConfig::default();
        assert_eq!(config.canvas_size, (500, 400));
        assert_eq!(config.wheel_center, (250, 200));
        assert_eq!(config.wheel_radius, 150);
        assert_eq!(config.indicator_position, (420, 220));
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.spin_duration, Duration::from_millis(3000));
        assert_eq!(config.full_rotations, 5);
        assert_eq!(config.labels.len(), 8);
    }

    #[test]
    fn default_model_has_eight_segments() {
        let model = WheelConfig::DEFAULT.model().unwrap();
        assert_eq!(model.len(), 8);
        assert_eq!(model.segments()[0].label, "Item 1");
    }

    #[test]
    fn empty_labels_rejected() {
        let config = WheelConfig {
            labels: &[],
            ..WheelConfig::DEFAULT
        };
        assert!(matches!(config.model(), Err(WheelError::EmptyWheel)));
    }

    #[test]
    fn color_wraps_palette() {
        let config = WheelConfig::DEFAULT;
        assert_eq!(config.color(0), config.color(8));
        assert_eq!(config.color(3), PALETTE[3]);
    }

    #[test]
    fn diameter() {
        assert_eq!(WheelConfig::DEFAULT.wheel_diameter(), 300);
    }
}
