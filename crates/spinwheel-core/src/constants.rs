//! Fixed wheel geometry, timing, and status strings.

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 500;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 400;

/// Wheel centre on the canvas.
pub const WHEEL_CENTER: (i32, i32) = (250, 200);

/// Wheel radius in pixels.
pub const WHEEL_RADIUS: u32 = 150;

/// Centre of the indicator image on the canvas.
pub const INDICATOR_POSITION: (i32, i32) = (420, 220);

/// Segment fill colours, cycled by segment position.
pub const PALETTE: [[u8; 3]; 8] = [
    [0xFF, 0x57, 0x33],
    [0x33, 0xFF, 0x57],
    [0x33, 0x57, 0xFF],
    [0xFF, 0x33, 0xA6],
    [0xA6, 0x33, 0xFF],
    [0x33, 0xFF, 0xF3],
    [0xFF, 0xA6, 0x33],
    [0xF3, 0xFF, 0x33],
];

/// Canvas background colour.
pub const BACKGROUND: [u8; 3] = [0xF0, 0xF0, 0xF0];

/// Length of one spin in milliseconds.
pub const SPIN_DURATION_MS: u64 = 3000;

/// Extra whole turns added to every target angle.
pub const FULL_ROTATIONS: u32 = 5;

/// Delay between animation ticks (~60 Hz).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Labels sit at this fraction of the radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.6;

/// Default item labels.
pub const DEFAULT_LABELS: [&str; 8] = [
    "Item 1", "Item 2", "Item 3", "Item 4", "Item 5", "Item 6", "Item 7", "Item 8",
];

/// Status text before the first spin.
pub const STATUS_IDLE: &str = "press to spin";

/// Status text while the wheel turns.
pub const STATUS_SPINNING: &str = "spinning…";

/// Status text reporting a finished spin.
#[must_use]
pub fn result_status(label: &str) -> String {
    format!("Result: {label}")
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (e.g. an empty wheel).
    pub const ERROR_CONFIG: i32 = 4;
    /// Spin interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_fits_on_canvas() {
        let r = WHEEL_RADIUS as i32;
        assert!(WHEEL_CENTER.0 - r >= 0);
        assert!(WHEEL_CENTER.1 - r >= 0);
        assert!(WHEEL_CENTER.0 + r <= CANVAS_WIDTH as i32);
        assert!(WHEEL_CENTER.1 + r <= CANVAS_HEIGHT as i32);
    }

    #[test]
    fn indicator_sits_right_of_wheel() {
        let right_edge = WHEEL_CENTER.0 + WHEEL_RADIUS as i32;
        assert!(INDICATOR_POSITION.0 > right_edge);
    }

    #[test]
    fn palette_has_eight_distinct_colors() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn result_status_format() {
        assert_eq!(result_status("Item 3"), "Result: Item 3");
    }

    #[test]
    fn status_texts_are_lowercase() {
        assert_eq!(STATUS_IDLE, "press to spin");
        assert_eq!(STATUS_SPINNING, "spinning…");
    }
}
