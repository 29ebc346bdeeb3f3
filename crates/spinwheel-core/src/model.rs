//! Wheel segments and the angle-to-segment policy.

use crate::constants::PALETTE;
use crate::error::WheelError;

/// Fractional sector distance treated as "exactly on a boundary".
///
/// Target angles are whole multiples of the sector width, so the resting
/// angle lands on a boundary up to float drift; snapping keeps `floor` from
/// stepping one sector short.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// One labelled, coloured slice of the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text drawn on the slice and reported as the result.
    pub label: String,
    /// Palette slot; always `position % palette_len`.
    pub color_index: usize,
}

/// Ordered, non-empty list of segments.
#[derive(Debug, Clone)]
pub struct WheelModel {
    segments: Vec<Segment>,
}

impl WheelModel {
    /// Build a wheel using the default palette size.
    pub fn new<I, S>(labels: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_palette_len(labels, PALETTE.len())
    }

    /// Build a wheel whose colour slots cycle over `palette_len` colours.
    pub fn with_palette_len<I, S>(labels: I, palette_len: usize) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let palette_len = palette_len.max(1);
        let segments: Vec<Segment> = labels
            .into_iter()
            .enumerate()
            .map(|(position, label)| Segment {
                label: label.into(),
                color_index: position % palette_len,
            })
            .collect();
        if segments.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        Ok(Self { segments })
    }

    /// Segments in wheel order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at `index`, if any.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Number of segments (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; construction rejects empty wheels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Angular width of one segment.
    #[must_use]
    pub fn per_item_degrees(&self) -> f64 {
        360.0 / self.len() as f64
    }

    /// Index of the segment under the indicator for a resting angle.
    #[must_use]
    pub fn angle_to_segment(&self, angle_degrees: f64) -> usize {
        angle_to_segment(angle_degrees, self.len())
    }

    /// Palette colour of the segment at `index`.
    ///
    /// `None` when the index is out of range or the palette is empty.
    #[must_use]
    pub fn color_of<T: Copy>(&self, index: usize, palette: &[T]) -> Option<T> {
        let segment = self.segments.get(index)?;
        palette.get(segment.color_index % palette.len().max(1)).copied()
    }

    /// Label of the segment under the indicator for a resting angle.
    #[must_use]
    pub fn label_for_angle(&self, angle_degrees: f64) -> &str {
        &self.segments[self.angle_to_segment(angle_degrees)].label
    }
}

/// Map a resting angle to the segment under the fixed indicator.
///
/// The wheel turns clockwise by `angle_degrees`, so the indicator reads the
/// sector at `360 - angle`:
///
/// ```text
/// per_item = 360 / count
/// index    = floor((360 - (angle mod 360)) / per_item) mod count
/// ```
///
/// The direction convention is fixed; changing it reverses which segment a
/// given rotation reports. Returns 0 for non-finite angles.
///
/// A quotient within 1e-9 of a whole sector count snaps to it before the
/// floor, so the result differs from the plain formula only within that
/// distance of a sector boundary.
///
/// # Example
/// ```
/// use spinwheel_core::model::angle_to_segment;
///
/// assert_eq!(angle_to_segment(0.0, 8), 0);
/// assert_eq!(angle_to_segment(180.0, 4), 2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn angle_to_segment(angle_degrees: f64, count: usize) -> usize {
    debug_assert!(count > 0, "a wheel has at least one segment");
    if count == 0 || !angle_degrees.is_finite() {
        return 0;
    }
    let per_item = 360.0 / count as f64;
    let rest = angle_degrees.rem_euclid(360.0);
    let sectors = (360.0 - rest) / per_item;
    let nearest = sectors.round();
    let whole = if (sectors - nearest).abs() < BOUNDARY_EPSILON {
        nearest
    } else {
        sectors.floor()
    };
    (whole.max(0.0) as usize) % count
}

/// Fold any angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    let rest = angle_degrees.rem_euclid(360.0);
    if rest >= 360.0 {
        0.0
    } else {
        rest
    }
}
