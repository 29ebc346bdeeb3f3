//! Frame composition: background, rotated wheel, fixed indicator.

use std::io::Cursor;
use std::path::Path;

use image::{imageops, ImageFormat, Rgba, RgbaImage};
use spinwheel_core::{WheelConfig, WheelError, WheelModel, WheelState};
use tracing::{debug, trace};

use crate::font::{default_candidates, LabelFont};
use crate::raster::{draw_sectors, fill_triangle, opaque, rotate_ccw};

/// Side length of the square indicator image.
pub const INDICATOR_SIZE: u32 = 50;

/// Indicator triangle inside its image; the tip points left at the wheel.
pub const INDICATOR_POINTS: [(i32, i32); 3] = [(10, 25), (40, 15), (40, 35)];

const INDICATOR_COLOR: Rgba<u8> = Rgba([0xFF, 0x00, 0x00, 0xFF]);
const OUTLINE_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);
const LABEL_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);

/// Where a label sits on the canvas for a given rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnchor {
    pub index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Draws wheel frames into a reusable canvas.
///
/// The unrotated wheel (sectors plus labels) and the indicator are drawn
/// once in [`WheelRenderer::new`]. Each [`WheelRenderer::render`] rewrites
/// the same frame buffer and the same rotation scratch buffer.
pub struct WheelRenderer {
    config: WheelConfig,
    labels: Vec<String>,
    font_name: String,
    wheel: RgbaImage,
    rotated: RgbaImage,
    indicator: RgbaImage,
    frame: RgbaImage,
    frames_rendered: u64,
}

impl WheelRenderer {
    /// Renderer using the default font chain.
    #[must_use]
    pub fn new(model: &WheelModel, config: &WheelConfig) -> Self {
        let font = LabelFont::load(&default_candidates());
        Self::with_font(model, config, &font)
    }

    /// Renderer drawing labels with `font`.
    #[must_use]
    pub fn with_font(model: &WheelModel, config: &WheelConfig, font: &LabelFont) -> Self {
        let wheel = draw_wheel(model, config, font);
        let (width, height) = config.canvas_size;
        debug!(
            segments = model.len(),
            font = font.name(),
            "wheel rasterized"
        );
        Self {
            config: *config,
            labels: model.segments().iter().map(|s| s.label.clone()).collect(),
            font_name: font.name().to_string(),
            rotated: RgbaImage::new(wheel.width(), wheel.height()),
            wheel,
            indicator: draw_indicator(),
            frame: RgbaImage::from_pixel(width, height, opaque(config.background)),
            frames_rendered: 0,
        }
    }

    /// Compose the frame for `state` and return it.
    pub fn render(&mut self, state: &WheelState) -> Result<&RgbaImage, WheelError> {
        if !state.angle_degrees.is_finite() {
            return Err(WheelError::Render(format!(
                "cannot draw wheel at angle {}",
                state.angle_degrees
            )));
        }

        let background = opaque(self.config.background);
        for px in self.frame.pixels_mut() {
            *px = background;
        }

        rotate_ccw(&self.wheel, -state.angle_degrees, &mut self.rotated);
        let (wx, wy) = self.wheel_origin();
        imageops::overlay(&mut self.frame, &self.rotated, wx, wy);

        let (ix, iy) = self.indicator_origin();
        imageops::overlay(&mut self.frame, &self.indicator, ix, iy);

        self.frames_rendered += 1;
        trace!(angle = state.angle_degrees, frame = self.frames_rendered, "frame composed");
        Ok(&self.frame)
    }

    /// Most recent frame.
    #[must_use]
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Unrotated wheel image.
    #[must_use]
    pub fn wheel_image(&self) -> &RgbaImage {
        &self.wheel
    }

    /// Frames composed so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Name of the font the labels were drawn with.
    #[must_use]
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Canvas size (width, height).
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    /// Canvas position of every label at `state`'s rotation.
    #[must_use]
    pub fn label_anchors(&self, state: &WheelState) -> Vec<LabelAnchor> {
        let count = self.labels.len() as f64;
        let per = 360.0 / count;
        let distance = f64::from(self.config.wheel_radius) * self.config.label_radius_ratio;
        let (cx, cy) = self.config.wheel_center;

        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let screen = (index as f64 + 0.5) * per + state.angle_degrees;
                let (sin, cos) = screen.to_radians().sin_cos();
                LabelAnchor {
                    index,
                    label: label.clone(),
                    x: f64::from(cx) + distance * cos,
                    y: f64::from(cy) + distance * sin,
                }
            })
            .collect()
    }

    /// Encode the current frame as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, WheelError> {
        let mut png = Vec::new();
        self.frame
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|err| WheelError::Image(err.to_string()))?;
        Ok(png)
    }

    /// Write the current frame to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), WheelError> {
        let png = self.encode_png()?;
        std::fs::write(path, png)?;
        debug!(path = %path.display(), "frame saved");
        Ok(())
    }

    fn wheel_origin(&self) -> (i64, i64) {
        let (cx, cy) = self.config.wheel_center;
        let r = i64::from(self.config.wheel_radius);
        (i64::from(cx) - r, i64::from(cy) - r)
    }

    fn indicator_origin(&self) -> (i64, i64) {
        let (ix, iy) = self.config.indicator_position;
        let half = i64::from(INDICATOR_SIZE / 2);
        (i64::from(ix) - half, i64::from(iy) - half)
    }
}

fn draw_wheel(model: &WheelModel, config: &WheelConfig, font: &LabelFont) -> RgbaImage {
    let diameter = config.wheel_diameter();
    let mut wheel = RgbaImage::new(diameter, diameter);

    let colors: Vec<Rgba<u8>> = (0..model.len())
        .map(|index| opaque(model.color_of(index, config.palette).unwrap_or([0, 0, 0])))
        .collect();
    draw_sectors(&mut wheel, &colors, OUTLINE_COLOR);

    let radius = f64::from(config.wheel_radius);
    let distance = radius * config.label_radius_ratio;
    let per = model.per_item_degrees();
    for (index, segment) in model.segments().iter().enumerate() {
        let mid = (index as f64 + 0.5) * per;
        let (sin, cos) = mid.to_radians().sin_cos();
        font.draw_centered(
            &mut wheel,
            &segment.label,
            radius + distance * cos,
            radius + distance * sin,
            LABEL_COLOR,
        );
    }
    wheel
}

fn draw_indicator() -> RgbaImage {
    let mut indicator = RgbaImage::new(INDICATOR_SIZE, INDICATOR_SIZE);
    fill_triangle(&mut indicator, INDICATOR_POINTS, INDICATOR_COLOR);
    indicator
}
