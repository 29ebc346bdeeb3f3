//! Half-block rendering of the raster wheel frame.
//!
//! Each terminal cell shows two stacked canvas pixels with `▀`: the
//! foreground colour is the upper pixel and the background the lower one.
//! Labels are too small to survive the downscale, so they are redrawn as
//! text at their rotated anchors.

use image::RgbaImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Frame;
use spinwheel_render::LabelAnchor;

const UPPER_HALF: &str = "▀";

/// Below this inner width labels would cover most of the wheel.
const MIN_LABEL_WIDTH: u16 = 24;

/// How a canvas is scaled and centred inside a cell area.
///
/// Positions are in cells horizontally and half-cells vertically, relative
/// to the area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    /// Canvas pixels per cell column (and per half row).
    pub scale: f64,
    offset_x: f64,
    offset_y: f64,
    image_width: u32,
    image_height: u32,
}

impl CanvasFit {
    /// Fit an `image_size` canvas into `area`, keeping square pixels.
    #[must_use]
    pub fn new(image_size: (u32, u32), area: Rect) -> Option<Self> {
        let (image_width, image_height) = image_size;
        if area.is_empty() || image_width == 0 || image_height == 0 {
            return None;
        }
        let columns = f64::from(area.width);
        let half_rows = f64::from(area.height) * 2.0;
        let scale = (f64::from(image_width) / columns).max(f64::from(image_height) / half_rows);
        Some(Self {
            scale,
            offset_x: ((columns - f64::from(image_width) / scale) / 2.0).floor(),
            offset_y: ((half_rows - f64::from(image_height) / scale) / 2.0).floor(),
            image_width,
            image_height,
        })
    }

    /// Canvas pixel shown at `column`, `half_row`, if any.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_at(&self, column: u16, half_row: u16) -> Option<(u32, u32)> {
        let x = (f64::from(column) - self.offset_x + 0.5) * self.scale;
        let y = (f64::from(half_row) - self.offset_y + 0.5) * self.scale;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        (x < self.image_width && y < self.image_height).then_some((x, y))
    }

    /// Cell (column, row) covering canvas point `x`, `y`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_for(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let column = (x / self.scale + self.offset_x).floor();
        let half_row = (y / self.scale + self.offset_y).floor();
        if column < 0.0 || half_row < 0.0 || column > f64::from(u16::MAX) {
            return None;
        }
        Some((column as u16, (half_row / 2.0) as u16))
    }
}

/// The wheel frame as a ratatui widget.
pub struct WheelView<'a> {
    image: &'a RgbaImage,
    anchors: &'a [LabelAnchor],
    block: Option<Block<'a>>,
}

impl<'a> WheelView<'a> {
    #[must_use]
    pub fn new(image: &'a RgbaImage, anchors: &'a [LabelAnchor]) -> Self {
        Self {
            image,
            anchors,
            block: None,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn draw_pixels(&self, fit: &CanvasFit, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for column in 0..area.width {
                let top = fit.pixel_at(column, row * 2).map(|p| self.color(p));
                let bottom = fit.pixel_at(column, row * 2 + 1).map(|p| self.color(p));
                let (Some(top), Some(bottom)) = (top, bottom) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol(UPPER_HALF).set_fg(top).set_bg(bottom);
                }
            }
        }
    }

    fn draw_labels(&self, fit: &CanvasFit, area: Rect, buf: &mut Buffer) {
        for anchor in self.anchors {
            let Some((column, row)) = fit.cell_for(anchor.x, anchor.y) else {
                continue;
            };
            if row >= area.height {
                continue;
            }
            let width = u16::try_from(anchor.label.chars().count()).unwrap_or(u16::MAX);
            let start = column.saturating_sub(width / 2);
            for (i, ch) in (0u16..).zip(anchor.label.chars()) {
                let column = start.saturating_add(i);
                if column >= area.width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    let bg = if cell.symbol() == UPPER_HALF { cell.fg } else { cell.bg };
                    cell.set_char(ch).set_fg(Color::Black).set_bg(bg);
                }
            }
        }
    }

    fn color(&self, (x, y): (u32, u32)) -> Color {
        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        Color::Rgb(r, g, b)
    }
}

impl Widget for WheelView<'_> {
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block.take() {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        let Some(fit) = CanvasFit::new(self.image.dimensions(), inner) else {
            return;
        };
        self.draw_pixels(&fit, inner, buf);
        if inner.width >= MIN_LABEL_WIDTH {
            self.draw_labels(&fit, inner, buf);
        }
    }
}

/// Render the wheel panel.
pub fn render_wheel(frame: &mut Frame, area: Rect, image: &RgbaImage, anchors: &[LabelAnchor]) {
    let view = WheelView::new(image, anchors).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Wheel "),
    );
    frame.render_widget(view, area);
}
