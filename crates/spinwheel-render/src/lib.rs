//! # spinwheel-render
//!
//! Software rasterizer for the spin wheel. Draws colour sectors with
//! centred labels, rotates the wheel about its centre, and composites it
//! with a fixed indicator onto a reusable RGBA canvas.

pub mod font;
pub mod observer;
pub mod raster;
pub mod renderer;

// Re-exports
pub use font::{default_candidates, FontSource, LabelFont};
pub use observer::RenderObserver;
pub use renderer::{LabelAnchor, WheelRenderer, INDICATOR_POINTS, INDICATOR_SIZE};
