//! Label fonts and the fallback chain that picks one.
//!
//! Candidates are tried in order and the first that loads wins. The
//! built-in 8×8 bitmap font always loads, so the chain never fails.

use std::fmt;
use std::path::{Path, PathBuf};

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use spinwheel_core::WheelError;
use tracing::debug;
use walkdir::WalkDir;

use crate::raster::blend_pixel;

/// Pixel height of TrueType labels.
pub const LABEL_FONT_PX: f32 = 16.0;

/// Cell size of the built-in bitmap font.
const BUILTIN_CELL: u32 = 8;

/// How deep to walk a font directory.
const FONT_SEARCH_DEPTH: usize = 6;

/// System font directories searched after the user's own.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// One entry in the font fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file name, looked up in the working directory and then in
    /// the font directories.
    Named(String),
    /// An explicit font file.
    File(PathBuf),
    /// The built-in bitmap font.
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "builtin"),
        }
    }
}

/// Default chain: Arial, then DejaVu Sans, then the bitmap font.
#[must_use]
pub fn default_candidates() -> Vec<FontSource> {
    vec![
        FontSource::Named("arial.ttf".into()),
        FontSource::Named("DejaVuSans.ttf".into()),
        FontSource::Builtin,
    ]
}

/// A loaded label font.
pub enum LabelFont {
    /// TrueType font rendered with coverage antialiasing.
    Vector {
        name: String,
        font: Font<'static>,
        scale: Scale,
    },
    /// 8×8 bitmap font from `font8x8`.
    Builtin,
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector { name, scale, .. } => f
                .debug_struct("Vector")
                .field("name", name)
                .field("px", &scale.y)
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl LabelFont {
    /// Walk `candidates` and return the first font that loads.
    ///
    /// Failures are logged at debug level. Falls back to
    /// [`LabelFont::Builtin`] when every candidate fails.
    #[must_use]
    pub fn load(candidates: &[FontSource]) -> Self {
        for source in candidates {
            match Self::try_load(source) {
                Ok(font) => {
                    debug!(font = %source, "label font loaded");
                    return font;
                }
                Err(err) => debug!(error = %err, "font candidate skipped"),
            }
        }
        debug!("no font candidate loaded, using builtin");
        Self::Builtin
    }

    /// Load a single candidate.
    pub fn try_load(source: &FontSource) -> Result<Self, WheelError> {
        let unavailable = |reason: String| WheelError::FontUnavailable {
            source_name: source.to_string(),
            reason,
        };

        match source {
            FontSource::Builtin => Ok(Self::Builtin),
            FontSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|err| unavailable(err.to_string()))?;
                Self::from_bytes(source.to_string(), bytes)
            }
            FontSource::Named(name) => {
                let path = locate(name).ok_or_else(|| unavailable("not found".into()))?;
                let bytes = std::fs::read(&path).map_err(|err| unavailable(err.to_string()))?;
                Self::from_bytes(name.clone(), bytes)
            }
        }
    }

    /// Parse TrueType/OpenType bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, WheelError> {
        let name = name.into();
        let font = Font::try_from_vec(bytes).ok_or_else(|| WheelError::FontUnavailable {
            source_name: name.clone(),
            reason: "not a valid font file".into(),
        })?;
        Ok(Self::Vector {
            name,
            font,
            scale: Scale::uniform(LABEL_FONT_PX),
        })
    }

    /// Display name of the font.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Vector { name, .. } => name,
            Self::Builtin => "builtin",
        }
    }

    /// Whether this is the bitmap fallback.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Ink size of `text` in pixels (width, height).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Vector { font, scale, .. } => {
                let glyphs = layout(font, *scale, text);
                let (min_x, max_x, min_y, max_y) = ink_bounds(&glyphs);
                (
                    (max_x - min_x).max(0) as u32,
                    (max_y - min_y).max(0) as u32,
                )
            }
            Self::Builtin => {
                let chars = text.chars().count() as u32;
                (chars * BUILTIN_CELL, if chars == 0 { 0 } else { BUILTIN_CELL })
            }
        }
    }

    /// Draw `text` centred on `(cx, cy)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn draw_centered(&self, img: &mut RgbaImage, text: &str, cx: f64, cy: f64, color: Rgba<u8>) {
        let (width, height) = self.measure(text);
        let left = (cx - f64::from(width) / 2.0).round() as i64;
        let top = (cy - f64::from(height) / 2.0).round() as i64;

        match self {
            Self::Vector { font, scale, .. } => {
                let glyphs = layout(font, *scale, text);
                let (min_x, _, min_y, _) = ink_bounds(&glyphs);
                for glyph in &glyphs {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let x = left + i64::from(gx) + i64::from(bb.min.x - min_x);
                        let y = top + i64::from(gy) + i64::from(bb.min.y - min_y);
                        blend_pixel(img, x, y, color, coverage);
                    });
                }
            }
            Self::Builtin => {
                for (slot, ch) in text.chars().enumerate() {
                    let glyph = BASIC_FONTS
                        .get(ch)
                        .or_else(|| BASIC_FONTS.get('?'))
                        .unwrap_or([0; 8]);
                    let origin = left + slot as i64 * i64::from(BUILTIN_CELL);
                    for (row, bits) in glyph.iter().enumerate() {
                        for col in 0..BUILTIN_CELL {
                            if bits & (1 << col) != 0 {
                                blend_pixel(
                                    img,
                                    origin + i64::from(col),
                                    top + row as i64,
                                    color,
                                    1.0,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

fn layout(font: &Font<'static>, scale: Scale, text: &str) -> Vec<PositionedGlyph<'static>> {
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(0.0, ascent)).collect()
}

fn ink_bounds(glyphs: &[PositionedGlyph<'_>]) -> (i32, i32, i32, i32) {
    let bounds = glyphs.iter().filter_map(PositionedGlyph::pixel_bounding_box).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    if bounds.0 > bounds.1 {
        (0, 0, 0, 0)
    } else {
        bounds
    }
}

/// Find a font file by name.
///
/// Looks in the working directory first, then walks the user and system
/// font directories. Names match case-insensitively.
#[must_use]
pub fn locate(name: &str) -> Option<PathBuf> {
    let local = Path::new(name);
    if local.is_file() {
        return Some(local.to_path_buf());
    }
    search_roots()
        .iter()
        .filter(|root| root.is_dir())
        .find_map(|root| find_in(root, name))
}

/// Walk `root` for a file called `name`.
#[must_use]
pub fn find_in(root: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .max_depth(FONT_SEARCH_DEPTH)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().eq_ignore_ascii_case(name)
        })
        .map(walkdir::DirEntry::into_path)
}

fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(font_dir) = dirs::font_dir() {
        roots.push(font_dir);
    }
    if let Some(data_dir) = dirs::data_dir() {
        roots.push(data_dir.join("fonts"));
    }
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".fonts"));
    }
    roots.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    roots.dedup();
    roots
}
