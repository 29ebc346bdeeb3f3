//! Raster primitives over `image::RgbaImage`.
//!
//! Screen convention throughout: x grows right, y grows down, angles are
//! measured from 3 o'clock and increase clockwise.

use image::{Rgba, RgbaImage};

/// Outline width at the wheel's rim, in pixels.
const RIM_WIDTH: f64 = 1.0;

/// Half-width of the radial divider lines, in pixels.
const DIVIDER_HALF_WIDTH: f64 = 0.75;

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque RGB colour as an `Rgba` pixel.
#[must_use]
pub fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 0xFF])
}

/// Screen angle of `(dx, dy)` in `[0, 360)`.
#[must_use]
pub fn screen_angle(dx: f64, dy: f64) -> f64 {
    let degrees = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Fill the inscribed circle of `img` with `colors.len()` equal sectors.
///
/// Sector `i` spans `[i * per, (i + 1) * per)` degrees. The rim and the
/// radial dividers are painted with `outline`; a single sector has no
/// divider. Pixels outside the circle are left untouched.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_sectors(img: &mut RgbaImage, colors: &[Rgba<u8>], outline: Rgba<u8>) {
    let count = colors.len();
    if count == 0 {
        return;
    }
    let (width, height) = img.dimensions();
    let radius = f64::from(width.min(height)) / 2.0;
    let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let per = 360.0 / count as f64;

    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - cx;
        let dy = f64::from(y) + 0.5 - cy;
        let dist = dx.hypot(dy);
        if dist > radius {
            continue;
        }
        if radius - dist < RIM_WIDTH {
            *px = outline;
            continue;
        }

        let angle = screen_angle(dx, dy);
        let index = ((angle / per) as usize).min(count - 1);
        if count > 1 {
            let offset = angle - index as f64 * per;
            let edge_degrees = offset.min(per - offset);
            if edge_degrees.to_radians() * dist < DIVIDER_HALF_WIDTH {
                *px = outline;
                continue;
            }
        }
        *px = colors[index];
    }
}

/// Fill a triangle with a solid colour (scanline, 16.16 fixed point).
///
/// Rows and columns outside the image are clipped.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_triangle(img: &mut RgbaImage, points: [(i32, i32); 3], color: Rgba<u8>) {
    let mut pts = points;
    pts.sort_by_key(|&(_, y)| y);
    let [(x0, y0), (x1, y1), (x2, y2)] = pts;

    let total_height = y2 - y0;
    if total_height == 0 {
        return;
    }

    for y in y0..=y2 {
        let second_half = y > y1 || y1 == y0;
        let segment_height = if second_half { y2 - y1 } else { y1 - y0 };
        if segment_height == 0 {
            continue;
        }

        let dy = y - if second_half { y1 } else { y0 };
        let alpha = (i64::from(y - y0) << 16) / i64::from(total_height);
        let beta = (i64::from(dy) << 16) / i64::from(segment_height);

        let ax = x0 + ((i64::from(x2 - x0) * alpha) >> 16) as i32;
        let bx = if second_half {
            x1 + ((i64::from(x2 - x1) * beta) >> 16) as i32
        } else {
            x0 + ((i64::from(x1 - x0) * beta) >> 16) as i32
        };

        let (xa, xb) = if ax < bx { (ax, bx) } else { (bx, ax) };
        draw_hline(img, xa, xb, y, color);
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn draw_hline(img: &mut RgbaImage, x0: i32, x1: i32, y: i32, color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    if y < 0 || y >= height as i32 {
        return;
    }
    let start = x0.max(0);
    let end = x1.min(width as i32 - 1);
    for x in start..=end {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Rotate `src` about its centre by `degrees` counter-clockwise on screen,
/// writing into `dst`.
///
/// `dst` keeps the source size (corners that rotate out are lost, corners
/// that rotate in are transparent) and is reallocated only when its size
/// differs. Sampling is bilinear on premultiplied alpha, so transparent
/// texels never bleed their colour into the rim.
pub fn rotate_ccw(src: &RgbaImage, degrees: f64, dst: &mut RgbaImage) {
    let (width, height) = src.dimensions();
    if dst.dimensions() != (width, height) {
        *dst = RgbaImage::new(width, height);
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);

    for (x, y, px) in dst.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - cx;
        let dy = f64::from(y) + 0.5 - cy;
        let sx = dx * cos - dy * sin + cx - 0.5;
        let sy = dx * sin + dy * cos + cy - 0.5;
        *px = sample_bilinear(src, sx, sy);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_bilinear(src: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (fx0, fy0) = (x.floor(), y.floor());
    let (fx, fy) = (x - fx0, y - fy0);
    let (x0, y0) = (fx0 as i64, fy0 as i64);

    let taps = [
        (0, 0, (1.0 - fx) * (1.0 - fy)),
        (1, 0, fx * (1.0 - fy)),
        (0, 1, (1.0 - fx) * fy),
        (1, 1, fx * fy),
    ];

    let mut acc = [0.0_f64; 4];
    for (ox, oy, weight) in taps {
        if weight <= 0.0 {
            continue;
        }
        let Some(texel) = texel(src, x0 + ox, y0 + oy) else {
            continue;
        };
        let alpha = f64::from(texel[3]) / 255.0 * weight;
        acc[0] += f64::from(texel[0]) * alpha;
        acc[1] += f64::from(texel[1]) * alpha;
        acc[2] += f64::from(texel[2]) * alpha;
        acc[3] += alpha;
    }

    if acc[3] <= 0.0 {
        return TRANSPARENT;
    }
    let channel = |v: f64| (v / acc[3]).round().clamp(0.0, 255.0) as u8;
    Rgba([
        channel(acc[0]),
        channel(acc[1]),
        channel(acc[2]),
        (acc[3] * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn texel(src: &RgbaImage, x: i64, y: i64) -> Option<&Rgba<u8>> {
    let (width, height) = src.dimensions();
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return None;
    }
    Some(src.get_pixel(x as u32, y as u32))
}

/// Blend `color` over the pixel at `(x, y)` with the given coverage.
///
/// Out-of-bounds coordinates are ignored.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    let (width, height) = img.dimensions();
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    let mix = |under: u8, over: u8| {
        (f32::from(under) * (1.0 - coverage) + f32::from(over) * coverage).round() as u8
    };
    let alpha = (f32::from(color[3]) * coverage).max(f32::from(px[3]));
    *px = Rgba([
        mix(px[0], color[0]),
        mix(px[1], color[1]),
        mix(px[2], color[2]),
        alpha.round().clamp(0.0, 255.0) as u8,
    ]);
}
