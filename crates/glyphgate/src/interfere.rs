//! Interference elements drawn over rendered glyphs.
//!
//! Static output gets thick line segments, animated frames get hollow
//! ellipses. Endpoints, sizes, and colors are all randomized per element.

use glyphgate_common::ColorRange;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_ellipse_mut, draw_line_segment_mut};
use rand::Rng;

use crate::palette::random_color;

/// Draw `count` thick line segments with random endpoints and colors.
pub(crate) fn draw_interfere_lines<R: Rng + ?Sized>(
    rng: &mut R,
    img: &mut RgbaImage,
    count: u32,
    range: &ColorRange,
) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    for _ in 0..count {
        let start = (rng.random_range(0..w) as f32, rng.random_range(0..h) as f32);
        let end = (rng.random_range(0..w) as f32, rng.random_range(0..h) as f32);
        let thickness = rng.random_range(1..=3);
        let color = random_color(rng, range);
        draw_thick_line(img, start, end, thickness, color);
    }
}

/// Draw `count` hollow ellipses with random centers and radii.
pub(crate) fn draw_interfere_ovals<R: Rng + ?Sized>(
    rng: &mut R,
    img: &mut RgbaImage,
    count: u32,
    range: &ColorRange,
) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    for _ in 0..count {
        let center = (rng.random_range(0..w), rng.random_range(0..h));
        let radius_w = rng.random_range(2..=25);
        let radius_h = rng.random_range(2..=25);
        let color = random_color(rng, range);
        draw_hollow_ellipse_mut(img, center, radius_w, radius_h, color);
    }
}

/// Approximate a thick line by stacking unit-width segments offset along the
/// line's normal.
pub(crate) fn draw_thick_line(
    img: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    thickness: u32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt().max(1.0);
    let (nx, ny) = (-dy / len, dx / len);
    for t in 0..thickness.max(1) {
        let off = t as f32 - (thickness.max(1) as f32 - 1.0) / 2.0;
        draw_line_segment_mut(
            img,
            (start.0 + nx * off, start.1 + ny * off),
            (end.0 + nx * off, end.1 + ny * off),
            color,
        );
    }
}
