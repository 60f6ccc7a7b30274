//! Randomized color selection bounded by a [`ColorRange`].

use glyphgate_common::ColorRange;
use image::Rgba;
use rand::Rng;

/// Draw a fully opaque color whose channels are each sampled independently
/// and uniformly from the range's `[min, max]`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, range: &ColorRange) -> Rgba<u8> {
    let r = rng.random_range(range.min()..=range.max());
    let g = rng.random_range(range.min()..=range.max());
    let b = rng.random_range(range.min()..=range.max());
    Rgba([r, g, b, 255])
}

/// Blend `fg` over `bg` at opacity `alpha` (0.0 = background, 1.0 = glyph
/// color), returning an opaque pixel.
///
/// Frames are pre-blended so the encoded GIF never carries partial alpha.
pub(crate) fn blend_over(fg: Rgba<u8>, bg: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f32::from(f) * a + f32::from(b) * (1.0 - a)).round() as u8;
    Rgba([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_stays_within_bounds() {
        let mut rng = rand::rng();
        let range = ColorRange::new(100, 180).unwrap();
        for _ in 0..200 {
            let Rgba([r, g, b, a]) = random_color(&mut rng, &range);
            assert!(range.contains(r, g, b));
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn test_random_color_degenerate_range() {
        let mut rng = rand::rng();
        let range = ColorRange::new(42, 42).unwrap();
        let Rgba([r, g, b, _]) = random_color(&mut rng, &range);
        assert_eq!((r, g, b), (42, 42, 42));
    }

    #[test]
    fn test_blend_endpoints() {
        let fg = Rgba([200, 100, 50, 255]);
        let bg = Rgba([255, 255, 255, 255]);
        assert_eq!(blend_over(fg, bg, 1.0), fg);
        assert_eq!(blend_over(fg, bg, 0.0), bg);
    }

    #[test]
    fn test_blend_clamps_alpha() {
        let fg = Rgba([0, 0, 0, 255]);
        let bg = Rgba([255, 255, 255, 255]);
        assert_eq!(blend_over(fg, bg, 2.0), fg);
        assert_eq!(blend_over(fg, bg, -1.0), bg);
    }
}
