//! Sinusoidal shear distortion over a raster canvas.
//!
//! Scanlines (`shear_x`) and columns (`shear_y`) are offset by a sine wave
//! with a randomized period, and the gaps exposed by each shift are filled
//! with the background color so the output carries no transparent artifacts.

use std::f64::consts::TAU;

use image::{Rgba, RgbaImage};
use rand::Rng;

/// Apply the full distortion: horizontal row shear followed by vertical
/// column shear. Mutates the canvas in place.
pub(crate) fn shear<R: Rng + ?Sized>(rng: &mut R, img: &mut RgbaImage, fill: Rgba<u8>) {
    shear_x(rng, img, fill);
    shear_y(rng, img, fill);
}

/// Offset each scanline horizontally by `(period / 2) * sin(y / period)`,
/// with the period drawn from the canvas width and a random half-turn phase.
pub(crate) fn shear_x<R: Rng + ?Sized>(rng: &mut R, img: &mut RgbaImage, fill: Rgba<u8>) {
    let height = img.height();
    let period = rng.random_range(1..=img.width()) as f64;
    let phase = rng.random_range(0..2) as f64;
    for y in 0..height {
        let d = (period / 2.0) * (f64::from(y) / period + TAU * phase).sin();
        shift_row(img, y, d as i32, fill);
    }
}

/// Offset each column vertically over a short fixed-phase wave.
pub(crate) fn shear_y<R: Rng + ?Sized>(rng: &mut R, img: &mut RgbaImage, fill: Rgba<u8>) {
    let width = img.width();
    let period = rng.random_range(10..50) as f64;
    let frames = 20.0;
    let phase = 7.0;
    for x in 0..width {
        let d = (period / 2.0) * (f64::from(x) / period + TAU * phase / frames).sin();
        shift_column(img, x, d as i32, fill);
    }
}

/// Shift row `y` by `dx` pixels (positive = right), filling the exposed
/// region with `fill`.
fn shift_row(img: &mut RgbaImage, y: u32, dx: i32, fill: Rgba<u8>) {
    let w = img.width() as i32;
    if dx == 0 {
        return;
    }
    if dx.abs() >= w {
        for x in 0..w {
            img.put_pixel(x as u32, y, fill);
        }
        return;
    }
    if dx > 0 {
        for x in (dx..w).rev() {
            let p = *img.get_pixel((x - dx) as u32, y);
            img.put_pixel(x as u32, y, p);
        }
        for x in 0..dx {
            img.put_pixel(x as u32, y, fill);
        }
    } else {
        for x in 0..(w + dx) {
            let p = *img.get_pixel((x - dx) as u32, y);
            img.put_pixel(x as u32, y, p);
        }
        for x in (w + dx)..w {
            img.put_pixel(x as u32, y, fill);
        }
    }
}

/// Shift column `x` by `dy` pixels (positive = down), filling the exposed
/// region with `fill`.
fn shift_column(img: &mut RgbaImage, x: u32, dy: i32, fill: Rgba<u8>) {
    let h = img.height() as i32;
    if dy == 0 {
        return;
    }
    if dy.abs() >= h {
        for y in 0..h {
            img.put_pixel(x, y as u32, fill);
        }
        return;
    }
    if dy > 0 {
        for y in (dy..h).rev() {
            let p = *img.get_pixel(x, (y - dy) as u32);
            img.put_pixel(x, y as u32, p);
        }
        for y in 0..dy {
            img.put_pixel(x, y as u32, fill);
        }
    } else {
        for y in 0..(h + dy) {
            let p = *img.get_pixel(x, (y - dy) as u32);
            img.put_pixel(x, y as u32, p);
        }
        for y in (h + dy)..h {
            img.put_pixel(x, y as u32, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn row_pixels(img: &RgbaImage, y: u32) -> Vec<u8> {
        (0..img.width()).map(|x| img.get_pixel(x, y)[0]).collect()
    }

    #[test]
    fn test_shift_row_right_fills_left_gap() {
        let mut img = RgbaImage::new(4, 1);
        for x in 0..4 {
            img.put_pixel(x, 0, Rgba([x as u8 + 1, 0, 0, 255]));
        }
        shift_row(&mut img, 0, 1, Rgba([9, 0, 0, 255]));
        assert_eq!(row_pixels(&img, 0), vec![9, 1, 2, 3]);
    }

    #[test]
    fn test_shift_row_left_fills_right_gap() {
        let mut img = RgbaImage::new(4, 1);
        for x in 0..4 {
            img.put_pixel(x, 0, Rgba([x as u8 + 1, 0, 0, 255]));
        }
        shift_row(&mut img, 0, -2, Rgba([9, 0, 0, 255]));
        assert_eq!(row_pixels(&img, 0), vec![3, 4, 9, 9]);
    }

    #[test]
    fn test_shift_row_overshoot_fills_everything() {
        let mut img = RgbaImage::from_pixel(4, 1, BLACK);
        shift_row(&mut img, 0, 7, WHITE);
        assert_eq!(row_pixels(&img, 0), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_shift_column_down_fills_top_gap() {
        let mut img = RgbaImage::new(1, 4);
        for y in 0..4 {
            img.put_pixel(0, y, Rgba([y as u8 + 1, 0, 0, 255]));
        }
        shift_column(&mut img, 0, 2, Rgba([9, 0, 0, 255]));
        let col: Vec<u8> = (0..4).map(|y| img.get_pixel(0, y)[0]).collect();
        assert_eq!(col, vec![9, 9, 1, 2]);
    }

    #[test]
    fn test_shear_preserves_dimensions_and_palette() {
        let mut rng = StdRng::seed_from_u64(0xCAFE);
        let mut img = RgbaImage::from_pixel(80, 40, BLACK);
        shear(&mut rng, &mut img, WHITE);
        assert_eq!((img.width(), img.height()), (80, 40));
        // Shifting moves pixels and fills gaps; it never invents new colors
        assert!(img.pixels().all(|p| *p == BLACK || *p == WHITE));
    }

    #[test]
    fn test_shear_on_tiny_canvas() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut img = RgbaImage::from_pixel(1, 1, BLACK);
        shear(&mut rng, &mut img, WHITE);
        assert_eq!((img.width(), img.height()), (1, 1));
    }
}
