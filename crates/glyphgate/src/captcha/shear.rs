//! Static CAPTCHA with whole-canvas shear distortion.

use std::io::Cursor;

use glyphgate_common::constants::mime;
use glyphgate_common::{CaptchaError, CaptchaSpec, ColorRange};
use image::{ImageFormat, Rgba, RgbaImage};
use rand::Rng;

use super::{CaptchaImage, validate_code};
use crate::distort;
use crate::glyphs::{self, CodeLayout};
use crate::interfere;
use crate::palette::random_color;

/// Renderer for static shear-distorted CAPTCHA images.
///
/// Configuration is immutable; `render` is a pure function of the spec, the
/// supplied code, and the random source, so one instance can serve any
/// number of renders.
pub struct ShearCaptcha {
    spec: CaptchaSpec,
    background: Rgba<u8>,
    color_range: ColorRange,
}

impl ShearCaptcha {
    /// Create a renderer with a white background and full glyph color range
    pub fn new(spec: CaptchaSpec) -> Self {
        Self {
            spec,
            background: Rgba([255, 255, 255, 255]),
            color_range: ColorRange::full(),
        }
    }

    /// Replace the background fill color
    pub fn with_background(mut self, background: Rgba<u8>) -> Self {
        self.background = background;
        self
    }

    /// Bound the randomized glyph and interference colors
    pub fn with_color_range(mut self, color_range: ColorRange) -> Self {
        self.color_range = color_range;
        self
    }

    pub fn spec(&self) -> &CaptchaSpec {
        &self.spec
    }

    /// Render the glyph sequence: draw, shear, interfere, encode as PNG.
    pub fn render(&self, code: &str) -> Result<CaptchaImage, CaptchaError> {
        let frame = self.render_frame(code)?;

        let mut bytes = Vec::new();
        frame
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| CaptchaError::Encoding(e.to_string()))?;

        tracing::debug!(
            width = self.spec.width(),
            height = self.spec.height(),
            code_len = code.chars().count(),
            bytes = bytes.len(),
            "Rendered shear captcha"
        );

        Ok(CaptchaImage::new(vec![frame], bytes, mime::PNG))
    }

    /// Produce the distorted raster without encoding it
    fn render_frame(&self, code: &str) -> Result<RgbaImage, CaptchaError> {
        let chars = validate_code(code)?;
        let width = self.spec.width();
        let height = self.spec.height();
        let mut rng = rand::rng();

        let mut img = RgbaImage::from_pixel(width, height, self.background);

        let layout = CodeLayout::for_canvas(width, height, chars.len());
        let jitter_amp = (height / 8) as i32;
        for (i, &c) in chars.iter().enumerate() {
            let color = random_color(&mut rng, &self.color_range);
            let jitter = if jitter_amp > 0 {
                rng.random_range(-jitter_amp..=jitter_amp)
            } else {
                0
            };
            glyphs::draw_glyph(
                &mut img,
                c,
                layout.x_for(i),
                layout.base_y + jitter,
                layout.scale,
                color,
            );
        }

        distort::shear(&mut rng, &mut img, self.background);
        interfere::draw_interfere_lines(
            &mut rng,
            &mut img,
            self.spec.interference_count(),
            &self.color_range,
        );

        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_matches_spec_dimensions() {
        let spec = CaptchaSpec::new(200, 100, 4, 10).unwrap();
        let frame = ShearCaptcha::new(spec).render_frame("ABCD").unwrap();
        assert_eq!((frame.width(), frame.height()), (200, 100));
    }

    #[test]
    fn test_render_frame_touches_canvas() {
        let spec = CaptchaSpec::new(120, 60, 4, 0).unwrap();
        let bg = Rgba([255, 255, 255, 255]);
        let frame = ShearCaptcha::new(spec)
            .with_background(bg)
            .with_color_range(ColorRange::new(0, 120).unwrap())
            .render_frame("8888")
            .unwrap();
        assert!(frame.pixels().any(|p| *p != bg), "glyphs should survive the shear");
    }

    #[test]
    fn test_render_rejects_empty_code() {
        let spec = CaptchaSpec::new(100, 50, 4, 4).unwrap();
        assert!(matches!(
            ShearCaptcha::new(spec).render(""),
            Err(CaptchaError::InvalidCode(_))
        ));
    }
}
