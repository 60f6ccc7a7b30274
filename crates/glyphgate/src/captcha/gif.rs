//! Animated CAPTCHA assembled as a looping multi-frame GIF.
//!
//! One frame per glyph: frame `k` draws the whole code with glyph `k` fully
//! opaque and the rest faded by cyclic distance, which reads as a rolling
//! highlight when the GIF loops.

use glyphgate_common::constants::{MAX_GIF_QUANTIZER_SPEED, mime};
use glyphgate_common::{CaptchaError, CaptchaSpec, GifOptions};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use rand::Rng;

use super::{CaptchaImage, validate_code};
use crate::glyphs::{self, CodeLayout};
use crate::interfere;
use crate::palette::{blend_over, random_color};

/// Renderer for animated GIF CAPTCHA images
pub struct GifCaptcha {
    spec: CaptchaSpec,
    options: GifOptions,
    background: Rgba<u8>,
}

impl GifCaptcha {
    /// Create a renderer with default options and a white background
    pub fn new(spec: CaptchaSpec) -> Self {
        Self {
            spec,
            options: GifOptions::default(),
            background: Rgba([255, 255, 255, 255]),
        }
    }

    /// Replace the encoding/animation options
    pub fn with_options(mut self, options: GifOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the background fill color
    pub fn with_background(mut self, background: Rgba<u8>) -> Self {
        self.background = background;
        self
    }

    pub fn spec(&self) -> &CaptchaSpec {
        &self.spec
    }

    pub fn options(&self) -> &GifOptions {
        &self.options
    }

    /// Render the glyph sequence as one GIF frame per character.
    ///
    /// Each glyph gets one color drawn from the configured range, shared by
    /// all frames; per-frame alpha does the animation.
    pub fn render(&self, code: &str) -> Result<CaptchaImage, CaptchaError> {
        let chars = validate_code(code)?;
        let mut rng = rand::rng();
        let range = self.options.color_range();

        let colors: Vec<Rgba<u8>> = chars
            .iter()
            .map(|_| random_color(&mut rng, &range))
            .collect();

        let frames: Vec<RgbaImage> = (0..chars.len())
            .map(|k| self.render_frame(&mut rng, &chars, &colors, k))
            .collect();

        let bytes = self.encode(&frames)?;

        tracing::debug!(
            width = self.spec.width(),
            height = self.spec.height(),
            frames = frames.len(),
            quality = self.options.quality(),
            repeat = self.options.repeat(),
            bytes = bytes.len(),
            "Rendered gif captcha"
        );

        Ok(CaptchaImage::new(frames, bytes, mime::GIF))
    }

    /// Draw one animation frame with glyph `flag` in focus
    fn render_frame<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        chars: &[char],
        colors: &[Rgba<u8>],
        flag: usize,
    ) -> RgbaImage {
        let width = self.spec.width();
        let height = self.spec.height();
        let range = self.options.color_range();

        let mut img = RgbaImage::from_pixel(width, height, self.background);

        interfere::draw_interfere_ovals(rng, &mut img, self.spec.interference_count(), &range);

        let layout = CodeLayout::for_canvas(width, height, chars.len());
        let jitter_amp = (height / 8) as i32;
        for (i, &c) in chars.iter().enumerate() {
            let alpha = fade_alpha(flag, i, chars.len());
            let color = blend_over(colors[i], self.background, alpha);
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

        img
    }

    /// Assemble frames into a GIF byte stream.
    ///
    /// Quality maps onto the encoder's quantizer speed, which only accepts
    /// 1..=30; repeat 0 means loop forever.
    fn encode(&self, frames: &[RgbaImage]) -> Result<Vec<u8>, CaptchaError> {
        let speed = self.options.quality().min(MAX_GIF_QUANTIZER_SPEED);
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, speed);
            let repeat = match self.options.repeat() {
                0 => Repeat::Infinite,
                n => Repeat::Finite(n),
            };
            encoder
                .set_repeat(repeat)
                .map_err(|e| CaptchaError::Encoding(e.to_string()))?;

            let delay = Delay::from_numer_denom_ms(self.options.frame_delay_ms(), 1);
            for frame in frames {
                encoder
                    .encode_frame(Frame::from_parts(frame.clone(), 0, 0, delay))
                    .map_err(|e| CaptchaError::Encoding(e.to_string()))?;
            }
        }
        Ok(bytes)
    }
}

/// Opacity of glyph `i` on frame `flag`: 1.0 in focus, fading with cyclic
/// distance but never fully invisible.
fn fade_alpha(flag: usize, i: usize, len: usize) -> f32 {
    let len = len.max(1);
    let dist = (i + len - flag % len) % len;
    1.0 - 0.7 * dist as f32 / len as f32
}
