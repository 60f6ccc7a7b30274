//! Core types shared across glyphgate components.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_CHANNEL_MAX, COLOR_CHANNEL_MIN, DEFAULT_CODE_COUNT, DEFAULT_FRAME_DELAY_MS,
    DEFAULT_GIF_QUALITY, DEFAULT_HEIGHT, DEFAULT_INTERFERENCE_COUNT, DEFAULT_WIDTH,
};
use crate::error::CaptchaError;

/// Canvas and layout configuration for a CAPTCHA renderer.
///
/// Immutable once constructed. Zero dimensions or a zero code count are
/// rejected up front rather than producing an undefined raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptchaSpec {
    /// Canvas width in pixels (> 0)
    width: u32,

    /// Canvas height in pixels (> 0)
    height: u32,

    /// Number of glyphs the layout is sized for (> 0)
    code_count: u32,

    /// Number of interference elements drawn per image/frame
    interference_count: u32,
}

impl CaptchaSpec {
    /// Create a new spec, validating dimensions and code count
    pub fn new(
        width: u32,
        height: u32,
        code_count: u32,
        interference_count: u32,
    ) -> Result<Self, CaptchaError> {
        if width == 0 || height == 0 {
            return Err(CaptchaError::InvalidConfig(format!(
                "canvas dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if code_count == 0 {
            return Err(CaptchaError::InvalidConfig(
                "code count must be positive".to_string(),
            ));
        }
        Ok(Self {
            width,
            height,
            code_count,
            interference_count,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn code_count(&self) -> u32 {
        self.code_count
    }

    pub fn interference_count(&self) -> u32 {
        self.interference_count
    }
}

impl Default for CaptchaSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            code_count: DEFAULT_CODE_COUNT,
            interference_count: DEFAULT_INTERFERENCE_COUNT,
        }
    }
}

/// Inclusive bounds for randomized color channel generation.
///
/// Every channel of a color drawn against this range lies in `[min, max]`.
/// An inverted range is rejected at construction instead of being silently
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    min: u8,
    max: u8,
}

impl ColorRange {
    /// Create a new range, rejecting `min > max`
    pub fn new(min: u8, max: u8) -> Result<Self, CaptchaError> {
        if min > max {
            return Err(CaptchaError::InvalidConfig(format!(
                "inverted color range: min {} > max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Full 0-255 range
    pub fn full() -> Self {
        Self {
            min: COLOR_CHANNEL_MIN,
            max: COLOR_CHANNEL_MAX,
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Returns true if every channel of `(r, g, b)` lies within the range
    pub fn contains(&self, r: u8, g: u8, b: u8) -> bool {
        let within = |c: u8| c >= self.min && c <= self.max;
        within(r) && within(g) && within(b)
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Encoding and animation parameters for animated CAPTCHA output.
///
/// An immutable value: the `with_*` builders return a new options value with
/// out-of-range inputs clamped, so a constructed `GifOptions` always holds
/// `quality >= 1` and `repeat >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifOptions {
    /// Encoding quality; 1 is highest fidelity, no upper bound is enforced
    quality: i32,

    /// Animation loop count; 0 means loop forever
    repeat: u16,

    /// Delay between frames in milliseconds
    frame_delay_ms: u32,

    /// Bounds for randomized glyph/interference colors
    color_range: ColorRange,
}

impl GifOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set encoding quality; values below 1 are clamped to 1
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality.max(1);
        self
    }

    /// Set loop count; negative values are clamped to 0 (loop forever)
    pub fn with_repeat(mut self, repeat: i32) -> Self {
        self.repeat = repeat.clamp(0, i32::from(u16::MAX)) as u16;
        self
    }

    /// Set the inter-frame delay in milliseconds
    pub fn with_frame_delay_ms(mut self, delay_ms: u32) -> Self {
        self.frame_delay_ms = delay_ms;
        self
    }

    /// Set the color range used for glyph and interference colors
    pub fn with_color_range(mut self, color_range: ColorRange) -> Self {
        self.color_range = color_range;
        self
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn repeat(&self) -> u16 {
        self.repeat
    }

    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    pub fn color_range(&self) -> ColorRange {
        self.color_range
    }
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_GIF_QUALITY,
            repeat: 0,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            color_range: ColorRange::full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_zero_dimensions() {
        assert!(CaptchaSpec::new(0, 100, 4, 10).is_err());
        assert!(CaptchaSpec::new(200, 0, 4, 10).is_err());
        assert!(CaptchaSpec::new(200, 100, 0, 10).is_err());
    }

    #[test]
    fn test_spec_accepts_zero_interference() {
        let spec = CaptchaSpec::new(200, 100, 4, 0).unwrap();
        assert_eq!(spec.interference_count(), 0);
    }

    #[test]
    fn test_quality_clamps_low_values_to_one() {
        assert_eq!(GifOptions::new().with_quality(0).quality(), 1);
        assert_eq!(GifOptions::new().with_quality(-5).quality(), 1);
        // No upper bound on the stored value
        assert_eq!(GifOptions::new().with_quality(500).quality(), 500);
    }

    #[test]
    fn test_repeat_clamps_negative_to_zero() {
        assert_eq!(GifOptions::new().with_repeat(-1).repeat(), 0);
        assert_eq!(GifOptions::new().with_repeat(5).repeat(), 5);
    }

    #[test]
    fn test_color_range_rejects_inversion() {
        assert!(ColorRange::new(200, 100).is_err());
        let range = ColorRange::new(100, 200).unwrap();
        assert!(range.contains(100, 150, 200));
        assert!(!range.contains(99, 150, 200));
    }
}
