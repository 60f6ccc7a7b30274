//! CAPTCHA renderers and the rendered-image handle.
//!
//! Two renderers share the drawing pipeline: [`ShearCaptcha`] produces a
//! static shear-distorted frame, [`GifCaptcha`] an animated multi-frame GIF.

mod gif;
mod shear;

pub use gif::GifCaptcha;
pub use shear::ShearCaptcha;

use base64::{Engine, engine::general_purpose::STANDARD};
use glyphgate_common::CaptchaError;
use image::RgbaImage;

/// A rendered CAPTCHA: the in-memory frame(s) plus the encoded byte stream.
///
/// The byte stream is produced at render time, so a successful render always
/// carries non-empty bytes.
pub struct CaptchaImage {
    frames: Vec<RgbaImage>,
    bytes: Vec<u8>,
    mime: &'static str,
}

impl CaptchaImage {
    pub(crate) fn new(frames: Vec<RgbaImage>, bytes: Vec<u8>, mime: &'static str) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            frames,
            bytes,
            mime,
        }
    }

    /// Pixel width of the output, always equal to the configured canvas width
    pub fn width(&self) -> u32 {
        self.frames[0].width()
    }

    /// Pixel height of the output, always equal to the configured canvas
    /// height
    pub fn height(&self) -> u32 {
        self.frames[0].height()
    }

    /// Number of raster frames (1 for static output, one per glyph for
    /// animated output)
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Decoded raster frames in animation order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Encoded image bytes (PNG or GIF)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the handle, keeping only the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// MIME type of the encoded bytes
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Base64 data URI, the transport format used when embedding the image
    /// directly in a challenge payload
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Reject empty glyph sequences before any canvas is allocated
pub(crate) fn validate_code(code: &str) -> Result<Vec<char>, CaptchaError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.is_empty() {
        return Err(CaptchaError::InvalidCode(
            "glyph sequence is empty".to_string(),
        ));
    }
    Ok(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code_rejects_empty() {
        assert!(matches!(
            validate_code(""),
            Err(CaptchaError::InvalidCode(_))
        ));
        assert_eq!(validate_code("A1b").unwrap(), vec!['A', '1', 'b']);
    }

    #[test]
    fn test_data_uri_prefix() {
        let frame = RgbaImage::new(2, 2);
        let img = CaptchaImage::new(vec![frame], vec![1, 2, 3], "image/gif");
        assert!(img.to_data_uri().starts_with("data:image/gif;base64,"));
    }
}
