//! Shared constants for glyphgate components.

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 200;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 100;

/// Default number of glyphs the canvas is laid out for
pub const DEFAULT_CODE_COUNT: u32 = 5;

/// Default number of interference elements per image/frame
pub const DEFAULT_INTERFERENCE_COUNT: u32 = 4;

/// Default GIF encoding quality (lower is higher fidelity)
pub const DEFAULT_GIF_QUALITY: i32 = 10;

/// GIF quantizer speed accepted by the encoder; quality values above this
/// are capped at encode time
pub const MAX_GIF_QUANTIZER_SPEED: i32 = 30;

/// Default delay between animation frames in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Lowest color channel value
pub const COLOR_CHANNEL_MIN: u8 = 0;

/// Highest color channel value
pub const COLOR_CHANNEL_MAX: u8 = 255;

/// MIME types for the encoded outputs
pub mod mime {
    /// Static single-frame output
    pub const PNG: &str = "image/png";

    /// Animated multi-frame output
    pub const GIF: &str = "image/gif";
}
