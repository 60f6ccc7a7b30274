//! # Glyphgate
//!
//! Distorted-text CAPTCHA image generation: renders a supplied glyph
//! sequence onto a raster canvas with randomized colors, sinusoidal shear
//! distortion, and interference elements, then encodes the result as a
//! static PNG or an animated GIF.
//!
//! ## Renderers
//! - [`ShearCaptcha`] - single frame, whole-canvas shear plus thick
//!   interference lines
//! - [`GifCaptcha`] - one frame per glyph with cyclic color fade, assembled
//!   into a looping GIF
//!
//! Both renderers are pure: configuration is an immutable value and every
//! `render` call allocates a fresh canvas, so distinct instances may be used
//! freely across threads. Code generation and answer verification are the
//! caller's concern; the renderer consumes the code as an opaque string.
//!
//! ```no_run
//! use glyphgate::{CaptchaSpec, ShearCaptcha};
//!
//! let spec = CaptchaSpec::new(200, 100, 4, 10)?;
//! let image = ShearCaptcha::new(spec).render("ABCD")?;
//! assert_eq!((image.width(), image.height()), (200, 100));
//! # Ok::<(), glyphgate::CaptchaError>(())
//! ```

pub mod captcha;

mod distort;
mod glyphs;
mod interfere;
mod palette;

pub use captcha::{CaptchaImage, GifCaptcha, ShearCaptcha};
pub use glyphgate_common::{CaptchaError, CaptchaSpec, ColorRange, GifOptions, constants};
pub use palette::random_color;
