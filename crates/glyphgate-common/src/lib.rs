//! # Glyphgate Common
//!
//! Shared types and utilities used across glyphgate components.
//!
//! ## Modules
//! - `types` - Core data structures (CaptchaSpec, ColorRange, GifOptions)
//! - `error` - Common error types
//! - `constants` - Shared configuration constants

pub mod constants;
pub mod error;
pub mod types;

pub use error::CaptchaError;
pub use types::*;
