//! Common error types for glyphgate components.

use thiserror::Error;

/// Errors surfaced by CAPTCHA rendering
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Invalid renderer configuration (zero dimensions, inverted color range)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid glyph sequence (empty code)
    #[error("Invalid code: {0}")]
    InvalidCode(String),

    /// Image encoding failed (PNG/GIF writer error)
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl CaptchaError {
    /// Returns true if the error stems from caller-supplied input rather
    /// than the encoding backend
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::InvalidCode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_error_classification() {
        assert!(CaptchaError::InvalidConfig("w".into()).is_caller_error());
        assert!(CaptchaError::InvalidCode("empty".into()).is_caller_error());
        assert!(!CaptchaError::Encoding("gif".into()).is_caller_error());
    }

    #[test]
    fn test_error_display() {
        let err = CaptchaError::Encoding("writer closed".into());
        assert_eq!(err.to_string(), "Encoding failed: writer closed");
    }
}
