//! Error types for tileblur-core.
//!
//! # Usage
//!
//! ```rust
//! use tileblur_core::{Error, Result};
//!
//! fn check(width: usize, height: usize) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "width and height must be > 0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero, or the pixel count overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel buffer length does not match `width * height`.
    #[error("pixel buffer holds {got} pixels, expected {expected}")]
    DataLength {
        /// Expected pixel count
        expected: usize,
        /// Provided pixel count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DataLength { expected: 6, got: 4 };
        assert_eq!(err.to_string(), "pixel buffer holds 4 pixels, expected 6");

        let err = Error::invalid_dimensions(0, 10, "width must be > 0");
        assert_eq!(err.to_string(), "invalid dimensions: 0x10 (width must be > 0)");
    }
}
