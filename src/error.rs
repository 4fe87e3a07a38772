//! Error types for rasterkit operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch {
        /// Expected pixel count (`width * height`).
        expected: usize,
        /// Actual slice length.
        actual: usize,
    },

    /// Stroke thickness below the minimum of one pixel.
    #[error("Invalid thickness: {thickness} (must be >= 1)")]
    InvalidThickness {
        /// Rejected thickness value.
        thickness: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_thickness_display() {
        let err = Error::InvalidThickness { thickness: 0 };
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains(">= 1"));
    }

    #[test]
    fn test_buffer_size_mismatch_display() {
        let err = Error::BufferSizeMismatch {
            expected: 100,
            actual: 64,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("64"));
    }
}
