//! Pipeline error type
//!
//! Wraps the codec and resampler errors without altering them, and keeps
//! storage failures separate from malformed input.

use bmpscale_io::{FormatError, IoError};
use bmpscale_transform::TransformError;
use thiserror::Error;

/// Error returned by the upscale pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not a well-formed 24-bit BMP
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Invalid scale factor or output too large
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `true` for a non-positive or non-finite scale factor.
    pub fn is_invalid_scale_factor(&self) -> bool {
        matches!(self, Error::Transform(TransformError::InvalidScaleFactor(_)))
    }

    /// `true` when the output dimensions exceed the supported size.
    pub fn is_dimension_overflow(&self) -> bool {
        matches!(self, Error::Transform(TransformError::DimensionOverflow { .. }))
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Io(e) => Error::Io(e),
            IoError::Format(e) => Error::Format(e),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
