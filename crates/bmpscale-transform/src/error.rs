//! Error types for bmpscale-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Scale factor is not a finite positive number
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// Output grid would be too large to allocate or serialize
    #[error("scaled dimensions {width}x{height} exceed the supported pixel count")]
    DimensionOverflow { width: u64, height: u64 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bmpscale_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
