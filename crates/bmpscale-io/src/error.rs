//! I/O error types
//!
//! Malformed input is reported as [`FormatError`], which never involves the
//! operating system. Storage failures are reported as [`IoError::Io`] and
//! are passed through untouched so callers can tell the two apart.

use thiserror::Error;

/// Structural problem in a BMP byte stream.
///
/// Each variant records where decoding stopped and what it expected to find.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer bytes than a complete header
    #[error("truncated BMP header: need {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    /// First two bytes are not `BM`
    #[error("bad BMP signature at offset 0: expected \"BM\", found {found:02x?}")]
    BadSignature { found: [u8; 2] },

    /// Header promises more pixel bytes than the buffer holds
    #[error("truncated pixel data at offset {offset}: need {expected} bytes, got {actual}")]
    TruncatedPixelData {
        offset: usize,
        expected: u64,
        actual: usize,
    },

    /// Header dimensions do not describe a representable grid
    #[error("invalid grid: {0}")]
    Grid(#[from] bmpscale_core::Error),
}

/// Error type for reading and writing BMP files.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not a well-formed 24-bit BMP
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Convenience alias for codec results.
pub type FormatResult<T> = Result<T, FormatError>;

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
