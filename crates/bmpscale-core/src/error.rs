//! Error types for bmpscale-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// bmpscale-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row does not have the width of the grid
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Raw pixel buffer length disagrees with the stated dimensions
    #[error("pixel buffer holds {actual} pixels, {width}x{height} requires {expected}")]
    DataLengthMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },

    /// Grid too large to allocate or to serialize as a BMP
    #[error("grid dimensions {width}x{height} exceed the supported pixel count")]
    DimensionOverflow { width: u64, height: u64 },

    /// Coordinates outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
