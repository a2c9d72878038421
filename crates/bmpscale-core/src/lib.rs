//! bmpscale-core - Basic data structures for bmpscale
//!
//! This crate provides the types shared by every stage of the pipeline:
//!
//! - [`Rgb`] - A 24-bit color value
//! - [`PixelGrid`] - The decoded image container
//! - [`Error`] - Construction and access errors

pub mod color;
pub mod error;
pub mod grid;

pub use color::Rgb;
pub use error::{Error, Result};
pub use grid::{MAX_PIXELS, PixelGrid, check_dimensions};
