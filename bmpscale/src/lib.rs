//! bmpscale - Nearest-neighbor resampling of 24-bit BMP images
//!
//! # Overview
//!
//! The pipeline has three stages, each in its own crate:
//!
//! - Decode: BMP bytes to [`PixelGrid`] ([`io`])
//! - Scale: nearest-neighbor resampling by one factor ([`transform`])
//! - Encode: [`PixelGrid`] back to BMP bytes ([`io`])
//!
//! [`run`] and [`upscale_file`] compose the three.
//!
//! # Example
//!
//! ```
//! use bmpscale::{PixelGrid, Rgb};
//!
//! let grid = PixelGrid::filled(2, 2, Rgb::new(10, 20, 30)).unwrap();
//! let bytes = bmpscale::io::encode_bmp(&grid);
//! let out = bmpscale::run(&bytes, 1.5).unwrap();
//! assert_eq!(out.len(), 54 + 3 * 3 * 3);
//! ```

pub mod pipeline;
mod pipeline_error;

// Re-export core types (primary data structures used everywhere)
pub use bmpscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bmpscale_io as io;
pub use bmpscale_transform as transform;

pub use pipeline_error::{Error, Result};
pub use pipeline::{Upscaler, run, upscale_file};
