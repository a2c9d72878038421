//! bmpscale-transform - Resampling for bmpscale
//!
//! Provides nearest-neighbor scaling of a [`PixelGrid`] by a single factor
//! applied to both axes.
//!
//! [`PixelGrid`]: bmpscale_core::PixelGrid

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ScaleFactor, scale, scale_by_sampling, scaled_dimensions};
