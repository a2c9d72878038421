//! Image scaling by sampling
//!
//! Output pixel `(x, y)` copies source pixel
//! `(floor(x / factor), floor(y / factor))`. No blending is done, so an
//! upscaled image contains only colors from the source, and a downscaled
//! one simply drops rows and columns.
//!
//! Output dimensions are `floor(width * factor)` by `floor(height * factor)`.

use crate::{TransformError, TransformResult};
use bmpscale_core::{PixelGrid, check_dimensions};

/// A validated scale factor: finite and strictly positive.
///
/// # Examples
///
/// ```
/// use bmpscale_transform::ScaleFactor;
///
/// assert!(ScaleFactor::new(2.0).is_ok());
/// assert!(ScaleFactor::new(0.0).is_err());
/// assert!(ScaleFactor::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Validate a raw factor.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidScaleFactor`] if `factor` is zero,
    /// negative, NaN or infinite.
    pub fn new(factor: f64) -> TransformResult<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(ScaleFactor(factor))
        } else {
            Err(TransformError::InvalidScaleFactor(factor))
        }
    }

    /// The raw factor.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Scale one dimension, rounding down.
    #[inline]
    fn apply(self, len: u32) -> u64 {
        // float-to-int `as` saturates, so huge products become u64::MAX
        (f64::from(len) * self.0).floor() as u64
    }

    /// Source index sampled for output index `i`, clamped to `len - 1`.
    ///
    /// The clamp only matters when floating-point rounding pushes
    /// `i / factor` up to `len`.
    #[inline]
    fn source_index(self, i: u32, len: u32) -> usize {
        ((f64::from(i) / self.0) as u32).min(len - 1) as usize
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = TransformError;

    fn try_from(factor: f64) -> TransformResult<Self> {
        ScaleFactor::new(factor)
    }
}

/// Output dimensions for scaling a `width` x `height` grid by `factor`.
///
/// # Errors
///
/// Returns [`TransformError::DimensionOverflow`] if the result cannot be
/// held in a [`PixelGrid`]. Nothing is allocated before this check.
pub fn scaled_dimensions(
    width: u32,
    height: u32,
    factor: ScaleFactor,
) -> TransformResult<(u32, u32)> {
    let (w, h) = (factor.apply(width), factor.apply(height));
    check_dimensions(w, h).map_err(|_| TransformError::DimensionOverflow {
        width: w,
        height: h,
    })
}

/// Scale an image using nearest-neighbor sampling.
///
/// A factor of 1.0 returns an identical grid. If either output dimension
/// rounds down to zero the result is an empty grid of that size.
///
/// # Errors
///
/// Returns [`TransformError::DimensionOverflow`] if the output is too large.
pub fn scale_by_sampling(pix: &PixelGrid, factor: ScaleFactor) -> TransformResult<PixelGrid> {
    let (w, h) = (pix.width(), pix.height());
    let (wd, hd) = scaled_dimensions(w, h, factor)?;
    log::debug!(
        "scale_by_sampling {}x{} -> {}x{} (factor {})",
        w,
        h,
        wd,
        hd,
        factor.get()
    );

    if wd == 0 || hd == 0 {
        return Ok(PixelGrid::new(wd, hd)?);
    }

    // Column lookup is the same for every row
    let src_cols: Vec<usize> = (0..wd).map(|x| factor.source_index(x, w)).collect();

    let mut data = Vec::with_capacity(wd as usize * hd as usize);
    for y in 0..hd {
        let src_row = pix.row(factor.source_index(y, h) as u32);
        data.extend(src_cols.iter().map(|&sx| src_row[sx]));
    }

    Ok(PixelGrid::from_raw(wd, hd, data)?)
}

/// Scale an image by a raw factor.
///
/// Convenience wrapper that validates `factor` before calling
/// [`scale_by_sampling`].
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] for a non-positive or
/// non-finite factor, or [`TransformError::DimensionOverflow`] if the output
/// is too large.
pub fn scale(pix: &PixelGrid, factor: f64) -> TransformResult<PixelGrid> {
    scale_by_sampling(pix, ScaleFactor::new(factor)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpscale_core::Rgb;

    fn gradient(w: u32, h: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                grid.set(x, y, Rgb::new(x as u8, y as u8, 0)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_invalid_factors() {
        let grid = gradient(2, 2);
        for f in [0.0, -0.0, -1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(scale(&grid, f), Err(TransformError::InvalidScaleFactor(_))),
                "factor {f} accepted"
            );
        }
    }

    #[test]
    fn test_identity() {
        let grid = gradient(5, 3);
        assert_eq!(scale(&grid, 1.0).unwrap(), grid);
    }

    #[test]
    fn test_upscale_2x_blocks() {
        let grid = gradient(2, 2);
        let up = scale(&grid, 2.0).unwrap();
        assert_eq!((up.width(), up.height()), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(up.get(x, y), grid.get(x / 2, y / 2));
            }
        }
    }

    #[test]
    fn test_downscale_drops_pixels() {
        let grid = gradient(4, 4);
        let down = scale(&grid, 0.5).unwrap();
        assert_eq!((down.width(), down.height()), (2, 2));
        assert_eq!(down.get(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(down.get(1, 0), Some(Rgb::new(2, 0, 0)));
        assert_eq!(down.get(1, 1), Some(Rgb::new(2, 2, 0)));
    }

    #[test]
    fn test_floor_mapping_fractional() {
        // width 3 * 1.5 = 4.5 -> 4; source columns floor(x / 1.5) = 0, 0, 1, 2
        let grid = gradient(3, 1);
        let up = scale(&grid, 1.5).unwrap();
        assert_eq!((up.width(), up.height()), (4, 1));
        let cols: Vec<u8> = up.row(0).iter().map(|p| p.r).collect();
        assert_eq!(cols, vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_tiny_factor_gives_empty_grid() {
        let grid = gradient(3, 7);
        let out = scale(&grid, 0.2).unwrap();
        assert_eq!((out.width(), out.height()), (0, 1));
        assert!(out.is_empty());

        let out = scale(&grid, 1e-9).unwrap();
        assert_eq!((out.width(), out.height()), (0, 0));
    }

    #[test]
    fn test_empty_source() {
        let grid = PixelGrid::new(0, 5).unwrap();
        let out = scale(&grid, 3.0).unwrap();
        assert_eq!((out.width(), out.height()), (0, 15));
    }

    #[test]
    fn test_dimension_overflow() {
        let grid = gradient(2, 2);
        assert!(matches!(
            scale(&grid, 1e12),
            Err(TransformError::DimensionOverflow { .. })
        ));
        assert!(matches!(
            scaled_dimensions(70_000, 70_000, ScaleFactor::new(1.0).unwrap()),
            Err(TransformError::DimensionOverflow {
                width: 70_000,
                height: 70_000
            })
        ));
    }

    #[test]
    fn test_scaled_dimensions_floor() {
        let f = ScaleFactor::new(0.75).unwrap();
        assert_eq!(scaled_dimensions(5, 4, f).unwrap(), (3, 3));
        let f = ScaleFactor::new(2.5).unwrap();
        assert_eq!(scaled_dimensions(3, 1, f).unwrap(), (7, 2));
    }
}
