//! PixelGrid - the decoded image container
//!
//! A `PixelGrid` owns a `width` x `height` array of [`Rgb`] values.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a single contiguous buffer
//! - Row 0 is the top scan line, whatever order the file stored rows in
//! - Either dimension may be zero; such a grid holds no pixels
//!
//! # Size limit
//!
//! Every grid must be serializable as an uncompressed 24-bit BMP, whose
//! file-size field is 32 bits wide. Constructors reject anything larger with
//! [`Error::DimensionOverflow`], so later stages never need to.

mod access;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Size of a serialized BMP header (file header + info header).
pub const BMP_HEADER_LEN: u64 = 54;

/// Bytes per serialized pixel.
pub const BYTES_PER_PIXEL: u64 = 3;

/// Largest pixel count whose 24-bit serialization fits a 32-bit file size.
pub const MAX_PIXELS: u64 = (u32::MAX as u64 - BMP_HEADER_LEN) / BYTES_PER_PIXEL;

/// Check that a `width` x `height` grid can be allocated and serialized.
///
/// Takes `u64` so callers can validate computed dimensions before
/// narrowing them.
///
/// # Errors
///
/// Returns [`Error::DimensionOverflow`] if either side exceeds `u32` or the
/// pixel count exceeds [`MAX_PIXELS`] (or the platform's allocation limit).
pub fn check_dimensions(width: u64, height: u64) -> Result<(u32, u32)> {
    let overflow = Error::DimensionOverflow { width, height };
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(overflow);
    };
    let alloc_limit = isize::MAX as u64 / std::mem::size_of::<Rgb>() as u64;
    match width.checked_mul(height) {
        Some(n) if n <= MAX_PIXELS && n <= alloc_limit => Ok((w, h)),
        _ => Err(overflow),
    }
}

/// Decoded image: a rectangular array of RGB pixels.
///
/// # Examples
///
/// ```
/// use bmpscale_core::{PixelGrid, Rgb};
///
/// let grid = PixelGrid::from_rows(vec![
///     vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
///     vec![Rgb::new(0, 0, 255), Rgb::WHITE],
/// ])
/// .unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.row(1)[0], Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a black grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if the grid is too large.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create a grid with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        check_dimensions(u64::from(width), u64::from(height))?;
        let len = width as usize * height as usize;
        Ok(PixelGrid {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Build a grid from a sequence of rows, top row first.
    ///
    /// The width is taken from the first row; an empty `rows` gives a 0x0
    /// grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowLengthMismatch`] if any row differs in length from
    /// the first, or [`Error::DimensionOverflow`] if the grid is too large.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RowLengthMismatch {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        let (width, height) = check_dimensions(width as u64, rows.len() as u64)?;
        let data = rows.into_iter().flatten().collect();
        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        check_dimensions(u64::from(width), u64::from(height))?;
        let expected = u64::from(width) * u64::from(height);
        if data.len() as u64 != expected {
            return Err(Error::DataLengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels, row-major, top row first.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Consume the grid, returning its row-major pixel buffer.
    pub fn into_raw(self) -> Vec<Rgb> {
        self.data
    }

    /// Number of bytes the pixels occupy in 24-bit serialized form.
    #[inline]
    pub fn data_len(&self) -> u64 {
        self.data.len() as u64 * BYTES_PER_PIXEL
    }

    /// Get row `y`, where row 0 is the top scan line.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterate over rows from top to bottom.
    ///
    /// Yields `height` slices even when `width` is zero.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Rgb]> + ExactSizeIterator + '_ {
        (0..self.height).map(move |y| self.row(y))
    }
}
