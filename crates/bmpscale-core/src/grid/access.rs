//! Pixel access functions
//!
//! Bounds-checked getters and setters for individual pixels.

use super::PixelGrid;
use crate::color::Rgb;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Get the pixel at column `x`, row `y`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        let i = self.index(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i] = color;
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
