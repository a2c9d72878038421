//! Upscale pipeline
//!
//! Composes decode, scale and encode for a single image. The pipeline is
//! fail-fast: the first error is returned unchanged and no output is
//! produced.

use crate::pipeline_error::Result;
use bmpscale_io::{decode_bmp, encode_bmp};
use bmpscale_transform::{ScaleFactor, scale_by_sampling};
use std::fs;
use std::path::Path;

/// A reusable pipeline configured with one scale factor.
///
/// # Examples
///
/// ```
/// use bmpscale::{PixelGrid, Rgb, Upscaler};
/// use bmpscale::io::{decode_bmp, encode_bmp};
///
/// let grid = PixelGrid::filled(3, 2, Rgb::new(1, 2, 3)).unwrap();
/// let upscaler = Upscaler::new(2.0).unwrap();
/// let out = decode_bmp(&upscaler.run(&encode_bmp(&grid)).unwrap()).unwrap();
/// assert_eq!((out.width(), out.height()), (6, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Upscaler {
    factor: ScaleFactor,
}

impl Upscaler {
    /// Create a pipeline for `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transform`](crate::Error::Transform) with
    /// `InvalidScaleFactor` if `factor` is not finite and positive.
    pub fn new(factor: f64) -> Result<Self> {
        Ok(Upscaler {
            factor: ScaleFactor::new(factor)?,
        })
    }

    /// Create a pipeline from an already validated factor.
    pub fn with_factor(factor: ScaleFactor) -> Self {
        Upscaler { factor }
    }

    /// The configured scale factor.
    pub fn factor(&self) -> ScaleFactor {
        self.factor
    }

    /// Decode `input`, resample it and encode the result.
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>> {
        let grid = decode_bmp(input)?;
        let scaled = scale_by_sampling(&grid, self.factor)?;
        Ok(encode_bmp(&scaled))
    }

    /// Upscale the BMP at `input` and write the result to `output`.
    ///
    /// `output` is only created once the whole pipeline has succeeded.
    pub fn upscale_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<()> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let data = fs::read(input)?;
        let encoded = self.run(&data)?;
        fs::write(output, &encoded)?;
        log::info!(
            "upscaled {} -> {} ({} bytes, factor {})",
            input.display(),
            output.display(),
            encoded.len(),
            self.factor.get()
        );
        Ok(())
    }
}

/// Upscale an in-memory BMP by `factor`.
///
/// The factor is validated before any decoding work.
pub fn run(input: &[u8], factor: f64) -> Result<Vec<u8>> {
    Upscaler::new(factor)?.run(input)
}

/// Upscale the BMP file at `input` by `factor`, writing to `output`.
///
/// The factor is validated before the input is read, and `output` is left
/// untouched if any step fails.
pub fn upscale_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    factor: f64,
) -> Result<()> {
    Upscaler::new(factor)?.upscale_file(input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use bmpscale_core::{PixelGrid, Rgb};
    use bmpscale_io::FormatError;

    #[test]
    fn test_run_doubles_dimensions() {
        let grid = PixelGrid::filled(3, 2, Rgb::WHITE).unwrap();
        let out = run(&encode_bmp(&grid), 2.0).unwrap();
        assert_eq!(out.len(), 54 + 6 * 4 * 3);
        let back = decode_bmp(&out).unwrap();
        assert_eq!((back.width(), back.height()), (6, 4));
    }

    #[test]
    fn test_factor_checked_before_decode() {
        // Garbage input with a bad factor reports the factor, not the format
        let err = run(b"garbage", -1.5).unwrap_err();
        assert!(err.is_invalid_scale_factor());
        let err = run(b"garbage", 0.0).unwrap_err();
        assert!(err.is_invalid_scale_factor());
    }

    #[test]
    fn test_format_errors_pass_through() {
        let err = run(b"garbage", 2.0).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::TruncatedHeader { actual: 7, .. })
        ));

        let mut bytes = encode_bmp(&PixelGrid::new(2, 2).unwrap());
        bytes[0] = b'X';
        assert!(matches!(
            run(&bytes, 2.0).unwrap_err(),
            Error::Format(FormatError::BadSignature { .. })
        ));
    }

    #[test]
    fn test_zero_width_tall_header_is_cheap() {
        let mut bytes = encode_bmp(&PixelGrid::new(0, 1).unwrap());
        bytes[22..26].copy_from_slice(&u32::MAX.to_le_bytes());
        let out = run(&bytes, 1.0).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_overflow_passes_through() {
        let bytes = encode_bmp(&PixelGrid::new(2, 2).unwrap());
        assert!(run(&bytes, 1e10).unwrap_err().is_dimension_overflow());
    }
}
