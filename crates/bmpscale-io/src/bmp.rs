//! BMP image format support
//!
//! Reads and writes uncompressed 24-bit Windows Bitmap files.
//!
//! # Pixel data
//!
//! Pixel records follow the 54-byte header directly. Each record is three
//! bytes in blue, green, red order. Rows are stored bottom-up: the first
//! record belongs to the bottom scan line. [`storage_row`] is the one place
//! that maps between on-disk and in-memory row order.
//!
//! # Limitations
//!
//! Rows are packed with no 4-byte alignment padding. Files whose width is
//! not a multiple of 4 were written by other encoders with padding and will
//! decode skewed; files written by [`encode_bmp`] always round-trip.
//! Palette, 32-bit, compressed and top-down variants are not supported.

use crate::error::{FormatError, FormatResult, IoResult};
use crate::header::{BmpHeader, HEADER_LEN};
use bmpscale_core::{PixelGrid, Rgb};
use std::io::{Read, Write};

/// Bytes per pixel record
const RECORD_LEN: usize = 3;

/// Map between on-disk and in-memory row indices.
///
/// Row `index` counted from the start of the pixel data is row
/// `height - 1 - index` counted from the top of the image, and vice versa.
/// The mapping is its own inverse, so decode and encode share it.
///
/// `index` must be less than `height`.
#[inline]
pub fn storage_row(index: u32, height: u32) -> u32 {
    debug_assert!(index < height, "row {index} out of range for height {height}");
    height - 1 - index
}

/// Decode a 24-bit BMP from memory.
///
/// # Errors
///
/// Returns a [`FormatError`] if the buffer is shorter than a header, does
/// not start with `BM`, or holds fewer than `width * height * 3` pixel bytes
/// after the header.
pub fn decode_bmp(data: &[u8]) -> FormatResult<PixelGrid> {
    let header = BmpHeader::parse(data)?;
    let (width, height) = (header.width, header.height);

    if !header.is_plain_rgb24() {
        log::warn!(
            "BMP header declares {} bpp, compression {}; reading as uncompressed 24 bpp",
            header.bits_per_pixel,
            header.compression
        );
    }

    let pixel_data = &data[HEADER_LEN..];
    let expected = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|n| n.checked_mul(RECORD_LEN as u64))
        .unwrap_or(u64::MAX);
    if expected > pixel_data.len() as u64 {
        return Err(FormatError::TruncatedPixelData {
            offset: HEADER_LEN,
            expected,
            actual: pixel_data.len(),
        });
    }

    if width == 0 || height == 0 {
        log::debug!("decoded empty {}x{} BMP", width, height);
        return Ok(PixelGrid::new(width, height)?);
    }

    let row_len = width as usize * RECORD_LEN;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let start = storage_row(y, height) as usize * row_len;
        let records = &pixel_data[start..start + row_len];
        pixels.extend(
            records
                .chunks_exact(RECORD_LEN)
                .map(|p| Rgb::from_bgr([p[0], p[1], p[2]])),
        );
    }

    let trailing = pixel_data.len() as u64 - expected;
    if trailing > 0 {
        log::debug!("ignoring {} trailing bytes after pixel data", trailing);
    }
    log::debug!("decoded {}x{} BMP", width, height);

    Ok(PixelGrid::from_raw(width, height, pixels)?)
}

/// Encode a grid as a 24-bit BMP.
///
/// The output is always `54 + width * height * 3` bytes long.
pub fn encode_bmp(grid: &PixelGrid) -> Vec<u8> {
    let header = BmpHeader::for_grid(grid);
    let mut out = Vec::with_capacity(header.file_size as usize);
    out.extend_from_slice(&header.to_bytes());

    let height = grid.height();
    if grid.is_empty() {
        log::debug!("encoded empty {}x{} BMP", grid.width(), height);
        return out;
    }
    for index in 0..height {
        for pixel in grid.row(storage_row(index, height)) {
            out.extend_from_slice(&pixel.to_bgr());
        }
    }

    log::debug!(
        "encoded {}x{} BMP ({} bytes)",
        grid.width(),
        height,
        out.len()
    );
    out
}

/// Read a BMP image from a stream.
///
/// The whole stream is buffered before decoding.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<PixelGrid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(decode_bmp(&data)?)
}

/// Write a BMP image to a stream.
pub fn write_bmp<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    writer.write_all(&encode_bmp(grid))?;
    Ok(())
}
