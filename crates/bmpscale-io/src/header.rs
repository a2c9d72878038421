//! BMP header reading and writing
//!
//! The codec uses a fixed 54-byte header: a 14-byte file header followed by
//! a 40-byte `BITMAPINFOHEADER`. All multi-byte fields are little-endian.
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 2 | signature `BM` |
//! | 2 | 4 | file size |
//! | 6 | 4 | reserved |
//! | 10 | 4 | pixel data offset |
//! | 14 | 4 | info header size |
//! | 18 | 4 | width |
//! | 22 | 4 | height |
//! | 26 | 2 | color planes |
//! | 28 | 2 | bits per pixel |
//! | 30 | 4 | compression |
//! | 34 | 20 | image size, resolution, palette counts |

use crate::error::{FormatError, FormatResult};
use bmpscale_core::PixelGrid;

/// Total header length; pixel data starts here.
pub const HEADER_LEN: usize = 54;

/// BMP file signature
pub const SIGNATURE: &[u8; 2] = b"BM";

/// `BITMAPINFOHEADER` size
const INFO_HEADER_LEN: u32 = 40;

/// Bit depth written by the encoder
const BITS_PER_PIXEL: u16 = 24;

/// Header fields the codec reads or writes.
///
/// Only the signature, width and height drive decoding. The remaining
/// fields are kept for diagnostics and so the encoder has a single place to
/// build its canonical header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// Declared total file size in bytes
    pub file_size: u32,
    /// Offset of the first pixel byte
    pub pixel_offset: u32,
    /// Info header size (40 for `BITMAPINFOHEADER`)
    pub info_size: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color planes
    pub planes: u16,
    /// Bits per pixel
    pub bits_per_pixel: u16,
    /// Compression method (0 = none)
    pub compression: u32,
}

impl BmpHeader {
    /// Parse the header at the start of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TruncatedHeader`] if `data` is shorter than
    /// [`HEADER_LEN`], or [`FormatError::BadSignature`] if it does not start
    /// with `BM`.
    pub fn parse(data: &[u8]) -> FormatResult<Self> {
        let h: &[u8; HEADER_LEN] = data.first_chunk().ok_or(FormatError::TruncatedHeader {
            expected: HEADER_LEN,
            actual: data.len(),
        })?;

        if &h[0..2] != SIGNATURE {
            return Err(FormatError::BadSignature {
                found: [h[0], h[1]],
            });
        }

        Ok(BmpHeader {
            file_size: read_u32(h, 2),
            pixel_offset: read_u32(h, 10),
            info_size: read_u32(h, 14),
            width: read_u32(h, 18),
            height: read_u32(h, 22),
            planes: read_u16(h, 26),
            bits_per_pixel: read_u16(h, 28),
            compression: read_u32(h, 30),
        })
    }

    /// The header the encoder emits for `grid`.
    pub fn for_grid(grid: &PixelGrid) -> Self {
        // PixelGrid caps its pixel count so this sum fits in 32 bits.
        let file_size = (HEADER_LEN as u64 + grid.data_len()) as u32;
        BmpHeader {
            file_size,
            pixel_offset: HEADER_LEN as u32,
            info_size: INFO_HEADER_LEN,
            width: grid.width(),
            height: grid.height(),
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
        }
    }

    /// `true` if this header describes the uncompressed 24-bit layout the
    /// codec actually reads.
    pub fn is_plain_rgb24(&self) -> bool {
        self.bits_per_pixel == BITS_PER_PIXEL && self.compression == 0
    }

    /// Serialize to the 54-byte on-disk form.
    ///
    /// Bytes 34..54 (image size, resolution, palette counts) are zero.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut h = [0u8; HEADER_LEN];
        h[0..2].copy_from_slice(SIGNATURE);
        h[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10 reserved
        h[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        h[14..18].copy_from_slice(&self.info_size.to_le_bytes());
        h[18..22].copy_from_slice(&self.width.to_le_bytes());
        h[22..26].copy_from_slice(&self.height.to_le_bytes());
        h[26..28].copy_from_slice(&self.planes.to_le_bytes());
        h[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        h[30..34].copy_from_slice(&self.compression.to_le_bytes());
        h
    }
}

#[inline]
fn read_u32(h: &[u8; HEADER_LEN], offset: usize) -> u32 {
    u32::from_le_bytes([h[offset], h[offset + 1], h[offset + 2], h[offset + 3]])
}

#[inline]
fn read_u16(h: &[u8; HEADER_LEN], offset: usize) -> u16 {
    u16::from_le_bytes([h[offset], h[offset + 1]])
}
