//! bmpscale-io - BMP codec for bmpscale
//!
//! Converts between 24-bit BMP bytes and [`PixelGrid`]s.
//!
//! - [`decode_bmp`] / [`encode_bmp`] work on in-memory buffers
//! - [`read_bmp`] / [`write_bmp`] adapt them to `Read` / `Write`
//! - [`read_bmp_file`] / [`write_bmp_file`] add filesystem access
//!
//! Malformed data fails with [`FormatError`]; only the stream and file
//! helpers can produce [`IoError::Io`].

pub mod bmp;
mod error;
pub mod header;

pub use bmp::{decode_bmp, encode_bmp, read_bmp, storage_row, write_bmp};
pub use error::{FormatError, FormatResult, IoError, IoResult};
pub use header::{BmpHeader, HEADER_LEN};

use bmpscale_core::PixelGrid;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// `true` if `data` starts with the BMP signature.
pub fn is_bmp(data: &[u8]) -> bool {
    data.starts_with(header::SIGNATURE)
}

/// Read and decode a BMP file.
pub fn read_bmp_file<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let data = fs::read(path)?;
    Ok(decode_bmp(&data)?)
}

/// Encode a grid and write it to `path`, replacing any existing file.
pub fn write_bmp_file<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> IoResult<()> {
    fs::write(path, encode_bmp(grid))?;
    Ok(())
}

/// Read only the header of a BMP file.
///
/// Pixel data is not read, so this is cheap even for large files.
pub fn read_bmp_header<P: AsRef<Path>>(path: P) -> IoResult<BmpHeader> {
    let file = File::open(path)?;
    let mut data = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut data)?;
    Ok(BmpHeader::parse(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpscale_core::Rgb;

    #[test]
    fn test_is_bmp() {
        assert!(is_bmp(b"BM\x00\x00"));
        assert!(!is_bmp(b"B"));
        assert!(!is_bmp(b"\x89PNG"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.bmp");

        let mut grid = PixelGrid::new(3, 2).unwrap();
        grid.set(2, 1, Rgb::new(9, 8, 7)).unwrap();
        write_bmp_file(&grid, &path).unwrap();

        let header = read_bmp_header(&path).unwrap();
        assert_eq!((header.width, header.height), (3, 2));
        assert_eq!(header.file_size, 54 + 18);
        assert_eq!(read_bmp_file(&path).unwrap(), grid);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bmp_file(dir.path().join("absent.bmp")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.bmp");
        fs::write(&path, b"not a bitmap").unwrap();
        let err = read_bmp_file(&path).unwrap_err();
        assert!(matches!(
            err,
            IoError::Format(FormatError::TruncatedHeader { actual: 12, .. })
        ));
    }
}
