//! bmpscale-test - Regression test framework for bmpscale
//!
//! Each regression test creates a [`RegParams`], runs a numbered sequence of
//! checks against it, and asserts on [`RegParams::cleanup`]. Failures are
//! collected rather than panicking, so one run reports every mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use bmpscale_test::{RegParams, quadrant_grid};
//!
//! let mut rp = RegParams::new("scale");
//! let grid = quadrant_grid();
//! rp.compare_values(2.0, grid.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`. In display mode every
//!   grid passed to [`RegParams::write_grid`] is also written as a BMP under
//!   `tests/regout/` for inspection.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use bmpscale_core::{PixelGrid, Rgb};

/// The 2x2 reference image: top row red, green; bottom row blue, white.
pub fn quadrant_grid() -> PixelGrid {
    PixelGrid::from_rows(vec![
        vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
        vec![Rgb::new(0, 0, 255), Rgb::new(255, 255, 255)],
    ])
    .expect("2x2 rows are rectangular")
}

/// A grid where every pixel has a distinct color derived from its position.
///
/// Red holds `x`, green holds `y`, blue holds their sum, each modulo 256.
pub fn gradient_grid(width: u32, height: u32) -> PixelGrid {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| Rgb::new(x as u8, y as u8, (x + y) as u8)))
        .collect();
    PixelGrid::from_raw(width, height, data).expect("data length matches dimensions")
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bmpscale-test is at crates/bmpscale-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
