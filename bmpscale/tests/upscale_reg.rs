//! Upscale pipeline regression test
//!
//! End-to-end file processing: decode, scale and encode through the
//! filesystem, and error propagation without partial output.

use bmpscale::io::{decode_bmp, encode_bmp, read_bmp_file, write_bmp_file};
use bmpscale::transform::ScaleFactor;
use bmpscale::{Error, PixelGrid, Upscaler, run, upscale_file};
use bmpscale_test::{RegParams, gradient_grid, quadrant_grid};

#[test]
fn upscale_reg() {
    let mut rp = RegParams::new("upscale");
    let dir = tempfile::tempdir().expect("tempdir");

    // --- Test 1: 2x upscale through files ---
    let input = dir.path().join("quad.bmp");
    let output = dir.path().join("upscaled_quad.bmp");
    let quad = quadrant_grid();
    write_bmp_file(&quad, &input).expect("write input");
    upscale_file(&input, &output, 2.0).expect("upscale_file");

    let up = read_bmp_file(&output).expect("read output");
    rp.compare_values(4.0, up.width() as f64, 0.0);
    rp.compare_values(4.0, up.height() as f64, 0.0);
    let mut blocks_ok = true;
    for y in 0..4 {
        for x in 0..4 {
            blocks_ok &= up.get(x, y) == quad.get(x / 2, y / 2);
        }
    }
    rp.compare_values(1.0, blocks_ok as u8 as f64, 0.0);
    rp.write_grid(&up).expect("write display");

    // --- Test 2: in-memory run matches file output ---
    let mem = run(&encode_bmp(&quad), 2.0).expect("run");
    let on_disk = std::fs::read(&output).expect("read bytes");
    rp.compare_strings(&on_disk, &mem);

    // --- Test 3: factor 1.0 reproduces the input bytes ---
    let g = gradient_grid(9, 5);
    let bytes = encode_bmp(&g);
    let same = run(&bytes, 1.0).expect("run 1x");
    rp.compare_strings(&bytes, &same);

    // --- Test 4: reusable pipeline ---
    let upscaler = Upscaler::new(3.0).expect("upscaler");
    let out = decode_bmp(&upscaler.run(&bytes).expect("run 3x")).expect("decode 3x");
    rp.compare_values(27.0, out.width() as f64, 0.0);
    rp.compare_values(15.0, out.height() as f64, 0.0);

    let factor = ScaleFactor::new(3.0).expect("factor");
    let prebuilt = Upscaler::with_factor(factor);
    rp.compare_values(3.0, prebuilt.factor().get(), 0.0);
    rp.compare_values(1.0, (prebuilt == upscaler) as u8 as f64, 0.0);
    let again = prebuilt.run(&bytes).expect("run prebuilt");
    rp.compare_strings(&upscaler.run(&bytes).expect("run 3x again"), &again);

    // --- Test 5: failures leave no output file ---
    let garbage = dir.path().join("garbage.bmp");
    std::fs::write(&garbage, b"BM too short").expect("write garbage");
    let failed = dir.path().join("upscaled_garbage.bmp");
    let err = upscale_file(&garbage, &failed, 2.0).expect_err("garbage accepted");
    rp.compare_values(1.0, matches!(err, Error::Format(_)) as u8 as f64, 0.0);
    rp.compare_values(0.0, failed.exists() as u8 as f64, 0.0);

    let err = upscale_file(&input, &failed, -1.5).expect_err("negative factor accepted");
    rp.compare_values(1.0, err.is_invalid_scale_factor() as u8 as f64, 0.0);
    rp.compare_values(0.0, failed.exists() as u8 as f64, 0.0);

    let err = upscale_file(dir.path().join("missing.bmp"), &failed, 2.0)
        .expect_err("missing file accepted");
    rp.compare_values(1.0, matches!(err, Error::Io(_)) as u8 as f64, 0.0);

    // --- Test 6: shrinking to nothing yields a header-only file ---
    let tiny = run(&encode_bmp(&PixelGrid::new(3, 3).expect("3x3")), 0.2).expect("run 0.2x");
    rp.compare_values(54.0, tiny.len() as f64, 0.0);

    assert!(rp.cleanup(), "upscale regression test failed");
}
