//! Color-space conversion regression test
//!
//! Checks the RGB/HSV and RGB/Lab conversions against published
//! reference values and verifies whole-image conversion round trips.

use selfhago_color::{image_hsv_to_rgb, image_rgb_to_hsv, rgb_to_hsv, rgb_to_lab};
use selfhago_core::{Image, Rgba};
use selfhago_test::RegParams;

#[test]
fn colorspace_reg_hsv_references() {
    let mut rp = RegParams::new("colorspace_hsv");

    // Primary and secondary colors have well-known hue sectors
    let cases = [
        // (r, g, b) -> (h, s, v), hue in turns
        ((1.0, 0.0, 0.0), (0.0, 1.0, 1.0)),
        ((1.0, 1.0, 0.0), (1.0 / 6.0, 1.0, 1.0)),
        ((0.0, 1.0, 0.0), (2.0 / 6.0, 1.0, 1.0)),
        ((0.0, 1.0, 1.0), (3.0 / 6.0, 1.0, 1.0)),
        ((0.0, 0.0, 1.0), (4.0 / 6.0, 1.0, 1.0)),
        ((1.0, 0.0, 1.0), (5.0 / 6.0, 1.0, 1.0)),
        ((0.5, 0.5, 0.5), (0.0, 0.0, 0.5)),
    ];
    for ((r, g, b), (h, s, v)) in cases {
        let hsv = rgb_to_hsv(r as f32, g as f32, b as f32);
        rp.compare_values(h, hsv.h as f64, 1e-5);
        rp.compare_values(s, hsv.s as f64, 1e-5);
        rp.compare_values(v, hsv.v as f64, 1e-5);
    }

    assert!(rp.cleanup(), "colorspace_hsv regression test failed");
}

#[test]
fn colorspace_reg_lab_references() {
    let mut rp = RegParams::new("colorspace_lab");

    // White and black anchor the L axis
    let white = rgb_to_lab(1.0, 1.0, 1.0);
    rp.compare_values(100.0, white.l as f64, 0.01);
    rp.compare_values(0.0, white.a as f64, 0.01);
    rp.compare_values(0.0, white.b as f64, 0.01);

    let black = rgb_to_lab(0.0, 0.0, 0.0);
    rp.compare_values(0.0, black.l as f64, 0.01);

    // sRGB red: L*a*b* ~ (53.24, 80.09, 67.20)
    let red = rgb_to_lab(1.0, 0.0, 0.0);
    rp.compare_values(53.24, red.l as f64, 0.1);
    rp.compare_values(80.09, red.a as f64, 0.1);
    rp.compare_values(67.20, red.b as f64, 0.1);

    // Neutral grays carry no chrominance
    let gray = rgb_to_lab(0.5, 0.5, 0.5);
    rp.compare_values(0.0, gray.a as f64, 0.01);
    rp.compare_values(0.0, gray.b as f64, 0.01);

    assert!(rp.cleanup(), "colorspace_lab regression test failed");
}

#[test]
fn colorspace_reg_image_roundtrip() {
    let mut rp = RegParams::new("colorspace_roundtrip");

    let image = Image::from_fn(16, 16, |x, y| {
        Rgba::new(
            x as f32 / 15.0,
            y as f32 / 15.0,
            (x + y) as f32 / 30.0,
            0.75,
        )
    })
    .expect("image");

    let hsv = image_rgb_to_hsv(&image).expect("rgb to hsv");
    let back = image_hsv_to_rgb(&hsv).expect("hsv to rgb");
    rp.compare_images(&image, &back, 1e-5);

    // Alpha rides along unchanged
    let mut alpha_kept = true;
    for &p in hsv.data() {
        alpha_kept &= p.a == 0.75;
    }
    rp.compare_bool(alpha_kept, "alpha preserved in HSV plane");

    assert!(rp.cleanup(), "colorspace_roundtrip regression test failed");
}
