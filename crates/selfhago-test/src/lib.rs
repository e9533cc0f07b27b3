//! selfhago-test - Regression test framework for the filter kernels
//!
//! This crate provides a small regression harness plus deterministic
//! synthetic image builders. The original shaders were verified by eye
//! against live camera output; here synthetic inputs with known
//! structure (flat fields, ramps, step edges, checkerboards) stand in
//! for them, so every test is reproducible without fixture files.
//!
//! # Usage
//!
//! ```ignore
//! use selfhago_test::{RegParams, step_edge_image};
//!
//! let mut rp = RegParams::new("kuwahara");
//! let input = step_edge_image(20, 20, 10);
//! rp.compare_values(1.0, result as f64, 0.001);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::TestError;
pub use params::RegParams;

use selfhago_core::{Image, Rgba};

/// Create a solid-color test image
pub fn solid_image(width: u32, height: u32, color: Rgba) -> Image {
    Image::new_with_value(width, height, color).expect("nonzero test image dimensions")
}

/// Create a horizontal grayscale ramp, black at the left edge and
/// white at the right edge
pub fn ramp_image(width: u32, height: u32) -> Image {
    let denominator = (width.max(2) - 1) as f32;
    Image::from_fn(width, height, |x, _| Rgba::gray(x as f32 / denominator))
        .expect("nonzero test image dimensions")
}

/// Create a vertical step edge: black for `x < edge_x`, white after
pub fn step_edge_image(width: u32, height: u32, edge_x: u32) -> Image {
    Image::from_fn(width, height, |x, _| {
        if x < edge_x { Rgba::BLACK } else { Rgba::WHITE }
    })
    .expect("nonzero test image dimensions")
}

/// Create a checkerboard of alternating black and white cells
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> Image {
    let cell = cell.max(1);
    Image::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba::BLACK
        } else {
            Rgba::WHITE
        }
    })
    .expect("nonzero test image dimensions")
}

/// Create a deterministic pseudo-noise image around a base gray level
///
/// Uses a hash of the pixel coordinates rather than an RNG, so the
/// same call always produces the same image.
pub fn noise_image(width: u32, height: u32, base: f32, amplitude: f32) -> Image {
    Image::from_fn(width, height, |x, y| {
        let mut h = x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B);
        h ^= h >> 16;
        h = h.wrapping_mul(0x7FEB_352D);
        h ^= h >> 15;
        let unit = (h & 0xFFFF) as f32 / 65535.0;
        Rgba::gray((base + (unit - 0.5) * 2.0 * amplitude).clamp(0.0, 1.0))
    })
    .expect("nonzero test image dimensions")
}

/// Mean absolute per-channel RGB difference between two images
///
/// Returns `f64::INFINITY` if the dimensions differ.
pub fn mean_rgb_difference(image1: &Image, image2: &Image) -> f64 {
    if image1.width() != image2.width() || image1.height() != image2.height() {
        return f64::INFINITY;
    }
    let mut total = 0.0_f64;
    for (p1, p2) in image1.data().iter().zip(image2.data()) {
        total += ((p1.r - p2.r).abs() + (p1.g - p2.g).abs() + (p1.b - p2.b).abs()) as f64;
    }
    total / (image1.data().len() as f64 * 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        let ramp = ramp_image(10, 4);
        assert_eq!(ramp.get_pixel(0, 0).unwrap(), Rgba::gray(0.0));
        assert_eq!(ramp.get_pixel(9, 0).unwrap(), Rgba::gray(1.0));
    }

    #[test]
    fn test_step_edge_sides() {
        let step = step_edge_image(8, 8, 4);
        assert_eq!(step.get_pixel(3, 0).unwrap(), Rgba::BLACK);
        assert_eq!(step.get_pixel(4, 0).unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let board = checkerboard_image(8, 8, 2);
        assert_eq!(board.get_pixel(0, 0).unwrap(), Rgba::BLACK);
        assert_eq!(board.get_pixel(2, 0).unwrap(), Rgba::WHITE);
        assert_eq!(board.get_pixel(2, 2).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_noise_is_deterministic_and_bounded() {
        let a = noise_image(16, 16, 0.5, 0.2);
        let b = noise_image(16, 16, 0.5, 0.2);
        assert_eq!(a.data(), b.data());
        for &p in a.data() {
            assert!((0.3..=0.7).contains(&p.r));
        }
    }

    #[test]
    fn test_mean_rgb_difference() {
        let a = solid_image(4, 4, Rgba::gray(0.2));
        let b = solid_image(4, 4, Rgba::gray(0.5));
        assert!((mean_rgb_difference(&a, &b) - 0.3).abs() < 1e-6);
        let c = solid_image(2, 2, Rgba::gray(0.5));
        assert!(mean_rgb_difference(&a, &c).is_infinite());
    }
}
