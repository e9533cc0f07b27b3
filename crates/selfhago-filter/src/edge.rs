//! Sobel edge detection
//!
//! Convolves the luminance plane with the 3x3 Sobel operators and
//! writes the gradient magnitude as a grayscale pixel carrying the
//! source alpha. The
//! host app layers the result over the photo for its "sketch" look.
//!
//! # See also
//!
//! Original filter: `SobelEdgeDetection.swift`

use crate::{FilterError, FilterResult};
use selfhago_core::{Image, Rgba, Sampler};

/// Parameters for Sobel edge detection.
#[derive(Debug, Clone, Copy)]
pub struct SobelEdgeParams {
    /// Multiplier applied to the gradient magnitude before clamping.
    pub intensity: f32,
}

impl Default for SobelEdgeParams {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Compute the Sobel gradient magnitude at one pixel.
///
/// The result is gray with the source pixel's alpha.
pub fn sobel_edge_kernel(
    src: &Sampler<'_>,
    params: &SobelEdgeParams,
    x: u32,
    y: u32,
) -> Rgba {
    let xi = x as i64;
    let yi = y as i64;
    let alpha = src.fetch(xi, yi).a;

    let mut gx = 0.0_f32;
    let mut gy = 0.0_f32;
    for (j, row) in SOBEL_X.iter().enumerate() {
        for (i, &wx) in row.iter().enumerate() {
            let lum = src.fetch(xi + i as i64 - 1, yi + j as i64 - 1).luminance();
            gx += wx * lum;
            gy += SOBEL_Y[j][i] * lum;
        }
    }

    let magnitude = ((gx * gx + gy * gy).sqrt() * params.intensity).clamp(0.0, 1.0);
    Rgba::gray(magnitude).with_alpha(alpha)
}

/// Run Sobel edge detection over a whole image.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `intensity` is not a
/// finite number.
pub fn sobel_edge(image: &Image, params: &SobelEdgeParams) -> FilterResult<Image> {
    if !params.intensity.is_finite() {
        return Err(FilterError::InvalidParameters(
            "intensity must be finite".to_string(),
        ));
    }

    let src = Sampler::new(image);
    let mut out = image.to_mut();
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_pixel_unchecked(x, y, sobel_edge_kernel(&src, params, x, y));
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_image_has_no_edges() {
        let image = Image::new_with_value(8, 8, Rgba::gray(0.7)).unwrap();
        let result = sobel_edge(&image, &SobelEdgeParams::default()).unwrap();
        for &p in result.data() {
            assert!(p.r < 1e-5, "residual edge response {}", p.r);
        }
    }

    #[test]
    fn test_vertical_step_detected() {
        let image = Image::from_fn(8, 8, |x, _| {
            Rgba::gray(if x < 4 { 0.0 } else { 1.0 })
        })
        .unwrap();
        let result = sobel_edge(&image, &SobelEdgeParams::default()).unwrap();
        // Columns adjacent to the step light up, far columns stay dark
        assert!(result.get_pixel(3, 4).unwrap().r > 0.9);
        assert!(result.get_pixel(4, 4).unwrap().r > 0.9);
        assert_eq!(result.get_pixel(0, 4).unwrap().r, 0.0);
        assert_eq!(result.get_pixel(7, 4).unwrap().r, 0.0);
    }

    #[test]
    fn test_intensity_scales_response() {
        let image = Image::from_fn(8, 8, |x, _| Rgba::gray(x as f32 / 7.0)).unwrap();
        let weak = sobel_edge(&image, &SobelEdgeParams { intensity: 0.1 }).unwrap();
        let strong = sobel_edge(&image, &SobelEdgeParams { intensity: 0.2 }).unwrap();
        let w = weak.get_pixel(4, 4).unwrap().r;
        let s = strong.get_pixel(4, 4).unwrap().r;
        assert!((s - 2.0 * w).abs() < 1e-5);
    }

    #[test]
    fn test_alpha_preserved() {
        let image = Image::new_with_value(4, 4, Rgba::new(0.2, 0.4, 0.6, 0.5)).unwrap();
        let result = sobel_edge(&image, &SobelEdgeParams::default()).unwrap();
        for &p in result.data() {
            assert_eq!(p.a, 0.5);
        }
    }
}
