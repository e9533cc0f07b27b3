//! Selective bilateral filtering (edge- and face-aware smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing
//! filter: each output pixel is a weighted average of its neighborhood
//! where the weight combines a spatial Gaussian (distance from the
//! center) with a range Gaussian (color difference from the center).
//!
//! This variant is *selective*: a reference `face` color and a
//! `minimum_distance` define a selection band, and only pixels inside
//! the band are smoothed. The intended use is skin smoothing — the
//! host passes an average face color and the filter leaves everything
//! else untouched.
//!
//! # See also
//!
//! CI kernel: `bilateral()` declared in `Bilateral.h`

use crate::{FilterError, FilterResult};
use selfhago_color::{gauss, gauss3};
use selfhago_core::{Image, Rgba, Sampler};

/// Parameters for the selective bilateral filter.
///
/// Immutable for the whole invocation.
#[derive(Debug, Clone, Copy)]
pub struct BilateralParams {
    /// Reference color of the region to smooth.
    pub face: Rgba,
    /// Spatial standard deviation (pixels). Non-positive disables
    /// filtering entirely.
    pub sigma_s: f32,
    /// Range standard deviation (color units). Non-positive disables
    /// filtering entirely.
    pub sigma_r: f32,
    /// Maximum RGB distance from `face` for a pixel to participate.
    pub minimum_distance: f32,
}

impl BilateralParams {
    /// Half-width of the spatial window implied by `sigma_s`.
    ///
    /// Two standard deviations in every direction covers ~95% of the
    /// Gaussian mass.
    pub(crate) fn halfwidth(&self) -> i64 {
        (2.0 * self.sigma_s).ceil().max(1.0) as i64
    }
}

/// Compute one output pixel of the selective bilateral filter.
///
/// Fallback policy:
/// - center pixel outside the `face` selection band → returned as-is
/// - `sigma_s` or `sigma_r` non-positive → returned as-is
/// - accumulated weight of zero → returned as-is
pub fn bilateral_kernel(src: &Sampler<'_>, params: &BilateralParams, x: u32, y: u32) -> Rgba {
    let center = src.fetch(x as i64, y as i64);

    if params.sigma_s <= 0.0 || params.sigma_r <= 0.0 {
        return center;
    }
    if center.distance_rgb(&params.face) > params.minimum_distance {
        return center;
    }

    let half = params.halfwidth();
    let mut sum = Rgba::TRANSPARENT;
    let mut weight_sum = 0.0f32;

    for dy in -half..=half {
        for dx in -half..=half {
            let neighbor = src.fetch(x as i64 + dx, y as i64 + dy);

            // Off-band neighbors contribute nothing
            if neighbor.distance_rgb(&params.face) > params.minimum_distance {
                continue;
            }

            let spatial_dist = ((dx * dx + dy * dy) as f32).sqrt();
            let spatial_weight = gauss(spatial_dist, params.sigma_s);
            let range_weight = gauss3(neighbor.diff_rgb(&center), params.sigma_r);
            let weight = spatial_weight * range_weight;

            sum += neighbor * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 {
        (sum / weight_sum).clamp01()
    } else {
        center
    }
}

/// Apply the selective bilateral filter to a whole image.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if any parameter is not a
/// finite number. Non-positive sigmas are legal and give pass-through.
pub fn bilateral(image: &Image, params: &BilateralParams) -> FilterResult<Image> {
    for (name, value) in [
        ("sigma_s", params.sigma_s),
        ("sigma_r", params.sigma_r),
        ("minimum_distance", params.minimum_distance),
    ] {
        if !value.is_finite() {
            return Err(FilterError::InvalidParameters(format!(
                "{name} must be finite"
            )));
        }
    }

    let src = Sampler::new(image);
    let mut out = image.to_mut();
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_pixel_unchecked(x, y, bilateral_kernel(&src, params, x, y));
        }
    }
    Ok(out.into())
}
