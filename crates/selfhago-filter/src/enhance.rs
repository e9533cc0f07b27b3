//! Tone adjustment kernels
//!
//! # See also
//!
//! Original filter: `GammaAdjustment.swift`

use crate::{FilterError, FilterResult};
use selfhago_core::{Image, Rgba};

/// Apply a power-law tone curve `c' = c^(1/gamma)` to one pixel.
///
/// `gamma > 1` brightens midtones, `gamma < 1` darkens them. Alpha is
/// not affected.
pub fn gamma_adjust_kernel(color: Rgba, gamma: f32) -> Rgba {
    let exponent = 1.0 / gamma;
    Rgba::new(
        color.r.max(0.0).powf(exponent),
        color.g.max(0.0).powf(exponent),
        color.b.max(0.0).powf(exponent),
        color.a,
    )
}

/// Apply a power-law tone curve to a whole image.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `gamma` is not finite
/// or not positive.
pub fn gamma_adjust(image: &Image, gamma: f32) -> FilterResult<Image> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "gamma must be a positive finite number".to_string(),
        ));
    }
    let mut out = image.to_mut();
    for p in out.data_mut() {
        *p = gamma_adjust_kernel(*p, gamma);
    }
    Ok(out.into())
}
