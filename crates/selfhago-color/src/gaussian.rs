//! Gaussian weight functions
//!
//! Shared falloff helpers for the weighted filters (bilateral range and
//! spatial terms, Lab palette similarity).
//!
//! # See also
//!
//! Metal shader helpers: `gauss()` and `gauss3()` declared in
//! `ShaderHelper.h`.

/// 1 / sqrt(2π), as defined in the original shader helper.
pub const GAUSS_MULTIPLIER: f32 = 0.398_942_28;

/// Normalized Gaussian evaluated at `x` with standard deviation `sigma`.
///
/// `exp(-x² / (2σ²)) / (σ · sqrt(2π))`
///
/// A non-positive `sigma` yields 0.0 rather than NaN or infinity;
/// callers treat that as "this term contributes nothing".
#[inline]
pub fn gauss(x: f32, sigma: f32) -> f32 {
    if sigma <= 0.0 {
        return 0.0;
    }
    (-(x * x) / (2.0 * sigma * sigma)).exp() * GAUSS_MULTIPLIER / sigma
}

/// [`gauss`] evaluated on the Euclidean norm of a 3-vector.
///
/// Used for joint range-weighting over a 3-channel color difference.
#[inline]
pub fn gauss3(v: [f32; 3], sigma: f32) -> f32 {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    gauss(norm, sigma)
}
