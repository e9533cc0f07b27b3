//! Per-channel weighted remapping ("colorChannel")
//!
//! Each output color channel is a linear combination of the source
//! pixel's (R, G, B, A) components, then clamped. The host uses this
//! to strengthen or weaken individual channels per brightness band.
//!
//! # `ranges` packing
//!
//! `ranges[0]` and `ranges[1]` are the (low, high) clamp bounds applied
//! to every output color channel; `ranges[2]` and `ranges[3]` are
//! reserved and ignored. Output channels are additionally clamped to
//! [0, 1] regardless of the bounds, so no weight combination can
//! produce out-of-display values. Alpha passes through unchanged.
//!
//! # See also
//!
//! CI kernel: `colorChannel()` declared in `ColorChannel.h`

use crate::FilterResult;
use selfhago_core::{Image, Rgba, Sampler};

/// Parameters for the channel remapping filter.
#[derive(Debug, Clone, Copy)]
pub struct ChannelMixParams {
    /// Coefficients producing the output red channel from (R, G, B, A).
    pub red: [f32; 4],
    /// Coefficients producing the output green channel from (R, G, B, A).
    pub green: [f32; 4],
    /// Coefficients producing the output blue channel from (R, G, B, A).
    pub blue: [f32; 4],
    /// Clamp bounds: `[lo, hi, _, _]` (see module docs).
    pub ranges: [f32; 4],
}

impl ChannelMixParams {
    /// The identity remapping: every channel maps to itself, bounds [0, 1].
    pub fn identity() -> Self {
        ChannelMixParams {
            red: [1.0, 0.0, 0.0, 0.0],
            green: [0.0, 1.0, 0.0, 0.0],
            blue: [0.0, 0.0, 1.0, 0.0],
            ranges: [0.0, 1.0, 0.0, 0.0],
        }
    }
}

#[inline]
fn dot4(w: [f32; 4], c: Rgba) -> f32 {
    w[0] * c.r + w[1] * c.g + w[2] * c.b + w[3] * c.a
}

/// Compute one output pixel of the channel remapping filter.
pub fn color_channel_kernel(src: &Sampler<'_>, params: &ChannelMixParams, x: u32, y: u32) -> Rgba {
    let c = src.fetch(x as i64, y as i64);

    // Degenerate bounds (lo > hi) collapse to the lower bound
    let lo = params.ranges[0];
    let hi = params.ranges[1].max(lo);

    let clamp = |v: f32| v.clamp(lo, hi).clamp(0.0, 1.0);

    Rgba::new(
        clamp(dot4(params.red, c)),
        clamp(dot4(params.green, c)),
        clamp(dot4(params.blue, c)),
        c.a,
    )
}

/// Apply the channel remapping filter to a whole image.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if any coefficient or
/// bound is not a finite number.
pub fn color_channel(image: &Image, params: &ChannelMixParams) -> FilterResult<Image> {
    for values in [params.red, params.green, params.blue, params.ranges] {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(crate::FilterError::InvalidParameters(
                "channel weights and ranges must be finite".to_string(),
            ));
        }
    }

    let src = Sampler::new(image);
    let mut out = image.to_mut();
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_pixel_unchecked(x, y, color_channel_kernel(&src, params, x, y));
        }
    }
    Ok(out.into())
}
