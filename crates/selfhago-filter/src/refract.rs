//! Refraction-like compositing of two images
//!
//! Treats a second "refracting" image as a height field (the host
//! builds one from a text mask with `CIHeightFieldFromMask`), bends
//! the sampling coordinate of the primary image by the local surface
//! gradient, and adds a specular lighting term where the surface is
//! steep. The result reads as glass lying on top of the photo.
//!
//! The bending is Snell's-law-inspired rather than physically exact:
//! the offset is proportional to the height gradient, scaled by the
//! lens size and by how strongly the medium refracts.
//!
//! # See also
//!
//! CI kernel: `refract()` declared in `Refract.h`

use crate::{FilterError, FilterResult};
use selfhago_core::{Image, Rgba, Sampler};

/// Parameters for the refraction filter.
#[derive(Debug, Clone, Copy)]
pub struct RefractParams {
    /// Refractive index of the simulated medium. Values <= 1 bend
    /// nothing (air into air).
    pub refractive_index: f32,
    /// Scale of the refraction offset, in pixels per unit gradient.
    pub lens_scale: f32,
    /// Strength of the additive specular term.
    pub lighting_amount: f32,
}

/// Height of the refracting surface at integer coordinates: the
/// luminance of the refracting image.
#[inline]
fn height(refracting: &Sampler<'_>, x: i64, y: i64) -> f32 {
    refracting.fetch(x, y).luminance()
}

/// Compute one composited pixel.
///
/// The surface gradient is a central finite difference of the
/// refracting image's luminance around the destination coordinate.
pub fn refract_kernel(
    image: &Sampler<'_>,
    refracting: &Sampler<'_>,
    params: &RefractParams,
    x: u32,
    y: u32,
) -> Rgba {
    let xi = x as i64;
    let yi = y as i64;

    let gx = (height(refracting, xi + 1, yi) - height(refracting, xi - 1, yi)) * 0.5;
    let gy = (height(refracting, xi, yi + 1) - height(refracting, xi, yi - 1)) * 0.5;

    // Bending factor approaches 1 as the refractive index grows and
    // vanishes at 1 (no optical density difference)
    let bend = if params.refractive_index > 1.0 {
        1.0 - 1.0 / params.refractive_index
    } else {
        0.0
    };

    let offset_x = -gx * params.lens_scale * bend;
    let offset_y = -gy * params.lens_scale * bend;

    let refracted = image.sample(x as f32 + offset_x, y as f32 + offset_y);

    let gradient_magnitude = (gx * gx + gy * gy).sqrt();
    let lighting = params.lighting_amount * gradient_magnitude;

    Rgba::new(
        refracted.r + lighting,
        refracted.g + lighting,
        refracted.b + lighting,
        refracted.a,
    )
    .clamp01()
}

/// Apply the refraction filter to a whole image.
///
/// The refracting image may have different dimensions; it is sampled
/// with border clamping at the destination coordinates.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if any parameter is not a
/// finite number.
pub fn refract(image: &Image, refracting: &Image, params: &RefractParams) -> FilterResult<Image> {
    for (name, value) in [
        ("refractive_index", params.refractive_index),
        ("lens_scale", params.lens_scale),
        ("lighting_amount", params.lighting_amount),
    ] {
        if !value.is_finite() {
            return Err(FilterError::InvalidParameters(format!(
                "{name} must be finite"
            )));
        }
    }

    let src = Sampler::new(image);
    let surface = Sampler::new(refracting);
    let mut out = image.to_mut();
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_pixel_unchecked(x, y, refract_kernel(&src, &surface, params, x, y));
        }
    }
    Ok(out.into())
}
