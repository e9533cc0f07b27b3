//! Image-level color space conversion
//!
//! Whole-image counterparts of the pixel-level conversions in
//! [`crate::colorspace`]. The HSV representation stores H, S, V in the
//! R, G, B channels of the output image; alpha is carried through
//! unchanged.

use crate::colorspace::{Hsv, hsv_to_rgb, rgb_to_hsv};
use crate::error::ColorResult;
use selfhago_core::{Image, Rgba};

/// Convert an RGB image to its HSV representation.
///
/// H, S and V are stored in the R, G and B channels respectively, each
/// in [0, 1]; alpha passes through.
pub fn image_rgb_to_hsv(image: &Image) -> ColorResult<Image> {
    let out = Image::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel_unchecked(x, y);
        let hsv = rgb_to_hsv(p.r, p.g, p.b);
        Rgba::new(hsv.h, hsv.s, hsv.v, p.a)
    })?;
    Ok(out)
}

/// Convert an HSV-representation image back to RGB.
///
/// Expects an image produced by [`image_rgb_to_hsv`].
pub fn image_hsv_to_rgb(image: &Image) -> ColorResult<Image> {
    let out = Image::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel_unchecked(x, y);
        let (r, g, b) = hsv_to_rgb(Hsv::new(p.r, p.g, p.b));
        Rgba::new(r, g, b, p.a)
    })?;
    Ok(out)
}
