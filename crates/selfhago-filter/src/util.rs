//! Small single-pixel utility kernels
//!
//! These have no neighborhood access and exist mostly as plumbing for
//! other filters: `make_opaque` normalizes alpha before compositing
//! and `threshold` produces the binary masks the height-field filters
//! consume.
//!
//! # See also
//!
//! CI kernels: `makeOpaque()` and `threshold()` declared in `UtilityFilter.h`

use crate::{FilterError, FilterResult};
use selfhago_core::{Image, Rgba};

/// Force every pixel fully opaque, leaving color channels untouched.
pub fn make_opaque_kernel(color: Rgba) -> Rgba {
    Rgba::new(color.r, color.g, color.b, 1.0)
}

/// Apply [`make_opaque_kernel`] to a whole image.
pub fn make_opaque(image: &Image) -> Image {
    let mut out = image.to_mut();
    for p in out.data_mut() {
        *p = make_opaque_kernel(*p);
    }
    out.into()
}

/// Binarize one pixel by luminance, keeping the source alpha.
///
/// Pixels whose luminance is below `criterion` become black, all
/// others white. The luminance is rescaled so that pure white sits
/// exactly at 1.0: the components of [`selfhago_core::LUMINANCE_VECTOR`]
/// sum to just under one in `f32`, and without the rescale a white
/// pixel would fall below a criterion of 1.0.
pub fn threshold_kernel(color: Rgba, criterion: f32) -> Rgba {
    let luminance = color.luminance() / Rgba::WHITE.luminance();
    if luminance < criterion {
        Rgba::BLACK.with_alpha(color.a)
    } else {
        Rgba::WHITE.with_alpha(color.a)
    }
}

/// Binarize a whole image by luminance.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if `threshold` is not a
/// finite number.
pub fn threshold(image: &Image, threshold_value: f32) -> FilterResult<Image> {
    if !threshold_value.is_finite() {
        return Err(FilterError::InvalidParameters(
            "threshold must be finite".to_string(),
        ));
    }
    let mut out = image.to_mut();
    for p in out.data_mut() {
        *p = threshold_kernel(*p, threshold_value);
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_opaque_sets_alpha() {
        let image = Image::new_with_value(4, 4, Rgba::new(0.3, 0.6, 0.9, 0.25)).unwrap();
        let result = make_opaque(&image);
        for &p in result.data() {
            assert_eq!(p, Rgba::new(0.3, 0.6, 0.9, 1.0));
        }
    }

    #[test]
    fn test_threshold_splits_on_luminance() {
        let image = Image::from_fn(4, 4, |x, _| Rgba::gray(x as f32 / 3.0)).unwrap();
        let result = threshold(&image, 0.5).unwrap();
        assert_eq!(result.get_pixel(0, 0).unwrap(), Rgba::BLACK);
        assert_eq!(result.get_pixel(1, 0).unwrap(), Rgba::BLACK);
        assert_eq!(result.get_pixel(2, 0).unwrap(), Rgba::WHITE);
        assert_eq!(result.get_pixel(3, 0).unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_threshold_equality_goes_white() {
        let image = Image::new_with_value(2, 2, Rgba::gray(0.5)).unwrap();
        let result = threshold(&image, 0.5).unwrap();
        assert_eq!(result.get_pixel(0, 0).unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_threshold_white_stays_white_at_full_criterion() {
        let image = Image::new_with_value(2, 2, Rgba::WHITE).unwrap();
        let result = threshold(&image, 1.0).unwrap();
        for &p in result.data() {
            assert_eq!(p, Rgba::WHITE);
        }
    }

    #[test]
    fn test_threshold_preserves_alpha() {
        let image = Image::new_with_value(2, 2, Rgba::new(0.9, 0.9, 0.9, 0.25)).unwrap();
        let result = threshold(&image, 0.5).unwrap();
        let p = result.get_pixel(0, 0).unwrap();
        assert_eq!(p, Rgba::WHITE.with_alpha(0.25));
    }

    #[test]
    fn test_threshold_rejects_nan() {
        let image = Image::new(2, 2).unwrap();
        assert!(threshold(&image, f32::NAN).is_err());
    }
}
