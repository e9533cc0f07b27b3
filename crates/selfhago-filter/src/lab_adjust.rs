//! Palette-driven adjustment in CIE L*a*b* space
//!
//! The host lets the user pick reference colors from the photo; this
//! kernel then shifts lightness per picked color (`l_values`) and
//! applies global green-red / blue-yellow chrominance shifts
//! (`a_value` / `b_value`), with each pixel affected in proportion to
//! its Lab-space similarity to the picked palette.
//!
//! Unlike the sampler-based kernels this one writes into a destination
//! buffer: the host dispatches it with an explicit read texture and
//! write texture.
//!
//! # See also
//!
//! Metal kernel: `LabAdjustment()` in `LabAdjustment.h` (a
//! `texture2d<float, access::read>` / `access::write` compute kernel)

use crate::{FilterError, FilterResult};
use selfhago_color::{Lab, gauss, lab_to_rgb, rgb_to_lab};
use selfhago_core::{Image, ImageMut, Rgba, Sampler};

/// Lab-distance falloff for palette similarity, in L*a*b* units.
///
/// A picked color influences pixels within roughly two falloffs of it.
const PALETTE_SIGMA: f32 = 10.0;

/// Parameters for the Lab adjustment kernel.
///
/// `picked_colors` entries are `[L, a, b, alpha]`, mirroring the
/// `float4` palette the host uploads after converting picked RGB
/// colors to Lab. The palette and `l_values` may have extra capacity;
/// `number_of_colors` is the authoritative bound and reads never go
/// past it.
#[derive(Debug, Clone)]
pub struct LabAdjustParams {
    /// Per-palette-color lightness adjustment, in L* units.
    pub l_values: Vec<f32>,
    /// Global green-red chrominance shift, in a* units.
    pub a_value: f32,
    /// Global blue-yellow chrominance shift, in b* units.
    pub b_value: f32,
    /// Number of valid palette entries.
    pub number_of_colors: usize,
    /// Reference palette in Lab space, `[L, a, b, alpha]` per entry.
    pub picked_colors: Vec<[f32; 4]>,
}

impl LabAdjustParams {
    /// Build parameters from an RGB palette, converting to Lab the way
    /// the host does before upload.
    ///
    /// `number_of_colors` is set to the palette length.
    pub fn from_rgb_palette(
        palette: &[Rgba],
        l_values: Vec<f32>,
        a_value: f32,
        b_value: f32,
    ) -> Self {
        let picked_colors = palette
            .iter()
            .map(|c| {
                let lab = rgb_to_lab(c.r, c.g, c.b);
                [lab.l, lab.a, lab.b, c.a]
            })
            .collect::<Vec<_>>();
        LabAdjustParams {
            l_values,
            a_value,
            b_value,
            number_of_colors: picked_colors.len(),
            picked_colors,
        }
    }

    /// Number of palette entries that may actually be read.
    fn bounded_len(&self) -> usize {
        self.number_of_colors
            .min(self.picked_colors.len())
            .min(self.l_values.len())
    }
}

/// Compute one adjusted pixel.
///
/// The pixel is converted to Lab, weighted against each palette entry
/// with a Gaussian over Lab distance, adjusted, and converted back.
/// Zero total weight (no palette, or the pixel is far from every
/// picked color) leaves the pixel unmodified.
pub fn lab_adjust_kernel(src: &Sampler<'_>, params: &LabAdjustParams, x: u32, y: u32) -> Rgba {
    let c = src.fetch(x as i64, y as i64);
    let n = params.bounded_len();
    if n == 0 {
        return c;
    }

    let lab = rgb_to_lab(c.r, c.g, c.b);

    // Similarity normalized so an exact palette match has weight 1
    let peak = gauss(0.0, PALETTE_SIGMA);
    let mut weight_sum = 0.0f32;
    let mut l_shift_sum = 0.0f32;
    for i in 0..n {
        let p = params.picked_colors[i];
        let picked = Lab::new(p[0], p[1], p[2]);
        let weight = gauss(lab.distance(&picked), PALETTE_SIGMA) / peak;
        weight_sum += weight;
        l_shift_sum += weight * params.l_values[i];
    }

    if weight_sum <= f32::EPSILON {
        return c;
    }

    // Normalized blend of per-color lightness shifts; the global
    // chrominance shifts are scaled by how strongly the pixel matches
    // the palette at all.
    let influence = weight_sum.min(1.0);
    let adjusted = Lab::new(
        (lab.l + influence * (l_shift_sum / weight_sum)).clamp(0.0, 100.0),
        lab.a + influence * params.a_value,
        lab.b + influence * params.b_value,
    );

    let (r, g, b) = lab_to_rgb(adjusted);
    Rgba::new(r, g, b, c.a)
}

/// Apply the Lab adjustment to a whole image, writing into `dst`.
///
/// # Errors
///
/// Returns `FilterError::DimensionMismatch` if `dst` does not have the
/// source dimensions, and `FilterError::InvalidParameters` for
/// non-finite adjustment values.
pub fn lab_adjust(src: &Image, dst: &mut ImageMut, params: &LabAdjustParams) -> FilterResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(FilterError::DimensionMismatch {
            expected: src.dimensions(),
            actual: dst.dimensions(),
        });
    }
    if !params.a_value.is_finite()
        || !params.b_value.is_finite()
        || params.l_values.iter().any(|v| !v.is_finite())
    {
        return Err(FilterError::InvalidParameters(
            "adjustment values must be finite".to_string(),
        ));
    }

    let sampler = Sampler::new(src);
    for y in 0..src.height() {
        for x in 0..src.width() {
            dst.set_pixel_unchecked(x, y, lab_adjust_kernel(&sampler, params, x, y));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &Image, params: &LabAdjustParams) -> Image {
        let mut dst = ImageMut::new(src.width(), src.height()).unwrap();
        lab_adjust(src, &mut dst, params).unwrap();
        dst.into()
    }

    #[test]
    fn test_empty_palette_is_identity() {
        let image = Image::new_with_value(4, 4, Rgba::rgb(0.6, 0.3, 0.2)).unwrap();
        let params = LabAdjustParams::from_rgb_palette(&[], vec![], 5.0, 5.0);
        let result = run(&image, &params);
        assert_eq!(result.data(), image.data());
    }

    #[test]
    fn test_matching_color_gets_brightened() {
        let color = Rgba::rgb(0.6, 0.3, 0.2);
        let image = Image::new_with_value(4, 4, color).unwrap();
        let params = LabAdjustParams::from_rgb_palette(&[color], vec![20.0], 0.0, 0.0);
        let result = run(&image, &params);

        let before = rgb_to_lab(color.r, color.g, color.b);
        let out = result.get_pixel(0, 0).unwrap();
        let after = rgb_to_lab(out.r, out.g, out.b);
        assert!(after.l > before.l + 1.0);
    }

    #[test]
    fn test_distant_color_unaffected() {
        // Palette is deep red; a blue pixel is far away in Lab space
        let image = Image::new_with_value(2, 2, Rgba::rgb(0.0, 0.1, 0.9)).unwrap();
        let params =
            LabAdjustParams::from_rgb_palette(&[Rgba::rgb(0.9, 0.05, 0.05)], vec![50.0], 0.0, 0.0);
        let result = run(&image, &params);
        let before = image.get_pixel(0, 0).unwrap();
        let after = result.get_pixel(0, 0).unwrap();
        assert!(before.distance_rgb(&after) < 0.01);
    }

    #[test]
    fn test_chrominance_shift() {
        let color = Rgba::gray(0.5);
        let image = Image::new_with_value(2, 2, color).unwrap();
        let params = LabAdjustParams::from_rgb_palette(&[color], vec![0.0], 25.0, 0.0);
        let result = run(&image, &params);
        let out = result.get_pixel(0, 0).unwrap();
        let lab = rgb_to_lab(out.r, out.g, out.b);
        // Positive a* pushes toward red
        assert!(lab.a > 5.0);
        assert!(out.r > out.g);
    }

    #[test]
    fn test_palette_reads_bounded_by_count() {
        let color = Rgba::rgb(0.6, 0.3, 0.2);
        let image = Image::new_with_value(4, 4, color).unwrap();

        let mut params = LabAdjustParams::from_rgb_palette(&[color], vec![10.0], 0.0, 0.0);
        let baseline = run(&image, &params);

        // Same palette with sentinel entries past number_of_colors:
        // an exact match with a huge negative shift that must never be read
        let lab = rgb_to_lab(color.r, color.g, color.b);
        params.picked_colors.push([lab.l, lab.a, lab.b, 1.0]);
        params.l_values.push(-100.0);
        assert_eq!(params.number_of_colors, 1);
        let with_sentinel = run(&image, &params);

        assert_eq!(baseline.data(), with_sentinel.data());
    }

    #[test]
    fn test_count_larger_than_palette_is_defensive() {
        let color = Rgba::rgb(0.5, 0.5, 0.5);
        let image = Image::new_with_value(2, 2, color).unwrap();
        let mut params = LabAdjustParams::from_rgb_palette(&[color], vec![10.0], 0.0, 0.0);
        params.number_of_colors = 99; // orchestrator contract violation
        // Must not panic; reads stay within the actual palette
        let _ = run(&image, &params);
    }

    #[test]
    fn test_alpha_preserved() {
        let color = Rgba::new(0.6, 0.3, 0.2, 0.4);
        let image = Image::new_with_value(2, 2, color).unwrap();
        let params = LabAdjustParams::from_rgb_palette(&[color], vec![15.0], 0.0, 0.0);
        let result = run(&image, &params);
        assert_eq!(result.get_pixel(0, 0).unwrap().a, 0.4);
    }

    #[test]
    fn test_dimension_mismatch() {
        let image = Image::new(4, 4).unwrap();
        let mut dst = ImageMut::new(3, 3).unwrap();
        let params = LabAdjustParams::from_rgb_palette(&[], vec![], 0.0, 0.0);
        assert!(lab_adjust(&image, &mut dst, &params).is_err());
    }
}
