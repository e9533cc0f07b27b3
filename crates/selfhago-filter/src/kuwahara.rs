//! Kuwahara filtering (painterly edge-preserving smoothing)
//!
//! The Kuwahara filter partitions the square neighborhood of each
//! pixel into four overlapping quadrants (all containing the center),
//! computes the mean and variance of each quadrant, and outputs the
//! mean color of the quadrant with the lowest variance. Flat regions
//! get averaged while edges stay sharp, giving the characteristic
//! oil-painting look.
//!
//! The original kernel header declares `colorChannel`'s parameter list
//! for this filter; that is a copy-paste slip in the declarations —
//! the wrapper class and the algorithm use a single radius, which is
//! what [`KuwaharaParams`] models.
//!
//! # See also
//!
//! Metal kernel wrapper: `KuwaharaMetal.swift`

use crate::FilterResult;
use selfhago_core::{Image, Rgba, Sampler};

/// Parameters for the Kuwahara filter.
#[derive(Debug, Clone, Copy)]
pub struct KuwaharaParams {
    /// Quadrant radius in pixels. Each quadrant is a
    /// `(radius + 1) x (radius + 1)` window sharing the center pixel.
    /// Radius 0 is pass-through.
    pub radius: u32,
}

/// Mean and variance accumulator for one quadrant.
struct QuadrantStats {
    mean: Rgba,
    variance: f32,
}

/// Gather mean and RGB variance over one quadrant.
///
/// `x_range` and `y_range` are inclusive offsets from the center.
fn quadrant_stats(
    src: &Sampler<'_>,
    cx: i64,
    cy: i64,
    x_range: (i64, i64),
    y_range: (i64, i64),
) -> QuadrantStats {
    let mut sum = Rgba::TRANSPARENT;
    let mut sq_sum = [0.0f32; 3];
    let mut count = 0u32;

    for dy in y_range.0..=y_range.1 {
        for dx in x_range.0..=x_range.1 {
            let c = src.fetch(cx + dx, cy + dy);
            sum += c;
            sq_sum[0] += c.r * c.r;
            sq_sum[1] += c.g * c.g;
            sq_sum[2] += c.b * c.b;
            count += 1;
        }
    }

    let n = count as f32;
    let mean = sum / n;
    // Per-channel variance summed over RGB; alpha does not vote
    let variance = (sq_sum[0] / n - mean.r * mean.r)
        + (sq_sum[1] / n - mean.g * mean.g)
        + (sq_sum[2] / n - mean.b * mean.b);

    QuadrantStats { mean, variance }
}

/// Compute one output pixel of the Kuwahara filter.
///
/// Returns the mean color of the lowest-variance quadrant; with
/// radius 0 this is the center pixel itself.
pub fn kuwahara_kernel(src: &Sampler<'_>, params: &KuwaharaParams, x: u32, y: u32) -> Rgba {
    let cx = x as i64;
    let cy = y as i64;
    if params.radius == 0 {
        return src.fetch(cx, cy);
    }

    let r = params.radius as i64;
    let quadrants = [
        ((-r, 0), (-r, 0)), // top-left
        ((0, r), (-r, 0)),  // top-right
        ((-r, 0), (0, r)),  // bottom-left
        ((0, r), (0, r)),   // bottom-right
    ];

    let mut best = quadrant_stats(src, cx, cy, quadrants[0].0, quadrants[0].1);
    for &(x_range, y_range) in &quadrants[1..] {
        let stats = quadrant_stats(src, cx, cy, x_range, y_range);
        if stats.variance < best.variance {
            best = stats;
        }
    }

    best.mean.clamp01()
}

/// Apply the Kuwahara filter to a whole image.
///
/// Radius 0 returns an unmodified copy, matching the host filter's
/// behavior of skipping the kernel entirely at radius 0.
pub fn kuwahara(image: &Image, params: &KuwaharaParams) -> FilterResult<Image> {
    if params.radius == 0 {
        return Ok(image.clone());
    }

    let src = Sampler::new(image);
    let mut out = image.to_mut();
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_pixel_unchecked(x, y, kuwahara_kernel(&src, params, x, y));
        }
    }
    Ok(out.into())
}
