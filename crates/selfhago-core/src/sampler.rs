//! Neighborhood sampler
//!
//! A [`Sampler`] is the read capability kernels use to look at image
//! data: clamped integer fetches and clamped bilinear samples at
//! fractional coordinates. Kernels never index an [`Image`] directly,
//! so the same algorithm is indifferent to where the pixels actually
//! live.
//!
//! Out-of-bounds coordinates clamp to the image border (texture
//! edge-clamp behavior).

use crate::image::Image;
use crate::rgba::Rgba;

/// Clamped, read-only color lookups over one image.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    image: &'a Image,
}

impl<'a> Sampler<'a> {
    /// Create a sampler bound to `image`.
    pub fn new(image: &'a Image) -> Self {
        Sampler { image }
    }

    /// Width of the underlying image.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the underlying image.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Dimensions of the underlying image as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Fetch the color at integer coordinates, clamping to the border.
    #[inline]
    pub fn fetch(&self, x: i64, y: i64) -> Rgba {
        let cx = x.clamp(0, self.image.width() as i64 - 1) as u32;
        let cy = y.clamp(0, self.image.height() as i64 - 1) as u32;
        self.image.get_pixel_unchecked(cx, cy)
    }

    /// Sample the color at fractional coordinates with bilinear
    /// interpolation, clamping to the border.
    ///
    /// Integer coordinates address pixel centers: `sample(x, y)` for
    /// integral x, y equals `fetch(x, y)`.
    pub fn sample(&self, x: f32, y: f32) -> Rgba {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let ix = x0 as i64;
        let iy = y0 as i64;

        let c00 = self.fetch(ix, iy);
        let c10 = self.fetch(ix + 1, iy);
        let c01 = self.fetch(ix, iy + 1);
        let c11 = self.fetch(ix + 1, iy + 1);

        let top = c00.lerp(c10, fx);
        let bottom = c01.lerp(c11, fx);
        top.lerp(bottom, fy)
    }
}
