//! RGBA color value type
//!
//! All kernels operate on four-component colors with `f32` components
//! in the nominal range [0, 1]. Intermediate accumulations may leave
//! that range; [`Rgba::clamp01`] restores it before a value is written
//! to a destination image.
//!
//! # See also
//!
//! Metal shaders use `float4` / `half4`; `LUMINANCE_VECTOR` matches the
//! constant in `ShaderHelper.h`.

use half::f16;

/// Rec. 709 luminance coefficients for the R, G and B channels.
///
/// Same values as `LUMINANCE_VECTOR` in the original shader helper.
pub const LUMINANCE_VECTOR: [f32; 3] = [0.2125, 0.7154, 0.0721];

/// A four-component color with `f32` components.
///
/// Components are conceptually in [0, 1] but are not clamped on
/// construction so that weighted sums can be accumulated directly in
/// this type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from all four components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Create an opaque gray color.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Rgba::rgb(v, v, v)
    }

    /// Return this color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Rgba { a, ..self }
    }

    /// Luminance of the RGB components, using [`LUMINANCE_VECTOR`].
    #[inline]
    pub fn luminance(&self) -> f32 {
        LUMINANCE_VECTOR[0] * self.r + LUMINANCE_VECTOR[1] * self.g + LUMINANCE_VECTOR[2] * self.b
    }

    /// Euclidean distance between the RGB components of two colors.
    ///
    /// Alpha does not participate; selection bands (e.g. the bilateral
    /// face band) are defined over color only.
    #[inline]
    pub fn distance_rgb(&self, other: &Rgba) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Component-wise difference of the RGB channels as a 3-vector.
    #[inline]
    pub fn diff_rgb(&self, other: &Rgba) -> [f32; 3] {
        [self.r - other.r, self.g - other.g, self.b - other.b]
    }

    /// Clamp every component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Rgba {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Linear interpolation between two colors, component-wise.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Convert to half precision storage.
    #[inline]
    pub fn to_f16(self) -> [f16; 4] {
        [
            f16::from_f32(self.r),
            f16::from_f32(self.g),
            f16::from_f32(self.b),
            f16::from_f32(self.a),
        ]
    }

    /// Convert from half precision storage.
    #[inline]
    pub fn from_f16(v: [f16; 4]) -> Self {
        Rgba::new(
            v[0].to_f32(),
            v[1].to_f32(),
            v[2].to_f32(),
            v[3].to_f32(),
        )
    }
}

impl std::ops::Add for Rgba {
    type Output = Rgba;

    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl std::ops::AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Rgba) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Rgba {
    type Output = Rgba;

    #[inline]
    fn sub(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl std::ops::Mul<f32> for Rgba {
    type Output = Rgba;

    #[inline]
    fn mul(self, s: f32) -> Rgba {
        Rgba::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

impl std::ops::Div<f32> for Rgba {
    type Output = Rgba;

    #[inline]
    fn div(self, s: f32) -> Rgba {
        Rgba::new(self.r / s, self.g / s, self.b / s, self.a / s)
    }
}
