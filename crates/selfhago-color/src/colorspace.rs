//! Color space conversion
//!
//! Provides conversion between the color spaces the kernels work in:
//! - RGB <-> HSV (hue as a turn fraction in [0, 1))
//! - RGB <-> XYZ (sRGB primaries, D65 illuminant)
//! - XYZ <-> LAB (CIE L*a*b*)
//!
//! All RGB values are `f32` in [0, 1]; out-of-range inputs are not
//! rejected but conversions only guarantee round-trips for valid
//! colors.
//!
//! # See also
//!
//! Metal shader helpers: `rgb2hsv()` / `hsv2rgb()` declared in
//! `ShaderHelper.h`; the Lab palette path of the `LabAdjustment`
//! kernel converts picked colors with the same sRGB D65 pipeline.

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0) (1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// CIE L*a*b* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to another Lab color.
    #[inline]
    pub fn distance(&self, other: &Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// CIE XYZ color representation (D65 illuminant)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

// D65 reference white
const XN: f32 = 0.95047;
const YN: f32 = 1.0;
const ZN: f32 = 1.08883;

// CIE standard: epsilon = 216/24389, kappa = 24389/27
const LAB_EPSILON: f32 = 216.0 / 24389.0;
const LAB_KAPPA: f32 = 24389.0 / 27.0;

/// Convert RGB values to HSV.
///
/// Returns HSV with hue in [0.0, 1.0) and saturation/value in [0.0, 1.0].
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    if delta <= 0.0 || max <= 0.0 {
        return Hsv::new(0.0, if max > 0.0 { delta / max } else { 0.0 }, v);
    }
    let s = delta / max;

    let h_sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = h_sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h = 0.0;
    }

    Hsv::new(h, s, v)
}

/// Convert HSV values to RGB.
///
/// Input hue is interpreted modulo 1.0.
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let Hsv { h, s, v } = hsv;

    if s <= 0.0 {
        return (v, v, v);
    }

    let h = (h - h.floor()) * 6.0; // [0, 6)
    let sector = h as i32;
    let f = h - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert sRGB to linear light.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert linear light to sRGB.
#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert RGB to CIE XYZ (D65 illuminant, sRGB color space).
pub fn rgb_to_xyz(r: f32, g: f32, b: f32) -> Xyz {
    let rl = srgb_to_linear(r);
    let gl = srgb_to_linear(g);
    let bl = srgb_to_linear(b);

    Xyz::new(
        0.4124564 * rl + 0.3575761 * gl + 0.1804375 * bl,
        0.2126729 * rl + 0.7151522 * gl + 0.0721750 * bl,
        0.0193339 * rl + 0.1191920 * gl + 0.9503041 * bl,
    )
}

/// Convert CIE XYZ to RGB (D65 illuminant, sRGB color space).
pub fn xyz_to_rgb(xyz: Xyz) -> (f32, f32, f32) {
    let rl = 3.2404542 * xyz.x - 1.5371385 * xyz.y - 0.4985314 * xyz.z;
    let gl = -0.9692660 * xyz.x + 1.8760108 * xyz.y + 0.0415560 * xyz.z;
    let bl = 0.0556434 * xyz.x - 0.2040259 * xyz.y + 1.0572252 * xyz.z;

    (linear_to_srgb(rl), linear_to_srgb(gl), linear_to_srgb(bl))
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / LAB_KAPPA
    }
}

/// Convert CIE XYZ to CIE L*a*b*.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / XN);
    let fy = lab_f(xyz.y / YN);
    let fz = lab_f(xyz.z / ZN);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert CIE L*a*b* to CIE XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz::new(XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz))
}

/// Convert RGB to CIE L*a*b*.
pub fn rgb_to_lab(r: f32, g: f32, b: f32) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Convert CIE L*a*b* to RGB.
///
/// Output channels are clamped to [0, 1]; Lab colors outside the sRGB
/// gamut land on the gamut boundary.
pub fn lab_to_rgb(lab: Lab) -> (f32, f32, f32) {
    let (r, g, b) = xyz_to_rgb(lab_to_xyz(lab));
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_pure_red() {
        let hsv = rgb_to_hsv(1.0, 0.0, 0.0);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_pure_green() {
        let hsv = rgb_to_hsv(0.0, 1.0, 0.0);
        assert!((hsv.h - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_pure_blue() {
        let hsv = rgb_to_hsv(0.0, 0.0, 1.0);
        assert!((hsv.h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hsv_gray_has_no_hue() {
        let hsv = rgb_to_hsv(0.5, 0.5, 0.5);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 0.5);
    }

    #[test]
    fn test_hsv_roundtrip() {
        let colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (0.5, 0.25, 0.125),
            (0.9, 0.1, 0.4),
        ];
        for (r, g, b) in colors {
            let hsv = rgb_to_hsv(r, g, b);
            let (rr, rg, rb) = hsv_to_rgb(hsv);
            assert!(
                (rr - r).abs() < 1e-5 && (rg - g).abs() < 1e-5 && (rb - b).abs() < 1e-5,
                "roundtrip failed for ({r},{g},{b}): got ({rr},{rg},{rb})"
            );
        }
    }

    #[test]
    fn test_hsv_hue_wraps() {
        let (r, g, b) = hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0));
        let (r0, g0, b0) = hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0));
        assert!((r - r0).abs() < 1e-6);
        assert!((g - g0).abs() < 1e-6);
        assert!((b - b0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_lab_white() {
        let lab = rgb_to_lab(1.0, 1.0, 1.0);
        assert!((lab.l - 100.0).abs() < 0.01);
        assert!(lab.a.abs() < 0.01);
        assert!(lab.b.abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_lab_black() {
        let lab = rgb_to_lab(0.0, 0.0, 0.0);
        assert!(lab.l.abs() < 1e-4);
    }

    #[test]
    fn test_lab_red_is_reddish() {
        // Positive a* = red side, positive b* = yellow side
        let lab = rgb_to_lab(1.0, 0.0, 0.0);
        assert!(lab.a > 50.0);
        assert!(lab.b > 0.0);
    }

    #[test]
    fn test_lab_roundtrip() {
        let colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.25, 0.125),
            (0.1, 0.9, 0.7),
            (1.0, 1.0, 1.0),
        ];
        for (r, g, b) in colors {
            let lab = rgb_to_lab(r, g, b);
            let (rr, rg, rb) = lab_to_rgb(lab);
            assert!(
                (rr - r).abs() < 1e-3 && (rg - g).abs() < 1e-3 && (rb - b).abs() < 1e-3,
                "roundtrip failed for ({r},{g},{b}): got ({rr},{rg},{rb})"
            );
        }
    }

    #[test]
    fn test_lab_distance() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(50.0, 3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_xyz_white_point() {
        let xyz = rgb_to_xyz(1.0, 1.0, 1.0);
        assert!((xyz.x - XN).abs() < 1e-3);
        assert!((xyz.y - YN).abs() < 1e-3);
        assert!((xyz.z - ZN).abs() < 1e-3);
    }
}
