//! Selfhago Color - Color-space conversions and shared weight helpers
//!
//! This crate provides the pure-math helpers shared by the filter
//! kernels:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSV, XYZ, LAB
//! - **Gaussian weights** ([`gaussian`]): 1D and 3-vector Gaussian
//!   falloff functions used for spatial, range and palette weighting
//!
//! Everything here is stateless; none of these functions allocate or
//! fail, so they can run inside per-pixel kernels.

pub mod colorspace;
pub mod convert;
pub mod error;
pub mod gaussian;

// Re-export core types
pub use selfhago_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Hsv,
    Lab,
    Xyz,
    // Pixel-level conversions
    hsv_to_rgb,
    lab_to_rgb,
    lab_to_xyz,
    rgb_to_hsv,
    rgb_to_lab,
    rgb_to_xyz,
    xyz_to_lab,
    xyz_to_rgb,
};

// Re-export image-level conversions
pub use convert::{image_hsv_to_rgb, image_rgb_to_hsv};

// Re-export weight helpers
pub use gaussian::{GAUSS_MULTIPLIER, gauss, gauss3};
