//! Selfhago - Per-pixel image filter kernels
//!
//! CPU ports of the Core Image Metal kernels behind the Selfhago photo
//! editor's filters.
//!
//! # Overview
//!
//! The library is split into three layers:
//!
//! - Core image model (float RGBA pixels, shared-buffer images,
//!   border-clamping samplers)
//! - Color math (RGB/HSV, sRGB/Lab conversions, Gaussian weights)
//! - Filter kernels (selective bilateral smoothing, channel mixing,
//!   Kuwahara, palette-based Lab adjustment, refraction compositing,
//!   edge detection, tone and alpha utilities)
//!
//! # Example
//!
//! ```
//! use selfhago::{Image, Rgba};
//! use selfhago::filter::{KuwaharaParams, kuwahara};
//!
//! let image = Image::new_with_value(64, 64, Rgba::gray(0.5)).unwrap();
//! let painted = kuwahara(&image, &KuwaharaParams { radius: 3 }).unwrap();
//! assert_eq!(painted.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use selfhago_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use selfhago_color as color;
pub use selfhago_filter as filter;
