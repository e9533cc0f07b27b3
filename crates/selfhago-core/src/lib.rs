//! Selfhago Core - Image containers and sampling for per-pixel filter kernels
//!
//! This crate provides the fundamental data structures used throughout
//! the selfhago-rs filter library:
//!
//! - [`Rgba`] - Four-component `f32` color in nominal [0, 1]
//! - [`Image`] / [`ImageMut`] - The image container (read / write capability)
//! - [`Sampler`] - Clamped, read-only neighborhood access over one image
//!
//! Kernels in the filter crate are pure functions of samplers,
//! parameters and a destination coordinate; everything stateful lives
//! behind the container types here.

pub mod error;
pub mod image;
pub mod rgba;
pub mod sampler;

pub use error::{Error, Result};
pub use image::{Image, ImageMut};
pub use rgba::{LUMINANCE_VECTOR, Rgba};
pub use sampler::Sampler;
