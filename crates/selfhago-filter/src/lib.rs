//! selfhago-filter - Per-pixel image filter kernels
//!
//! CPU ports of the Core Image Metal kernels used by the Selfhago
//! photo editor:
//!
//! - Selective bilateral smoothing (skin smoothing)
//! - Channel remapping with range clamping
//! - Kuwahara painterly smoothing
//! - Palette-based Lab adjustment
//! - Refraction compositing (glass-over-photo)
//! - Sobel edge detection and gamma tone adjustment
//! - Alpha/threshold utility kernels
//!
//! Every filter exposes two layers: a per-pixel `*_kernel` function
//! mirroring the original kernel body, and an image-level driver that
//! runs it over a whole [`selfhago_core::Image`].

pub mod bilateral;
pub mod channel;
pub mod edge;
pub mod enhance;
mod error;
pub mod kuwahara;
pub mod lab_adjust;
pub mod refract;
pub mod util;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use bilateral::{BilateralParams, bilateral, bilateral_kernel};
pub use channel::{ChannelMixParams, color_channel, color_channel_kernel};
pub use edge::{SobelEdgeParams, sobel_edge, sobel_edge_kernel};
pub use enhance::{gamma_adjust, gamma_adjust_kernel};
pub use kuwahara::{KuwaharaParams, kuwahara, kuwahara_kernel};
pub use lab_adjust::{LabAdjustParams, lab_adjust, lab_adjust_kernel};
pub use refract::{RefractParams, refract, refract_kernel};
pub use util::{make_opaque, make_opaque_kernel, threshold, threshold_kernel};
