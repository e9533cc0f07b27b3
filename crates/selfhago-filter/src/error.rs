//! Error types for selfhago-filter
//!
//! Per-pixel kernels never fail; they fall back to the unmodified
//! center pixel on degenerate numerics. These errors come from the
//! image-level drivers, which validate parameters and image shapes
//! before looping.

use thiserror::Error;

/// Errors that can occur when driving a filter over an image
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] selfhago_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Source and destination shapes do not match
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
