//! Error types for the test framework

use thiserror::Error;

/// A recorded regression-check failure
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Boolean condition did not hold
    #[error("condition '{label}' failed at index {index}")]
    ConditionFailed { index: usize, label: String },

    /// Image comparison failed
    #[error("image comparison failed at index {index}: {detail}")]
    ImageMismatch { index: usize, detail: String },
}
