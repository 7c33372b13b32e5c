//! Error types for perimeter estimation.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during perimeter estimation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    /// Too few samples to form a polyline.
    #[error("insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples {
        /// Minimum required sample count.
        required: usize,
        /// Actual sample count provided.
        actual: usize,
    },

    /// Quadrature produced no usable value and the fallback failed too.
    #[error("quadrature failed: {reason}")]
    QuadratureFailed {
        /// Description of the numerical issue.
        reason: String,
    },
}

impl MeasureError {
    /// Create an insufficient-samples error.
    #[must_use]
    pub const fn insufficient_samples(required: usize, actual: usize) -> Self {
        Self::InsufficientSamples { required, actual }
    }

    /// Create a quadrature-failure error.
    #[must_use]
    pub fn quadrature_failed(reason: impl Into<String>) -> Self {
        Self::QuadratureFailed {
            reason: reason.into(),
        }
    }
}
