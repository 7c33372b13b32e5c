//! Error types for spiral analysis.

use thiserror::Error;

/// Errors surfaced by the analysis pipeline.
///
/// All variants wrap an upstream failure; the aggregator itself adds no
/// failure modes of its own.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// The configuration was rejected before any geometry ran.
    #[error("invalid configuration: {0}")]
    Config(#[from] spiral_types::SpiralError),

    /// A perimeter estimator failed.
    #[error("measurement failed: {0}")]
    Measure(#[from] spiral_measure::MeasureError),
}

impl AnalysisError {
    /// Check if this failure originated in configuration validation.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_types::SpiralError;

    #[test]
    fn test_wraps_config_error() {
        let err = AnalysisError::from(SpiralError::not_positive("height", 0.0));
        assert!(err.is_config());
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_wraps_measure_error() {
        let err = AnalysisError::from(spiral_measure::MeasureError::insufficient_samples(2, 0));
        assert!(!err.is_config());
        assert!(err.to_string().contains("measurement failed"));
    }
}
