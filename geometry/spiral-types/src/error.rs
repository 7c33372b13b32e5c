//! Error types for spiral configuration and evaluation.

use thiserror::Error;

/// Errors that can occur when validating or constructing a spiral.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpiralError {
    /// A field that must be strictly positive is zero or negative.
    #[error("invalid {field}: {value} (must be positive)")]
    NotPositive {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The inner radius is negative.
    #[error("invalid inner radius: {0} (must be non-negative)")]
    NegativeInnerRadius(f64),

    /// The inner radius is not smaller than the outer radius.
    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    RadiusOrder {
        /// Configured inner base radius.
        inner: f64,
        /// Configured outer base radius.
        outer: f64,
    },

    /// The connection arc span is outside the half-open range (0, 360].
    #[error("invalid arc span: {0} degrees (must be in (0, 360])")]
    ArcSpanOutOfRange(f64),

    /// Too few points to form a connection fan.
    #[error("arc density {0} is too small: a fan needs at least 2 points")]
    ArcDensityTooSmall(usize),

    /// A configuration field is NaN or infinite.
    #[error("configuration field {field} is not finite: {value}")]
    NonFinite {
        /// Name of the offending configuration field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl SpiralError {
    /// Create a not-positive error for a named field.
    #[must_use]
    pub const fn not_positive(field: &'static str, value: f64) -> Self {
        Self::NotPositive { field, value }
    }

    /// Create a non-finite error for a named field.
    #[must_use]
    pub const fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }

    /// Check if this is a radius-ordering error.
    #[must_use]
    pub const fn is_radius_order(&self) -> bool {
        matches!(self, Self::RadiusOrder { .. })
    }

    /// Check if this error names the given configuration field.
    #[must_use]
    pub fn concerns_field(&self, name: &str) -> bool {
        match self {
            Self::NotPositive { field, .. } | Self::NonFinite { field, .. } => *field == name,
            Self::NegativeInnerRadius(_) => name == "inner_radius",
            Self::RadiusOrder { .. } => name == "inner_radius" || name == "outer_radius",
            Self::ArcSpanOutOfRange(_) => name == "arc_span_deg",
            Self::ArcDensityTooSmall(_) => name == "arc_density",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpiralError::not_positive("height", -2.0);
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("-2"));

        let err = SpiralError::RadiusOrder {
            inner: 10.0,
            outer: 5.0,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("5"));

        let err = SpiralError::ArcSpanOutOfRange(361.0);
        assert!(err.to_string().contains("361"));
    }

    #[test]
    fn test_concerns_field() {
        let err = SpiralError::not_positive("target_spacing", 0.0);
        assert!(err.concerns_field("target_spacing"));
        assert!(!err.concerns_field("height"));

        let err = SpiralError::ArcDensityTooSmall(1);
        assert!(err.concerns_field("arc_density"));

        let err = SpiralError::RadiusOrder {
            inner: 5.0,
            outer: 5.0,
        };
        assert!(err.is_radius_order());
        assert!(err.concerns_field("outer_radius"));
    }
}
