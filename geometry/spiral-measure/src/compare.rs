//! Cross-validation of the three estimation methods.

use spiral_types::{DoubleConicalSpiral, SpiralPoint};

use crate::perimeter::{
    analytical_perimeter, circular_perimeter, numerical_perimeter,
    numerical_perimeter_from_samples, EstimationMethod, PerimeterEstimate,
};
use crate::MeasureResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All three perimeter estimates for one spiral, plus derived accuracy data.
///
/// Percent errors are signed and relative to the analytical reference:
/// `(method - analytical) / analytical * 100`. The circular method ignores
/// vertical travel, so its error is characteristically negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodComparison {
    /// The analytical (reference) estimate.
    pub analytical: PerimeterEstimate,
    /// The discrete chord-sum estimate.
    pub numerical: PerimeterEstimate,
    /// The flat-ring estimate.
    pub circular: PerimeterEstimate,
    /// Signed percent error of the numerical method vs analytical.
    pub numerical_error_pct: f64,
    /// Signed percent error of the circular method vs analytical.
    pub circular_error_pct: f64,
    /// Absolute difference |analytical - numerical|.
    pub analytical_vs_numerical: f64,
    /// Absolute difference |analytical - circular|.
    pub analytical_vs_circular: f64,
    /// Absolute difference |numerical - circular|.
    pub numerical_vs_circular: f64,
    /// Which discrete method lands closer to the analytical reference.
    pub best_match: EstimationMethod,
}

impl MethodComparison {
    fn derive(
        analytical: PerimeterEstimate,
        numerical: PerimeterEstimate,
        circular: PerimeterEstimate,
    ) -> Self {
        let reference = analytical.total_length;
        let percent = |value: f64| (value - reference) / reference * 100.0;

        let analytical_vs_numerical = (reference - numerical.total_length).abs();
        let analytical_vs_circular = (reference - circular.total_length).abs();

        Self {
            analytical,
            numerical,
            circular,
            numerical_error_pct: percent(numerical.total_length),
            circular_error_pct: percent(circular.total_length),
            analytical_vs_numerical,
            analytical_vs_circular,
            numerical_vs_circular: (numerical.total_length - circular.total_length).abs(),
            best_match: if analytical_vs_numerical <= analytical_vs_circular {
                EstimationMethod::Numerical
            } else {
                EstimationMethod::Circular
            },
        }
    }
}

impl std::fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "analytical {:.4}, numerical {:.4} ({:+.2}%), circular {:.4} ({:+.2}%)",
            self.analytical.total_length,
            self.numerical.total_length,
            self.numerical_error_pct,
            self.circular.total_length,
            self.circular_error_pct
        )
    }
}

/// Run all three estimators and compare them.
///
/// # Errors
///
/// Returns an error if `numerical_samples < 2`.
///
/// # Example
///
/// ```
/// use spiral_types::{DoubleConicalSpiral, SpiralConfig};
/// use spiral_measure::compare_methods;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0);
/// let spiral = DoubleConicalSpiral::new(config).unwrap();
///
/// let comparison = compare_methods(&spiral, 1000).unwrap();
/// assert!(comparison.numerical_error_pct.abs() < 1.0);
/// assert!(comparison.circular_error_pct < 0.0);
/// ```
pub fn compare_methods(
    spiral: &DoubleConicalSpiral,
    numerical_samples: usize,
) -> MeasureResult<MethodComparison> {
    let numerical = numerical_perimeter(spiral, numerical_samples)?;
    Ok(MethodComparison::derive(
        analytical_perimeter(spiral),
        numerical,
        circular_perimeter(spiral),
    ))
}

/// Like [`compare_methods`], but reuses pre-sampled shell points for the
/// numerical estimate.
///
/// # Errors
///
/// Returns an error if either sample sequence has fewer than 2 points.
pub fn compare_methods_from_samples(
    spiral: &DoubleConicalSpiral,
    outer: &[SpiralPoint],
    inner: &[SpiralPoint],
) -> MeasureResult<MethodComparison> {
    let numerical = numerical_perimeter_from_samples(outer, inner)?;
    Ok(MethodComparison::derive(
        analytical_perimeter(spiral),
        numerical,
        circular_perimeter(spiral),
    ))
}
