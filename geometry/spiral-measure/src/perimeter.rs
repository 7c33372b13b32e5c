//! The three perimeter estimators.
//!
//! Each estimator measures the path length of both shells and reports an
//! outer/inner/total breakdown. The analytical integral is the reference;
//! the discrete methods exist to cross-validate it and to quantify what a
//! flattened, ring-based rendition of the spiral gives up.

use spiral_types::{DoubleConicalSpiral, Shell, SpiralPoint};
use std::f64::consts::TAU;
use tracing::warn;

use crate::quadrature::adaptive_simpson;
use crate::{MeasureError, MeasureResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sample count for the numerical estimator.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Sample count used when the analytical estimator falls back to
/// discretization.
pub const FALLBACK_SAMPLES: usize = 10_000;

/// Quadrature tolerance for the analytical estimator.
const QUADRATURE_TOLERANCE: f64 = 1e-10;

/// Maximum quadrature recursion depth.
const QUADRATURE_MAX_DEPTH: usize = 20;

/// The closed set of perimeter estimation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EstimationMethod {
    /// Arc-length integral evaluated by adaptive quadrature.
    Analytical,
    /// Sum of chord lengths over a uniform point sample.
    Numerical,
    /// Stack of flat closed rings, one per full turn; ignores vertical
    /// travel entirely.
    Circular,
}

impl EstimationMethod {
    /// Human-readable method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analytical => "analytical",
            Self::Numerical => "numerical",
            Self::Circular => "circular",
        }
    }
}

impl std::fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A perimeter estimate for both shells of a spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerimeterEstimate {
    /// The method that produced this estimate.
    pub method: EstimationMethod,
    /// Path length of the outer shell.
    pub outer_length: f64,
    /// Path length of the inner shell.
    pub inner_length: f64,
    /// Sum of both shells.
    pub total_length: f64,
    /// Quadrature error estimate (analytical method only).
    pub quad_error: Option<f64>,
    /// True if the analytical estimator failed to converge and this value
    /// was produced by the elevated-sample discretization fallback.
    pub degraded: bool,
}

impl PerimeterEstimate {
    fn new(method: EstimationMethod, outer_length: f64, inner_length: f64) -> Self {
        Self {
            method,
            outer_length,
            inner_length,
            total_length: outer_length + inner_length,
            quad_error: None,
            degraded: false,
        }
    }
}

impl std::fmt::Display for PerimeterEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: outer {:.4}, inner {:.4}, total {:.4}",
            self.method, self.outer_length, self.inner_length, self.total_length
        )
    }
}

/// Arc-length integrand of one shell at height `z`:
/// `sqrt((dR/dz)^2 + (R(z) * dθ/dz)^2 + 1)`.
fn arc_length_integrand(spiral: &DoubleConicalSpiral, shell: Shell, z: f64) -> f64 {
    let radial = spiral.radial_rate(shell);
    let swept = spiral.radius_at_height(shell, z) * spiral.angular_velocity();
    radial.mul_add(radial, swept.mul_add(swept, 1.0)).sqrt()
}

/// Estimate the perimeter by integrating the arc-length element.
///
/// This is the reference estimate the discrete methods are compared
/// against. If the quadrature fails to converge or yields a non-finite
/// value (pathological tapers with extreme angular velocity), the estimate
/// is recomputed by chord summation at [`FALLBACK_SAMPLES`] and flagged
/// [`degraded`](PerimeterEstimate::degraded) instead of silently returning
/// a wrong number.
///
/// # Example
///
/// ```
/// use spiral_types::{DoubleConicalSpiral, SpiralConfig};
/// use spiral_measure::analytical_perimeter;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0);
/// let spiral = DoubleConicalSpiral::new(config).unwrap();
///
/// let estimate = analytical_perimeter(&spiral);
/// assert!((estimate.total_length - 630.64).abs() < 0.01);
/// assert!(!estimate.degraded);
/// ```
#[must_use]
pub fn analytical_perimeter(spiral: &DoubleConicalSpiral) -> PerimeterEstimate {
    let height = spiral.height();

    let outer = adaptive_simpson(
        &|z| arc_length_integrand(spiral, Shell::Outer, z),
        0.0,
        height,
        QUADRATURE_TOLERANCE,
        QUADRATURE_MAX_DEPTH,
    );
    let inner = adaptive_simpson(
        &|z| arc_length_integrand(spiral, Shell::Inner, z),
        0.0,
        height,
        QUADRATURE_TOLERANCE,
        QUADRATURE_MAX_DEPTH,
    );

    if !outer.converged || !inner.converged {
        warn!(
            outer_converged = outer.converged,
            inner_converged = inner.converged,
            fallback_samples = FALLBACK_SAMPLES,
            "quadrature did not converge, falling back to chord summation"
        );
        let mut estimate = PerimeterEstimate::new(
            EstimationMethod::Analytical,
            chord_length(&spiral.sample(Shell::Outer, FALLBACK_SAMPLES)),
            chord_length(&spiral.sample(Shell::Inner, FALLBACK_SAMPLES)),
        );
        estimate.degraded = true;
        return estimate;
    }

    let mut estimate =
        PerimeterEstimate::new(EstimationMethod::Analytical, outer.value, inner.value);
    estimate.quad_error = Some(outer.error.hypot(inner.error));
    estimate
}

/// Estimate the perimeter by summing chord lengths over `samples` uniform
/// points per shell.
///
/// The error against the analytical estimate shrinks as `samples` grows;
/// 1000 points keep it well under 1% for practical configurations.
///
/// # Errors
///
/// Returns [`MeasureError::InsufficientSamples`] if `samples < 2`.
pub fn numerical_perimeter(
    spiral: &DoubleConicalSpiral,
    samples: usize,
) -> MeasureResult<PerimeterEstimate> {
    if samples < 2 {
        return Err(MeasureError::insufficient_samples(2, samples));
    }
    let outer = spiral.sample(Shell::Outer, samples);
    let inner = spiral.sample(Shell::Inner, samples);
    numerical_perimeter_from_samples(&outer, &inner)
}

/// Estimate the perimeter from pre-sampled point sequences.
///
/// Lets a caller that already sampled the shells (for rendering, say) reuse
/// the same points instead of sampling twice.
///
/// # Errors
///
/// Returns [`MeasureError::InsufficientSamples`] if either sequence has
/// fewer than 2 points.
pub fn numerical_perimeter_from_samples(
    outer: &[SpiralPoint],
    inner: &[SpiralPoint],
) -> MeasureResult<PerimeterEstimate> {
    let shortest = outer.len().min(inner.len());
    if shortest < 2 {
        return Err(MeasureError::insufficient_samples(2, shortest));
    }
    Ok(PerimeterEstimate::new(
        EstimationMethod::Numerical,
        chord_length(outer),
        chord_length(inner),
    ))
}

/// Run one estimator selected by its method tag.
///
/// All three conform to the same contract — a spiral in, an
/// outer/inner/total estimate out — so callers can iterate over
/// methods uniformly. `samples` only affects the numerical method.
///
/// # Errors
///
/// Returns an error if the numerical method is selected with
/// `samples < 2`.
pub fn estimate(
    spiral: &DoubleConicalSpiral,
    method: EstimationMethod,
    samples: usize,
) -> MeasureResult<PerimeterEstimate> {
    match method {
        EstimationMethod::Analytical => Ok(analytical_perimeter(spiral)),
        EstimationMethod::Numerical => numerical_perimeter(spiral, samples),
        EstimationMethod::Circular => Ok(circular_perimeter(spiral)),
    }
}

/// Sum of Euclidean distances between consecutive points.
#[must_use]
pub fn chord_length(points: &[SpiralPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

/// Estimate the perimeter as a stack of flat closed rings.
///
/// One ring per full turn, evaluated at the vertical midpoint of its slice:
/// the spiral is treated as `round(num_turns)` concentric circles and the
/// estimate is `Σ 2πR(z_k)` per shell. Vertical travel is ignored, so this
/// systematically underestimates the 3D methods — the gap is exactly what
/// the flattened rendition gives up.
#[must_use]
pub fn circular_perimeter(spiral: &DoubleConicalSpiral) -> PerimeterEstimate {
    let rings = ring_count(spiral);
    PerimeterEstimate::new(
        EstimationMethod::Circular,
        ring_stack_length(spiral, Shell::Outer, rings),
        ring_stack_length(spiral, Shell::Inner, rings),
    )
}

/// Number of rings the circular estimator uses: one per full turn, at
/// least one.
#[must_use]
pub fn ring_count(spiral: &DoubleConicalSpiral) -> usize {
    let turns = spiral.turns().round();
    if turns < 1.0 {
        1
    } else {
        turns as usize
    }
}

/// Sum of ring circumferences for one shell over `rings` midpoint slices.
#[must_use]
pub fn ring_stack_length(spiral: &DoubleConicalSpiral, shell: Shell, rings: usize) -> f64 {
    let height = spiral.height();
    let slice = height / rings as f64;
    (0..rings)
        .map(|k| {
            let z = (k as f64 + 0.5) * slice;
            TAU * spiral.radius_at_height(shell, z)
        })
        .sum()
}
