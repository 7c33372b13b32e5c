//! Adaptive Simpson quadrature for scalar integrands.

/// Outcome of an adaptive quadrature pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quadrature {
    /// Estimated integral value.
    pub value: f64,
    /// Accumulated error estimate (Richardson extrapolation residual).
    pub error: f64,
    /// False if any subinterval exhausted the recursion depth before
    /// meeting its tolerance.
    pub converged: bool,
}

/// Integrate `f` over `[a, b]` with adaptive Simpson's rule.
///
/// Subintervals are split until the Richardson residual falls below the
/// (halved-per-level) tolerance or `max_depth` is reached. The returned
/// error is the sum of residuals over accepted subintervals.
pub(crate) fn adaptive_simpson<F>(f: &F, a: f64, b: f64, tolerance: f64, max_depth: usize) -> Quadrature
where
    F: Fn(f64) -> f64,
{
    let whole = simpson_step(f, a, b);
    let mut converged = true;
    let mut error = 0.0;
    let value = adaptive_helper(f, a, b, tolerance, whole, max_depth, &mut error, &mut converged);

    Quadrature {
        value,
        error,
        converged: converged && value.is_finite(),
    }
}

fn simpson_step<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let mid = f64::midpoint(a, b);
    let h = (b - a) / 6.0;
    h * (f(a) + 4.0 * f(mid) + f(b))
}

#[allow(clippy::too_many_arguments)]
fn adaptive_helper<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    tolerance: f64,
    whole: f64,
    depth: usize,
    error: &mut f64,
    converged: &mut bool,
) -> f64 {
    let mid = f64::midpoint(a, b);
    let left = simpson_step(f, a, mid);
    let right = simpson_step(f, mid, b);
    let combined = left + right;
    let residual = combined - whole;

    if residual.abs() < 15.0 * tolerance {
        *error += residual.abs() / 15.0;
        return combined + residual / 15.0;
    }
    if depth == 0 {
        // Accept the current refinement but report non-convergence.
        *converged = false;
        *error += residual.abs() / 15.0;
        return combined + residual / 15.0;
    }

    let new_tol = tolerance / 2.0;
    adaptive_helper(f, a, mid, new_tol, left, depth - 1, error, converged)
        + adaptive_helper(f, mid, b, new_tol, right, depth - 1, error, converged)
}
