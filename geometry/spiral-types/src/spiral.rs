//! The double conical spiral model.
//!
//! Two tapered helical shells (outer and inner) wind around a shared vertical
//! axis, each starting at its own base radius and narrowing linearly to the
//! apex over the same height. Think of a conical spiral staircase with an
//! inner and an outer handrail.

use nalgebra::Point3;
use std::f64::consts::TAU;

use crate::{Result, SpiralConfig, SpiralPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects one of the two spiral shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shell {
    /// The outer shell, starting at `outer_radius` with no phase offset.
    Outer,
    /// The inner shell, starting at `inner_radius`, rotated by the
    /// configured phase offset.
    Inner,
}

impl Shell {
    /// Both shells, outer first.
    pub const BOTH: [Self; 2] = [Self::Outer, Self::Inner];

    /// Human-readable shell name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated double conical spiral.
///
/// Construction validates the underlying [`SpiralConfig`], so every method
/// on a constructed spiral operates on a well-formed geometry — downstream
/// estimators never re-check the configuration.
///
/// # Parameterization
///
/// Both shells are parameterized over the fractional height `t ∈ [0, 1]`:
///
/// - radius: `R(t) = R0 - (R0 - R_end) * t`, with `R_end = 0` (the apex)
/// - angle: `θ(t) = 2π * num_turns * t + phase` (phase is 0 for the outer
///   shell, `phase_offset` for the inner)
/// - height: `z(t) = height * t`
///
/// # Example
///
/// ```
/// use spiral_types::{DoubleConicalSpiral, Shell, SpiralConfig};
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0);
/// let spiral = DoubleConicalSpiral::new(config).unwrap();
///
/// // The outer shell starts at its base radius and tapers to the apex.
/// let base = spiral.point_at(Shell::Outer, 0.0);
/// assert!((base.radius - 15.0).abs() < 1e-12);
/// let apex = spiral.point_at(Shell::Outer, 1.0);
/// assert!(apex.radius.abs() < 1e-12);
/// assert!((apex.z() - 12.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleConicalSpiral {
    config: SpiralConfig,
}

impl DoubleConicalSpiral {
    /// Create a spiral from a configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns the validation error naming the offending field.
    pub fn new(config: SpiralConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Total height of the cone.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.config.height
    }

    /// Number of complete turns over the full height.
    #[must_use]
    pub const fn turns(&self) -> f64 {
        self.config.num_turns
    }

    /// Base radius of a shell (its radius at `t = 0`).
    #[must_use]
    pub const fn start_radius(&self, shell: Shell) -> f64 {
        match shell {
            Shell::Outer => self.config.outer_radius,
            Shell::Inner => self.config.inner_radius,
        }
    }

    /// Radius of a shell at `t = 1`. Both shells taper to the apex.
    #[must_use]
    pub const fn end_radius(&self, _shell: Shell) -> f64 {
        0.0
    }

    /// Angular start of a shell in radians.
    #[must_use]
    pub const fn phase(&self, shell: Shell) -> f64 {
        match shell {
            Shell::Outer => 0.0,
            Shell::Inner => self.config.phase_offset,
        }
    }

    /// Instantaneous shell radius at fractional height `t`.
    ///
    /// Linear taper from the shell's base radius to its apex radius.
    #[must_use]
    pub fn radius_at(&self, shell: Shell, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let r0 = self.start_radius(shell);
        let r1 = self.end_radius(shell);
        r0 - (r0 - r1) * t
    }

    /// Angular position at fractional height `t`, in radians.
    #[must_use]
    pub fn theta_at(&self, shell: Shell, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        TAU * self.config.num_turns * t + self.phase(shell)
    }

    /// Evaluate a shell at fractional height `t`.
    #[must_use]
    pub fn point_at(&self, shell: Shell, t: f64) -> SpiralPoint {
        let t = t.clamp(0.0, 1.0);
        let radius = self.radius_at(shell, t);
        let theta = self.theta_at(shell, t);
        let position = Point3::new(
            radius * theta.cos(),
            radius * theta.sin(),
            self.config.height * t,
        );
        SpiralPoint::new(position, t, radius)
    }

    /// Instantaneous shell radius at height `z ∈ [0, height]`.
    #[must_use]
    pub fn radius_at_height(&self, shell: Shell, z: f64) -> f64 {
        self.radius_at(shell, z / self.config.height)
    }

    /// Angular position at height `z ∈ [0, height]`, in radians.
    #[must_use]
    pub fn theta_at_height(&self, shell: Shell, z: f64) -> f64 {
        self.theta_at(shell, z / self.config.height)
    }

    /// Radius change per unit height, `dR/dz`. Constant for a linear taper.
    #[must_use]
    pub fn radial_rate(&self, shell: Shell) -> f64 {
        -(self.start_radius(shell) - self.end_radius(shell)) / self.config.height
    }

    /// Angular velocity per unit height, `dθ/dz = 2π * num_turns / height`.
    ///
    /// Constant; shared by both shells.
    #[must_use]
    pub fn angular_velocity(&self) -> f64 {
        TAU * self.config.num_turns / self.config.height
    }

    /// Sample a shell at `n` parameters uniformly spaced over [0, 1].
    ///
    /// The first point is the base (`t = 0`) and the last the apex
    /// (`t = 1`). `n` is clamped to at least 2. This sequence is the shared
    /// substrate for discrete length summation and rendering.
    #[must_use]
    pub fn sample(&self, shell: Shell, n: usize) -> Vec<SpiralPoint> {
        let n = n.max(2);
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                self.point_at(shell, t)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_spiral() -> DoubleConicalSpiral {
        let config = SpiralConfig::default()
            .with_radii(15.0, 10.0)
            .with_height(12.0)
            .with_turns(8.0);
        DoubleConicalSpiral::new(config).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SpiralConfig::default().with_height(-1.0);
        assert!(DoubleConicalSpiral::new(config).is_err());
    }

    #[test]
    fn test_taper_endpoints() {
        let spiral = reference_spiral();

        assert_relative_eq!(spiral.radius_at(Shell::Outer, 0.0), 15.0);
        assert_relative_eq!(spiral.radius_at(Shell::Inner, 0.0), 10.0);
        assert_relative_eq!(spiral.radius_at(Shell::Outer, 1.0), 0.0);
        assert_relative_eq!(spiral.radius_at(Shell::Inner, 1.0), 0.0);

        // Linear in between
        assert_relative_eq!(spiral.radius_at(Shell::Outer, 0.5), 7.5);
        assert_relative_eq!(spiral.radius_at(Shell::Inner, 0.25), 7.5);
    }

    #[test]
    fn test_angular_position() {
        let spiral = reference_spiral();

        assert_relative_eq!(spiral.theta_at(Shell::Outer, 0.0), 0.0);
        assert_relative_eq!(spiral.theta_at(Shell::Outer, 1.0), TAU * 8.0);
        assert_relative_eq!(spiral.theta_at(Shell::Outer, 0.5), TAU * 4.0);
    }

    #[test]
    fn test_phase_offset_shifts_inner_only() {
        let config = SpiralConfig::default()
            .with_radii(15.0, 10.0)
            .with_height(12.0)
            .with_turns(8.0)
            .with_phase_offset(std::f64::consts::PI);
        let spiral = DoubleConicalSpiral::new(config).unwrap();

        assert_relative_eq!(spiral.theta_at(Shell::Outer, 0.0), 0.0);
        assert_relative_eq!(spiral.theta_at(Shell::Inner, 0.0), std::f64::consts::PI);

        // Opposite phase puts the inner base point on the negative x axis.
        let p = spiral.point_at(Shell::Inner, 0.0);
        assert_relative_eq!(p.position.x, -10.0, epsilon = 1e-10);
        assert_relative_eq!(p.position.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_point_evaluation() {
        let spiral = reference_spiral();

        let base = spiral.point_at(Shell::Outer, 0.0);
        assert_relative_eq!(base.position.x, 15.0);
        assert_relative_eq!(base.position.y, 0.0);
        assert_relative_eq!(base.position.z, 0.0);

        let mid = spiral.point_at(Shell::Outer, 0.5);
        assert_relative_eq!(mid.position.z, 6.0);
        assert_relative_eq!(
            (mid.position.x.powi(2) + mid.position.y.powi(2)).sqrt(),
            7.5,
            epsilon = 1e-10
        );

        // Parameter is clamped, not extrapolated.
        let clamped = spiral.point_at(Shell::Outer, 1.5);
        assert_relative_eq!(clamped.position.z, 12.0);
    }

    #[test]
    fn test_height_parameterization_agrees() {
        let spiral = reference_spiral();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let z = spiral.height() * t;
            assert_relative_eq!(
                spiral.radius_at(Shell::Outer, t),
                spiral.radius_at_height(Shell::Outer, z),
                epsilon = 1e-12
            );
            assert_relative_eq!(
                spiral.theta_at(Shell::Inner, t),
                spiral.theta_at_height(Shell::Inner, z),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_rates() {
        let spiral = reference_spiral();

        assert_relative_eq!(spiral.radial_rate(Shell::Outer), -15.0 / 12.0);
        assert_relative_eq!(spiral.radial_rate(Shell::Inner), -10.0 / 12.0);
        assert_relative_eq!(spiral.angular_velocity(), TAU * 8.0 / 12.0);
    }

    #[test]
    fn test_zero_inner_radius() {
        let config = SpiralConfig::default()
            .with_radii(10.0, 0.0)
            .with_height(5.0)
            .with_turns(3.0);
        let spiral = DoubleConicalSpiral::new(config).unwrap();

        // The inner shell collapses to the axis; everything stays finite.
        for i in 0..=10 {
            let p = spiral.point_at(Shell::Inner, f64::from(i) / 10.0);
            assert_relative_eq!(p.position.x, 0.0);
            assert_relative_eq!(p.position.y, 0.0);
            assert!(p.position.z.is_finite());
        }
        assert_relative_eq!(spiral.radial_rate(Shell::Inner), 0.0);
    }

    #[test]
    fn test_sampling() {
        let spiral = reference_spiral();

        let points = spiral.sample(Shell::Outer, 100);
        assert_eq!(points.len(), 100);
        assert_relative_eq!(points[0].t, 0.0);
        assert_relative_eq!(points[99].t, 1.0);
        assert_relative_eq!(points[0].radius, 15.0);
        assert_relative_eq!(points[99].radius, 0.0, epsilon = 1e-12);

        // z increases monotonically along the sample.
        for pair in points.windows(2) {
            assert!(pair[1].z() > pair[0].z());
        }

        // Degenerate requests are clamped to a 2-point sample.
        assert_eq!(spiral.sample(Shell::Outer, 0).len(), 2);
    }
}
