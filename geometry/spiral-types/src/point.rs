//! Sampled spiral points.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point sampled on one spiral shell.
///
/// Carries the 3D position together with the parameter it was evaluated at
/// and the shell radius there, so downstream consumers (length summation,
/// net anchoring, rendering) don't re-derive them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralPoint {
    /// Position in 3D space.
    pub position: Point3<f64>,
    /// Fractional height parameter in [0, 1] this point was evaluated at.
    pub t: f64,
    /// Instantaneous shell radius at `t`.
    pub radius: f64,
}

impl SpiralPoint {
    /// Create a spiral point.
    #[must_use]
    pub const fn new(position: Point3<f64>, t: f64, radius: f64) -> Self {
        Self {
            position,
            t,
            radius,
        }
    }

    /// Euclidean distance to another sampled point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.position - self.position).norm()
    }

    /// Height (z coordinate) of this point.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.z
    }
}
