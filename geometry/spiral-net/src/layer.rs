//! Ring layers and connection fans.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One discretized circular cross-section of the spiral.
///
/// A layer is the flattened stand-in for one slice of the spiral: two
/// concentric circles (the outer and inner shell radii at the slice's
/// midpoint height) plus the shell angles there, which anchor the
/// connection fans.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnularLayer {
    /// Position in the layer stack, bottom to top.
    pub index: usize,
    /// Midpoint height of the slice this layer represents.
    pub z_height: f64,
    /// Outer shell radius at `z_height`.
    pub outer_radius: f64,
    /// Inner shell radius at `z_height`.
    pub inner_radius: f64,
    /// Outer shell angle at `z_height`, in radians.
    pub outer_angle: f64,
    /// Inner shell angle at `z_height`, in radians.
    pub inner_angle: f64,
}

impl AnnularLayer {
    /// Radial width of the annulus between the two rings.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Mean of the two ring radii.
    #[must_use]
    pub fn mean_radius(&self) -> f64 {
        f64::midpoint(self.outer_radius, self.inner_radius)
    }

    /// True when both rings have collapsed to the axis and the annulus
    /// carries no material.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.outer_radius <= f64::EPSILON
    }
}

/// One connection fan: an outer-ring anchor joined to a spread of
/// inner-ring points.
///
/// The fan's material length is the sum of the straight diagonals from the
/// anchor to each inner point; everything is planar — the net is flat.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetConnection {
    /// Angular position of the outer anchor, in radians.
    pub anchor_angle: f64,
    /// The outer-ring anchor point.
    pub anchor: Point2<f64>,
    /// Inner-ring points spread across the fan's angular span.
    pub points: Vec<Point2<f64>>,
    /// Total diagonal length of this fan.
    pub length: f64,
}

impl NetConnection {
    /// Number of diagonals in this fan.
    #[must_use]
    pub fn diagonal_count(&self) -> usize {
        self.points.len()
    }
}

/// One layer of the net: the ring pair plus all its connection fans.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetLayer {
    /// The ring geometry this layer was built from.
    pub layer: AnnularLayer,
    /// Connection fans placed around the full circumference.
    pub connections: Vec<NetConnection>,
    /// Summed fan length of this layer.
    pub length: f64,
}

impl NetLayer {
    /// Number of fans in this layer.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

/// Aggregate statistics over a net's layers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetStats {
    /// Shortest per-layer net length.
    pub min_layer_length: f64,
    /// Longest per-layer net length.
    pub max_layer_length: f64,
    /// Mean per-layer net length.
    pub avg_layer_length: f64,
    /// Total connection fans across all layers.
    pub total_connections: usize,
    /// Total sampled inner-ring points across all layers.
    pub total_points: usize,
}
