//! Net construction.
//!
//! Slices the spiral into ring layers, places connection fans around each
//! ring pair, and totals the planar material length. The layer stack turns
//! the curved two-shell surface into a sequence of flat annulus problems,
//! each of which cuts and assembles from sheet material.

use nalgebra::Point2;
use spiral_types::{DoubleConicalSpiral, Shell, SpiralConfig};
use std::f64::consts::TAU;
use tracing::{debug, info};

use crate::layer::{AnnularLayer, NetConnection, NetLayer};
use crate::result::NetPattern;

/// Fewest connection fans placed on any ring, however small.
const MIN_CONNECTIONS_PER_LAYER: usize = 4;

/// Compute the ring layers for a spiral.
///
/// The height is split into `layer_count` equal slices (one per turn at
/// the default discretization) and each layer is evaluated at its slice's
/// vertical midpoint.
///
/// # Example
///
/// ```
/// use spiral_types::{DoubleConicalSpiral, SpiralConfig};
/// use spiral_net::annular_layers;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0);
/// let spiral = DoubleConicalSpiral::new(config).unwrap();
///
/// let layers = annular_layers(&spiral);
/// assert_eq!(layers.len(), 8);
/// // Rings narrow toward the apex.
/// assert!(layers[7].outer_radius < layers[0].outer_radius);
/// ```
#[must_use]
pub fn annular_layers(spiral: &DoubleConicalSpiral) -> Vec<AnnularLayer> {
    let count = spiral.config().layer_count();
    let slice = spiral.height() / count as f64;

    (0..count)
        .map(|index| {
            let z = (index as f64 + 0.5) * slice;
            AnnularLayer {
                index,
                z_height: z,
                outer_radius: spiral.radius_at_height(Shell::Outer, z),
                inner_radius: spiral.radius_at_height(Shell::Inner, z),
                outer_angle: spiral.theta_at_height(Shell::Outer, z),
                inner_angle: spiral.theta_at_height(Shell::Inner, z),
            }
        })
        .collect()
}

/// Build the connection fans for one ring layer.
///
/// Anchors are spread uniformly around the full outer ring, one per
/// `target_spacing` of mean circumference (never fewer than 4), so larger
/// rings receive proportionally more fans. Each anchor fans out to
/// `arc_density` inner-ring points across `arc_span_deg`, centered on the
/// anchor's angle. A degenerate layer (rings collapsed to the axis) yields
/// zero-length fans but is still recorded.
///
/// Callers reach this only through [`build_net`], which guarantees the
/// configuration has passed validation.
#[must_use]
pub(crate) fn build_layer(layer: AnnularLayer, config: &SpiralConfig) -> NetLayer {
    let outer = layer.outer_radius;
    let inner = layer.inner_radius;

    let mean_circumference = TAU * layer.mean_radius();
    let anchors = ((mean_circumference / config.target_spacing) as usize)
        .max(MIN_CONNECTIONS_PER_LAYER);

    let density = config.arc_density.max(2);
    let span = config.arc_span_deg.to_radians();
    let offset_step = span / (density - 1) as f64;

    let mut connections = Vec::with_capacity(anchors);
    let mut length = 0.0;

    for k in 0..anchors {
        let anchor_angle = TAU * k as f64 / anchors as f64;
        let anchor = Point2::new(outer * anchor_angle.cos(), outer * anchor_angle.sin());

        let mut points = Vec::with_capacity(density);
        let mut fan_length = 0.0;
        for i in 0..density {
            let theta = anchor_angle - span / 2.0 + i as f64 * offset_step;
            let point = Point2::new(inner * theta.cos(), inner * theta.sin());
            fan_length += (anchor - point).norm();
            points.push(point);
        }

        length += fan_length;
        connections.push(NetConnection {
            anchor_angle,
            anchor,
            points,
            length: fan_length,
        });
    }

    NetLayer {
        layer,
        connections,
        length,
    }
}

/// Build the complete annular net for a spiral.
///
/// Produces every layer's fans plus the summed material lengths: the net
/// itself, the supplementary structural lines
/// (`height * struct_lines`), and their total.
///
/// # Example
///
/// ```
/// use spiral_types::{DoubleConicalSpiral, SpiralConfig};
/// use spiral_net::build_net;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0)
///     .with_struct_lines(10.0)
///     .with_target_spacing(0.9)
///     .with_fan(30.0, 10);
/// let spiral = DoubleConicalSpiral::new(config).unwrap();
///
/// let net = build_net(&spiral);
/// assert_eq!(net.layer_count, 8);
/// assert!((net.net_length - 12361.41).abs() < 0.01);
/// assert!((net.struct_line_length - 120.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn build_net(spiral: &DoubleConicalSpiral) -> NetPattern {
    let config = *spiral.config();
    let ring_layers = annular_layers(spiral);

    info!(
        layer_count = ring_layers.len(),
        target_spacing = config.target_spacing,
        arc_span_deg = config.arc_span_deg,
        "building annular net"
    );

    let mut layers = Vec::with_capacity(ring_layers.len());
    let mut net_length = 0.0;

    for ring in ring_layers {
        let layer = build_layer(ring, &config);
        net_length += layer.length;
        layers.push(layer);
    }

    debug!(
        connections = layers.iter().map(NetLayer::connection_count).sum::<usize>(),
        "placed connection fans"
    );

    let struct_line_length = struct_line_length(spiral);

    info!(
        net_length = format!("{net_length:.2}"),
        struct_line_length = format!("{struct_line_length:.2}"),
        "net complete"
    );

    NetPattern {
        layer_count: layers.len(),
        layers,
        net_length,
        struct_line_length,
        total_length: net_length + struct_line_length,
    }
}

/// Supplementary structural line length: the configured linear density
/// applied over the full height.
#[must_use]
pub fn struct_line_length(spiral: &DoubleConicalSpiral) -> f64 {
    spiral.height() * spiral.config().struct_lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use spiral_types::SpiralConfig;

    fn reference_spiral() -> DoubleConicalSpiral {
        let config = SpiralConfig::default()
            .with_radii(15.0, 10.0)
            .with_height(12.0)
            .with_turns(8.0)
            .with_struct_lines(10.0)
            .with_target_spacing(0.9)
            .with_fan(30.0, 10);
        DoubleConicalSpiral::new(config).unwrap()
    }

    #[test]
    fn test_layer_partition() {
        let layers = annular_layers(&reference_spiral());
        assert_eq!(layers.len(), 8);

        // Midpoint heights of 1.5-unit slices over a height of 12.
        assert_relative_eq!(layers[0].z_height, 0.75);
        assert_relative_eq!(layers[7].z_height, 11.25);

        // Ring radii follow the taper.
        assert_relative_eq!(layers[0].outer_radius, 15.0 * (1.0 - 0.75 / 12.0));
        assert_relative_eq!(layers[0].inner_radius, 10.0 * (1.0 - 0.75 / 12.0));

        for pair in layers.windows(2) {
            assert!(pair[1].outer_radius < pair[0].outer_radius);
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn test_fractional_turns_partition() {
        let config = SpiralConfig::default().with_turns(5.5);
        let spiral = DoubleConicalSpiral::new(config).unwrap();
        assert_eq!(annular_layers(&spiral).len(), 6);

        let config = SpiralConfig::default().with_turns(0.3);
        let spiral = DoubleConicalSpiral::new(config).unwrap();
        assert_eq!(annular_layers(&spiral).len(), 1);
    }

    #[test]
    fn test_reference_net_length() {
        let net = build_net(&reference_spiral());

        assert_relative_eq!(net.net_length, 12361.4120, epsilon = 1e-2);
        assert_relative_eq!(net.struct_line_length, 120.0, epsilon = 1e-9);
        assert_relative_eq!(net.total_length, net.net_length + 120.0, epsilon = 1e-9);
        assert_eq!(net.layer_count, 8);
    }

    #[test]
    fn test_anchor_count_follows_ring_size() {
        let net = build_net(&reference_spiral());

        // Bottom ring: mean radius 12.5 * (1 - 0.75/12), circumference
        // ~73.6, spacing 0.9 -> 81 anchors (truncated).
        assert_eq!(net.layers[0].connection_count(), 81);

        // Rings narrow toward the apex, so anchor counts fall.
        for pair in net.layers.windows(2) {
            assert!(pair[1].connection_count() <= pair[0].connection_count());
        }
    }

    #[test]
    fn test_fan_geometry() {
        let net = build_net(&reference_spiral());
        let fan = &net.layers[0].connections[0];

        assert_eq!(fan.diagonal_count(), 10);
        assert_relative_eq!(fan.anchor_angle, 0.0);

        // The anchor sits on the outer ring, fan points on the inner ring.
        let outer = net.layers[0].layer.outer_radius;
        let inner = net.layers[0].layer.inner_radius;
        assert_relative_eq!(fan.anchor.coords.norm(), outer, epsilon = 1e-10);
        for point in &fan.points {
            assert_relative_eq!(point.coords.norm(), inner, epsilon = 1e-10);
        }

        // Each diagonal spans at least the annulus width.
        let width = net.layers[0].layer.width();
        for point in &fan.points {
            assert!((fan.anchor - *point).norm() >= width - 1e-10);
        }
    }

    #[test]
    fn test_net_length_grows_as_spacing_shrinks() {
        let mut previous = 0.0;
        for spacing in [2.0, 0.9, 0.45] {
            let config = SpiralConfig::default()
                .with_radii(15.0, 10.0)
                .with_height(12.0)
                .with_turns(8.0)
                .with_target_spacing(spacing)
                .with_fan(30.0, 10);
            let spiral = DoubleConicalSpiral::new(config).unwrap();
            let length = build_net(&spiral).net_length;
            assert!(length > previous, "spacing {spacing} must add material");
            previous = length;
        }
    }

    #[test]
    fn test_degenerate_layer_recorded_with_zero_length() {
        let ring = AnnularLayer {
            index: 0,
            z_height: 0.0,
            outer_radius: 0.0,
            inner_radius: 0.0,
            outer_angle: 0.0,
            inner_angle: 0.0,
        };
        let layer = build_layer(ring, &SpiralConfig::default());

        // The collapsed ring still gets its minimum fan allocation, all of
        // zero length.
        assert_eq!(layer.connection_count(), 4);
        assert_relative_eq!(layer.length, 0.0);
        for fan in &layer.connections {
            assert_relative_eq!(fan.length, 0.0);
        }
    }

    #[test]
    fn test_min_connections_floor() {
        // A ring far smaller than the spacing still gets 4 anchors.
        let ring = AnnularLayer {
            index: 0,
            z_height: 0.0,
            outer_radius: 0.1,
            inner_radius: 0.05,
            outer_angle: 0.0,
            inner_angle: 0.0,
        };
        let config = SpiralConfig::default().with_target_spacing(10.0);
        let layer = build_layer(ring, &config);
        assert_eq!(layer.connection_count(), 4);
        assert!(layer.length > 0.0);
    }

    #[test]
    fn test_struct_line_length() {
        assert_relative_eq!(struct_line_length(&reference_spiral()), 120.0);

        let config = SpiralConfig::default().with_height(20.0).with_struct_lines(1.0);
        let spiral = DoubleConicalSpiral::new(config).unwrap();
        assert_relative_eq!(struct_line_length(&spiral), 20.0);
    }
}
