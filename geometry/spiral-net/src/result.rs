//! Net pattern result types.

use crate::layer::{NetConnection, NetLayer, NetStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete flattened net for one spiral.
///
/// Holds every ring layer with its connection fans (for rendering the cut
/// pattern) and the summed material lengths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetPattern {
    /// Ring layers, bottom to top, with their fans.
    pub layers: Vec<NetLayer>,
    /// Number of ring layers.
    pub layer_count: usize,
    /// Summed fan length over all layers.
    pub net_length: f64,
    /// Supplementary structural line length.
    pub struct_line_length: f64,
    /// `net_length + struct_line_length`.
    pub total_length: f64,
}

impl NetPattern {
    /// Get a layer by index.
    #[must_use]
    pub fn get_layer(&self, index: usize) -> Option<&NetLayer> {
        self.layers.get(index)
    }

    /// Total connection fans across all layers.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.layers.iter().map(NetLayer::connection_count).sum()
    }

    /// Compute per-layer length statistics.
    #[must_use]
    pub fn stats(&self) -> NetStats {
        if self.layers.is_empty() {
            return NetStats::default();
        }

        let mut min_layer_length = f64::INFINITY;
        let mut max_layer_length: f64 = 0.0;
        let mut sum = 0.0;
        let mut total_points = 0;

        for layer in &self.layers {
            min_layer_length = min_layer_length.min(layer.length);
            max_layer_length = max_layer_length.max(layer.length);
            sum += layer.length;
            total_points += layer
                .connections
                .iter()
                .map(NetConnection::diagonal_count)
                .sum::<usize>();
        }

        NetStats {
            min_layer_length,
            max_layer_length,
            avg_layer_length: sum / self.layers.len() as f64,
            total_connections: self.connection_count(),
            total_points,
        }
    }
}

impl std::fmt::Display for NetPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NetPattern: {} layers, {} fans, net {:.2} + structural {:.2}",
            self.layer_count,
            self.connection_count(),
            self.net_length,
            self.struct_line_length
        )
    }
}
