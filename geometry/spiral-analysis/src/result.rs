//! The aggregated analysis record.

use spiral_measure::MethodComparison;
use spiral_net::NetPattern;
use spiral_types::{SpiralConfig, SpiralPoint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything computed for one spiral configuration.
///
/// Produced once per run and read-only afterwards; reporting and plotting
/// consumers take what they need (totals for tables, point sequences and
/// the net pattern for rendering) without recomputing any geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisResult {
    /// The configuration this result was computed from.
    pub config: SpiralConfig,
    /// All three perimeter estimates with accuracy data.
    pub comparison: MethodComparison,
    /// The flattened connection net.
    pub net: NetPattern,
    /// Ordered outer-shell point sequence (render substrate).
    pub outer_points: Vec<SpiralPoint>,
    /// Ordered inner-shell point sequence (render substrate).
    pub inner_points: Vec<SpiralPoint>,
    /// Summed fan length of the net.
    pub net_length: f64,
    /// Supplementary structural line length.
    pub struct_line_length: f64,
    /// Total material: spiral path (analytical) + net + structural lines.
    pub total_material: f64,
}

impl AnalysisResult {
    /// Analytical total spiral length.
    #[must_use]
    pub const fn analytical_total(&self) -> f64 {
        self.comparison.analytical.total_length
    }

    /// Numerical total spiral length.
    #[must_use]
    pub const fn numerical_total(&self) -> f64 {
        self.comparison.numerical.total_length
    }

    /// Circular-approximation total spiral length.
    #[must_use]
    pub const fn circular_total(&self) -> f64 {
        self.comparison.circular.total_length
    }
}

impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "spiral {:.2}, net {:.2}, structural {:.2}, total material {:.2}",
            self.analytical_total(),
            self.net_length,
            self.struct_line_length,
            self.total_material
        )
    }
}
