//! End-to-end material analysis for double conical spirals.
//!
//! Ties the sibling crates together: validates a configuration, runs the
//! three perimeter estimators (`spiral-measure`), builds the flattened
//! connection net (`spiral-net`), and aggregates everything into one
//! [`AnalysisResult`] per configuration — the single record reporting and
//! plotting consumers read.
//!
//! Batches of configurations are processed independently: one rejected
//! configuration never stops the rest.
//!
//! # Example
//!
//! ```
//! use spiral_analysis::{analyze, AnalysisParams};
//! use spiral_types::SpiralConfig;
//!
//! let config = SpiralConfig::default()
//!     .with_radii(15.0, 10.0)
//!     .with_height(12.0)
//!     .with_turns(8.0);
//!
//! let result = analyze(&config, &AnalysisParams::default()).unwrap();
//!
//! // Three cross-validating length estimates plus the net material.
//! assert!(result.circular_total() < result.analytical_total());
//! assert!(result.total_material > result.net_length);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all result types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod analyze;
mod error;
mod params;
mod result;

pub use analyze::{analyze, analyze_batch};
pub use error::AnalysisError;
pub use params::AnalysisParams;
pub use result::AnalysisResult;

// Re-export the pieces a consumer typically needs alongside a result.
pub use spiral_measure::{EstimationMethod, MethodComparison, PerimeterEstimate};
pub use spiral_net::{AnnularLayer, NetConnection, NetLayer, NetPattern};
pub use spiral_types::{DoubleConicalSpiral, Shell, SpiralConfig, SpiralPoint};
