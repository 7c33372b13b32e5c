//! Perimeter estimation for double conical spirals.
//!
//! Measures the path length of both spiral shells by three independent
//! methods and cross-validates them:
//!
//! - **Analytical**: adaptive quadrature over the arc-length integral —
//!   the reference value.
//! - **Numerical**: chord-length summation over a uniform point sample;
//!   converges to the analytical value as the sample count grows.
//! - **Circular**: a stack of flat closed rings, one per full turn;
//!   deliberately ignores vertical travel and therefore underestimates —
//!   the gap measures what a flattened rendition of the spiral gives up.
//!
//! # Example
//!
//! ```
//! use spiral_types::{DoubleConicalSpiral, SpiralConfig};
//! use spiral_measure::{compare_methods, EstimationMethod};
//!
//! let config = SpiralConfig::default()
//!     .with_radii(15.0, 10.0)
//!     .with_height(12.0)
//!     .with_turns(8.0);
//! let spiral = DoubleConicalSpiral::new(config).unwrap();
//!
//! let comparison = compare_methods(&spiral, 1000).unwrap();
//! assert_eq!(comparison.best_match, EstimationMethod::Numerical);
//! assert!(comparison.circular.total_length < comparison.analytical.total_length);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all result types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::suboptimal_flops
)]

mod compare;
mod error;
mod perimeter;
mod quadrature;

pub use compare::{compare_methods, compare_methods_from_samples, MethodComparison};
pub use error::{MeasureError, MeasureResult};
pub use perimeter::{
    analytical_perimeter, chord_length, circular_perimeter, estimate, numerical_perimeter,
    numerical_perimeter_from_samples, ring_count, ring_stack_length, EstimationMethod,
    PerimeterEstimate, DEFAULT_SAMPLES, FALLBACK_SAMPLES,
};
