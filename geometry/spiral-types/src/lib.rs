//! Parametric model of a double conical spiral.
//!
//! Two tapered helical shells (outer and inner) wind around a shared
//! vertical axis, each narrowing linearly from its base radius to the apex.
//! This crate holds the configuration, its validation, and the pure
//! geometry: evaluating either shell at any fractional height and producing
//! uniform point samples.
//!
//! Length estimation and net construction live in the sibling
//! `spiral-measure` and `spiral-net` crates; this crate has no knowledge of
//! them and performs no I/O.
//!
//! # Example
//!
//! ```
//! use spiral_types::{DoubleConicalSpiral, Shell, SpiralConfig};
//!
//! let config = SpiralConfig::default()
//!     .with_radii(15.0, 10.0)
//!     .with_height(12.0)
//!     .with_turns(8.0);
//!
//! let spiral = DoubleConicalSpiral::new(config).unwrap();
//!
//! // Evaluate the outer shell halfway up.
//! let p = spiral.point_at(Shell::Outer, 0.5);
//! assert!((p.z() - 6.0).abs() < 1e-12);
//! assert!((p.radius - 7.5).abs() < 1e-12);
//!
//! // Or sample it as an ordered point sequence.
//! let points = spiral.sample(Shell::Outer, 500);
//! assert_eq!(points.len(), 500);
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, Z-up: the spiral axis is the Z axis, the base circle lies
//! in the XY plane at `z = 0`, and the apex sits at `z = height`.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod config;
mod error;
mod point;
mod spiral;

pub use config::SpiralConfig;
pub use error::SpiralError;
pub use point::SpiralPoint;
pub use spiral::{DoubleConicalSpiral, Shell};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

/// Result type for spiral operations.
pub type Result<T> = std::result::Result<T, SpiralError>;
