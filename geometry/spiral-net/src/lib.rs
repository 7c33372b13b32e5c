//! Flattened annular net construction for double conical spirals.
//!
//! The two spiral shells form a curved surface that cannot be cut from flat
//! stock directly. This crate approximates it as a stack of concentric ring
//! pairs — one layer per turn at the default discretization — and joins
//! each pair with diagonal connection fans, producing a pattern that can be
//! cut and assembled from sheet material, plus the exact length of material
//! it consumes.
//!
//! # Example
//!
//! ```
//! use spiral_types::{DoubleConicalSpiral, SpiralConfig};
//! use spiral_net::build_net;
//!
//! let config = SpiralConfig::default()
//!     .with_radii(15.0, 10.0)
//!     .with_height(12.0)
//!     .with_turns(8.0);
//! let spiral = DoubleConicalSpiral::new(config).unwrap();
//!
//! let net = build_net(&spiral);
//! assert_eq!(net.layer_count, 8);
//! assert!(net.net_length > 0.0);
//! println!("{net}");
//! ```
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

mod builder;
mod layer;
mod result;

pub use builder::{annular_layers, build_net, struct_line_length};
pub use layer::{AnnularLayer, NetConnection, NetLayer, NetStats};
pub use result::NetPattern;

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;
