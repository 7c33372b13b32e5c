//! Spiral configuration and validation.

use crate::{Result, SpiralError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a double conical spiral.
///
/// Describes two tapered helical shells sharing an axis and height, plus the
/// discretization knobs used when flattening the shells into an annular
/// connection net.
///
/// All length-like fields share one (arbitrary) unit; angles are radians
/// except [`arc_span_deg`](Self::arc_span_deg), which follows the
/// degree-based convention of net patterns.
///
/// # Example
///
/// ```
/// use spiral_types::SpiralConfig;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiralConfig {
    /// Base radius of the outer shell (must be positive).
    pub outer_radius: f64,
    /// Base radius of the inner shell (non-negative, smaller than outer).
    pub inner_radius: f64,
    /// Total height of the cone (must be positive).
    pub height: f64,
    /// Number of complete turns over the full height (real-valued, positive).
    pub num_turns: f64,
    /// Angular offset of the inner shell relative to the outer, in radians
    /// (0 = aligned, π = opposite).
    pub phase_offset: f64,
    /// Linear density factor for supplementary structural lines.
    pub struct_lines: f64,
    /// Desired spacing between net connection anchors along a ring.
    pub target_spacing: f64,
    /// Angular width of one connection fan, in degrees, in (0, 360].
    pub arc_span_deg: f64,
    /// Number of points sampled per connection fan (at least 2).
    pub arc_density: usize,
    /// Ring layers per full turn when discretizing the spiral.
    ///
    /// The net and the flat-ring length approximation both slice the height
    /// into `round(num_turns * layers_per_turn)` layers. One layer per turn
    /// keeps the assembly count low while tracking the taper.
    pub layers_per_turn: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            outer_radius: 15.0,
            inner_radius: 5.0,
            height: 20.0,
            num_turns: 5.0,
            phase_offset: 0.0,
            struct_lines: 1.0,
            target_spacing: 0.3,
            arc_span_deg: 30.0,
            arc_density: 5,
            layers_per_turn: 1.0,
        }
    }
}

impl SpiralConfig {
    /// Set the outer and inner base radii.
    #[must_use]
    pub const fn with_radii(mut self, outer: f64, inner: f64) -> Self {
        self.outer_radius = outer;
        self.inner_radius = inner;
        self
    }

    /// Set the total height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the number of turns.
    #[must_use]
    pub const fn with_turns(mut self, turns: f64) -> Self {
        self.num_turns = turns;
        self
    }

    /// Set the inner shell's angular offset in radians.
    #[must_use]
    pub const fn with_phase_offset(mut self, radians: f64) -> Self {
        self.phase_offset = radians;
        self
    }

    /// Set the structural line density factor.
    #[must_use]
    pub const fn with_struct_lines(mut self, density: f64) -> Self {
        self.struct_lines = density;
        self
    }

    /// Set the target anchor spacing for the connection net.
    #[must_use]
    pub const fn with_target_spacing(mut self, spacing: f64) -> Self {
        self.target_spacing = spacing;
        self
    }

    /// Set the fan geometry: angular span in degrees and points per fan.
    #[must_use]
    pub const fn with_fan(mut self, span_deg: f64, density: usize) -> Self {
        self.arc_span_deg = span_deg;
        self.arc_density = density;
        self
    }

    /// Set the layer discretization density.
    #[must_use]
    pub const fn with_layers_per_turn(mut self, layers: f64) -> Self {
        self.layers_per_turn = layers;
        self
    }

    /// Validate the configuration.
    ///
    /// Checks are ordered so the first structural problem is reported:
    /// radii, height, turns, then the net discretization fields. A rejected
    /// configuration never reaches geometry evaluation.
    ///
    /// # Errors
    ///
    /// Returns a [`SpiralError`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        self.check_finite()?;

        if self.outer_radius <= 0.0 {
            return Err(SpiralError::not_positive("outer_radius", self.outer_radius));
        }
        if self.inner_radius < 0.0 {
            return Err(SpiralError::NegativeInnerRadius(self.inner_radius));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(SpiralError::RadiusOrder {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if self.height <= 0.0 {
            return Err(SpiralError::not_positive("height", self.height));
        }
        if self.num_turns <= 0.0 {
            return Err(SpiralError::not_positive("num_turns", self.num_turns));
        }
        if self.struct_lines <= 0.0 {
            return Err(SpiralError::not_positive("struct_lines", self.struct_lines));
        }
        if self.target_spacing <= 0.0 {
            return Err(SpiralError::not_positive(
                "target_spacing",
                self.target_spacing,
            ));
        }
        if self.arc_span_deg <= 0.0 || self.arc_span_deg > 360.0 {
            return Err(SpiralError::ArcSpanOutOfRange(self.arc_span_deg));
        }
        if self.arc_density < 2 {
            return Err(SpiralError::ArcDensityTooSmall(self.arc_density));
        }
        if self.layers_per_turn <= 0.0 {
            return Err(SpiralError::not_positive(
                "layers_per_turn",
                self.layers_per_turn,
            ));
        }

        Ok(())
    }

    fn check_finite(&self) -> Result<()> {
        let fields = [
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("height", self.height),
            ("num_turns", self.num_turns),
            ("phase_offset", self.phase_offset),
            ("struct_lines", self.struct_lines),
            ("target_spacing", self.target_spacing),
            ("arc_span_deg", self.arc_span_deg),
            ("layers_per_turn", self.layers_per_turn),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SpiralError::non_finite(field, value));
            }
        }
        Ok(())
    }

    /// Number of ring layers the discretization policies produce.
    ///
    /// `round(num_turns * layers_per_turn)`, at least 1, so a fractional
    /// turn count still yields a valid partition.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        let layers = (self.num_turns * self.layers_per_turn).round();
        if layers < 1.0 {
            1
        } else {
            layers as usize
        }
    }
}
