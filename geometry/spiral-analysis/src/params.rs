//! Analysis fidelity parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fidelity knobs for one analysis run.
///
/// These control discretization quality, not geometry — the spiral itself
/// is fully described by its `SpiralConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisParams {
    /// Points sampled per shell for the numerical estimator and the
    /// rendered point sequences.
    pub numerical_samples: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            numerical_samples: spiral_measure::DEFAULT_SAMPLES,
        }
    }
}

impl AnalysisParams {
    /// Parameters for a high-fidelity run (10x the default sampling).
    #[must_use]
    pub const fn high_fidelity() -> Self {
        Self {
            numerical_samples: 10_000,
        }
    }

    /// Set the per-shell sample count.
    #[must_use]
    pub const fn with_samples(mut self, samples: usize) -> Self {
        self.numerical_samples = samples;
        self
    }
}
