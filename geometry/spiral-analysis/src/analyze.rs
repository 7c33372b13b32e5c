//! The analysis pipeline.

use spiral_measure::compare_methods_from_samples;
use spiral_net::build_net;
use spiral_types::{DoubleConicalSpiral, Shell, SpiralConfig, SpiralPoint};
use tracing::{debug, info, warn};

use crate::params::AnalysisParams;
use crate::result::AnalysisResult;
use crate::AnalysisError;

/// Per-run shell samples, taken once and shared.
///
/// The same point sequences feed the numerical estimator and end up in the
/// result as the render substrate. Scoped to a single run so repeated
/// analyses stay independently reproducible.
struct RunSamples {
    outer: Vec<SpiralPoint>,
    inner: Vec<SpiralPoint>,
}

impl RunSamples {
    fn take(spiral: &DoubleConicalSpiral, samples: usize) -> Self {
        Self {
            outer: spiral.sample(Shell::Outer, samples),
            inner: spiral.sample(Shell::Inner, samples),
        }
    }
}

/// Analyze one spiral configuration end to end.
///
/// Validates the configuration, runs all three perimeter estimators,
/// builds the annular net, and assembles the aggregated record. Total
/// material is the spiral path itself (analytical estimate) plus the net
/// and the structural lines.
///
/// # Errors
///
/// Returns [`AnalysisError::Config`] for a rejected configuration, before
/// any geometry is evaluated.
///
/// # Example
///
/// ```
/// use spiral_analysis::{analyze, AnalysisParams};
/// use spiral_types::SpiralConfig;
///
/// let config = SpiralConfig::default()
///     .with_radii(15.0, 10.0)
///     .with_height(12.0)
///     .with_turns(8.0)
///     .with_struct_lines(10.0)
///     .with_target_spacing(0.9)
///     .with_fan(30.0, 10);
///
/// let result = analyze(&config, &AnalysisParams::default()).unwrap();
/// assert!((result.total_material - 13112.05).abs() < 1.0);
/// ```
pub fn analyze(
    config: &SpiralConfig,
    params: &AnalysisParams,
) -> Result<AnalysisResult, AnalysisError> {
    let spiral = DoubleConicalSpiral::new(*config)?;

    debug!(
        samples = params.numerical_samples,
        turns = config.num_turns,
        "analyzing spiral configuration"
    );

    let samples = RunSamples::take(&spiral, params.numerical_samples);
    let comparison = compare_methods_from_samples(&spiral, &samples.outer, &samples.inner)?;
    let net = build_net(&spiral);

    let net_length = net.net_length;
    let struct_line_length = net.struct_line_length;
    let total_material = comparison.analytical.total_length + net_length + struct_line_length;

    info!(
        spiral_length = format!("{:.2}", comparison.analytical.total_length),
        net_length = format!("{net_length:.2}"),
        total_material = format!("{total_material:.2}"),
        "analysis complete"
    );

    Ok(AnalysisResult {
        config: *config,
        comparison,
        net,
        outer_points: samples.outer,
        inner_points: samples.inner,
        net_length,
        struct_line_length,
        total_material,
    })
}

/// Analyze a batch of configurations.
///
/// Each configuration is processed independently; a rejected configuration
/// occupies its slot as an error while the rest of the batch continues.
/// Slot order matches the input order.
#[must_use]
pub fn analyze_batch(
    configs: &[SpiralConfig],
    params: &AnalysisParams,
) -> Vec<Result<AnalysisResult, AnalysisError>> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let outcome = analyze(config, params);
            if let Err(ref error) = outcome {
                warn!(index, %error, "configuration rejected, continuing batch");
            }
            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_config() -> SpiralConfig {
        SpiralConfig::default()
            .with_radii(15.0, 10.0)
            .with_height(12.0)
            .with_turns(8.0)
            .with_struct_lines(10.0)
            .with_target_spacing(0.9)
            .with_fan(30.0, 10)
    }

    #[test]
    fn test_reference_analysis() {
        let result = analyze(&reference_config(), &AnalysisParams::default()).unwrap();

        assert_relative_eq!(result.analytical_total(), 630.6407, epsilon = 1e-3);
        assert_relative_eq!(result.numerical_total(), 630.5739, epsilon = 1e-3);
        assert_relative_eq!(result.circular_total(), 628.3185, epsilon = 1e-3);
        assert_relative_eq!(result.net_length, 12361.4120, epsilon = 1e-2);
        assert_relative_eq!(result.struct_line_length, 120.0, epsilon = 1e-9);
        assert_relative_eq!(result.total_material, 13112.05, epsilon = 1e-1);
    }

    #[test]
    fn test_render_substrate_present() {
        let result = analyze(&reference_config(), &AnalysisParams::default()).unwrap();

        assert_eq!(result.outer_points.len(), 1000);
        assert_eq!(result.inner_points.len(), 1000);
        assert_eq!(result.net.layer_count, 8);
        assert!(result.net.layers[0].connection_count() > 0);

        // The numerical estimate was computed from exactly these points.
        let recomputed = spiral_measure::chord_length(&result.outer_points)
            + spiral_measure::chord_length(&result.inner_points);
        assert_relative_eq!(recomputed, result.numerical_total(), epsilon = 1e-9);
    }

    #[test]
    fn test_idempotence() {
        let params = AnalysisParams::default();
        let first = analyze(&reference_config(), &params).unwrap();
        let second = analyze(&reference_config(), &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_before_geometry() {
        let config = reference_config().with_radii(10.0, 15.0);
        let err = analyze(&config, &AnalysisParams::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let configs = [
            reference_config(),
            reference_config().with_height(-1.0),
            SpiralConfig::default(),
        ];
        let outcomes = analyze_batch(&configs, &AnalysisParams::default());

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_err());
        assert!(outcomes[2].is_ok());
    }

    #[test]
    fn test_display() {
        let result = analyze(&reference_config(), &AnalysisParams::default()).unwrap();
        let text = result.to_string();
        assert!(text.contains("total material 13112."));
    }
}
