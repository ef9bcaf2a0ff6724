//! Benchmark support for the longpath estimation strategies.
//!
//! Builds calibrated geometric instances so every benchmark measures the
//! estimators against comparable largest-component sizes.

use thiserror::Error;

use longpath_core::{Component, EstimateError, Graph, GraphSource, largest_component};
use longpath_providers_geometric::{
    FractionBand, GeometricConfig, GeometricError, GeometricGraph, calibrate_radius,
};

/// Largest-component fraction band shared by all benchmark instances.
const BENCH_BAND: FractionBand = FractionBand { min: 0.9, max: 0.95 };

/// Errors raised while preparing benchmark inputs.
#[derive(Debug, Error)]
pub enum BenchSetupError {
    /// Instance generation or calibration failed.
    #[error(transparent)]
    Geometric(#[from] GeometricError),
    /// Component extraction failed.
    #[error(transparent)]
    Core(#[from] EstimateError),
}

/// Generates a calibrated geometric instance and extracts its largest
/// component.
///
/// # Errors
/// Returns [`BenchSetupError`] when calibration, generation or component
/// extraction fails.
pub fn calibrated_instance(
    vertices: usize,
    seed: u64,
) -> Result<(Graph, Component), BenchSetupError> {
    let radius = calibrate_radius(vertices, BENCH_BAND, seed)?;
    let instance = GeometricGraph::generate(&GeometricConfig {
        vertices,
        radius,
        seed,
    })?;
    let graph = instance.build_graph();
    let component = largest_component(&graph)?;
    Ok((graph, component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_are_reproducible() {
        let (_, a) = calibrated_instance(50, 42).expect("setup must succeed");
        let (_, b) = calibrated_instance(50, 42).expect("setup must succeed");
        assert_eq!(a.vertices(), b.vertices());
        assert!(a.len() >= 2);
    }
}
