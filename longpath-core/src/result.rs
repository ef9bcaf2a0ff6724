//! Result types for estimation runs.

use std::fmt;

use crate::graph::VertexId;

/// Which strategy produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StrategyKind {
    /// Single-pair max-relaxation search.
    SinglePair,
    /// Multi-source sampled max-relaxation.
    SampledRelaxation,
    /// Double-sweep depth heuristic.
    DoubleSweep,
}

impl StrategyKind {
    /// Returns the stable label used in reports and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SinglePair => "single-pair",
            Self::SampledRelaxation => "sampled-relaxation",
            Self::DoubleSweep => "double-sweep",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one estimation run.
///
/// # Examples
/// ```
/// use longpath_core::{EstimatorBuilder, Graph, Strategy, VertexId, largest_component};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// graph.add_unit_edge(VertexId::new(2), VertexId::new(3));
/// let component = largest_component(&graph)?;
///
/// let estimator = EstimatorBuilder::new()
///     .with_strategy(Strategy::DoubleSweep)
///     .build()?;
/// let estimate = estimator.estimate(&graph, &component)?;
/// assert_eq!(estimate.hops(), 2);
/// # Ok::<(), longpath_core::EstimateError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathEstimate {
    strategy: StrategyKind,
    length: f64,
    trials: usize,
    path: Option<Vec<VertexId>>,
}

impl PathEstimate {
    pub(crate) fn new(strategy: StrategyKind, length: f64, trials: usize) -> Self {
        Self {
            strategy,
            length,
            trials,
            path: None,
        }
    }

    pub(crate) fn with_path(mut self, path: Vec<VertexId>) -> Self {
        self.path = Some(path);
        self
    }

    /// Returns the strategy that produced this estimate.
    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Returns the estimated path length (hop count or additive weight).
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns the estimate as an integer hop count, truncating any
    /// fractional weight contribution.
    #[must_use]
    pub fn hops(&self) -> u64 {
        self.length.max(0.0).trunc() as u64
    }

    /// Returns how many randomised trials contributed to the estimate.
    ///
    /// The single-pair strategy always reports one trial.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the reconstructed vertex path for the single-pair strategy.
    ///
    /// The path follows the predecessor chain from destination back to
    /// source and is not guaranteed to be vertex-simple on cyclic graphs;
    /// this is a documented limitation of single-predecessor relaxation.
    #[must_use]
    pub fn path(&self) -> Option<&[VertexId]> {
        self.path.as_deref()
    }
}
