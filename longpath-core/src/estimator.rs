//! Estimation orchestration: validation, strategy dispatch and result
//! assembly.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    builder::Strategy,
    component::Component,
    error::{EstimateError, Result},
    estimate::{
        CompactLcc, Heuristic, ZeroHeuristic, double_sweep, max_relaxation, sampled_relaxation,
    },
    graph::{Graph, VertexId},
    result::{PathEstimate, StrategyKind},
};

/// Entry point for running a configured estimation.
///
/// Construct via [`crate::EstimatorBuilder`]. Each call builds a fresh dense
/// arena over the component, runs the selected strategy and discards the
/// arena with the call; estimators are cheap to reuse across graphs.
///
/// # Examples
/// ```
/// use longpath_core::{EstimatorBuilder, Graph, Strategy, VertexId, largest_component};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// graph.add_unit_edge(VertexId::new(2), VertexId::new(3));
/// graph.add_unit_edge(VertexId::new(3), VertexId::new(4));
/// let component = largest_component(&graph)?;
///
/// let estimator = EstimatorBuilder::new()
///     .with_strategy(Strategy::SinglePair {
///         source: VertexId::new(1),
///         destination: VertexId::new(4),
///     })
///     .build()?;
/// let estimate = estimator.estimate(&graph, &component)?;
/// assert_eq!(estimate.hops(), 3);
/// # Ok::<(), longpath_core::EstimateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    strategy: Strategy,
    sample_count: Option<NonZeroUsize>,
    rng_seed: u64,
}

impl Estimator {
    pub(crate) fn new(
        strategy: Strategy,
        sample_count: Option<NonZeroUsize>,
        rng_seed: u64,
    ) -> Self {
        Self {
            strategy,
            sample_count,
            rng_seed,
        }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the sample-count override, if one was configured.
    #[must_use]
    pub fn sample_count(&self) -> Option<NonZeroUsize> {
        self.sample_count
    }

    /// Returns the RNG seed in effect for randomised strategies.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Estimates the longest simple path inside `component`.
    ///
    /// Equivalent to [`Self::estimate_with_heuristic`] with the zero
    /// heuristic, i.e. pure max-relaxation exploration order.
    ///
    /// # Errors
    /// See [`Self::estimate_with_heuristic`].
    pub fn estimate(&self, graph: &Graph, component: &Component) -> Result<PathEstimate> {
        self.estimate_with_heuristic(graph, component, &ZeroHeuristic)
    }

    /// Estimates the longest simple path using `heuristic` to bias frontier
    /// order in the relaxation strategies.
    ///
    /// The double-sweep strategy ignores the heuristic; it has no frontier.
    ///
    /// # Errors
    /// Returns [`EstimateError::VertexNotInComponent`] when a single-pair
    /// endpoint lies outside `component` and
    /// [`EstimateError::DisconnectedPair`] when the destination was never
    /// reached (impossible for a genuinely connected component, checked
    /// defensively).
    #[instrument(
        name = "core.estimate",
        err,
        skip(self, graph, component, heuristic),
        fields(
            strategy = ?self.strategy,
            component_size = component.len(),
            seed = self.rng_seed,
        ),
    )]
    pub fn estimate_with_heuristic<H: Heuristic + Sync>(
        &self,
        graph: &Graph,
        component: &Component,
        heuristic: &H,
    ) -> Result<PathEstimate> {
        let lcc = CompactLcc::from_component(graph, component);
        let estimate = match self.strategy {
            Strategy::SinglePair {
                source,
                destination,
            } => self.run_single_pair(&lcc, source, destination, heuristic)?,
            Strategy::SampledRelaxation => self.run_sampled(&lcc, heuristic),
            Strategy::DoubleSweep => self.run_double_sweep(&lcc),
        };
        info!(
            strategy = %estimate.strategy(),
            length = estimate.length(),
            trials = estimate.trials(),
            "estimation completed"
        );
        Ok(estimate)
    }

    fn run_single_pair<H: Heuristic>(
        &self,
        lcc: &CompactLcc,
        source: VertexId,
        destination: VertexId,
        heuristic: &H,
    ) -> Result<PathEstimate> {
        let source_index = lcc
            .index_of(source)
            .ok_or(EstimateError::VertexNotInComponent { vertex: source })?;
        let destination_index = lcc
            .index_of(destination)
            .ok_or(EstimateError::VertexNotInComponent {
                vertex: destination,
            })?;

        let outcome = max_relaxation(lcc, source_index, heuristic);
        let length = outcome.distance(destination_index);
        if !length.is_finite() {
            return Err(EstimateError::DisconnectedPair {
                source_vertex: source,
                destination,
            });
        }

        let path = outcome
            .walk_back(destination_index)
            .into_iter()
            .map(|index| lcc.vertex_id(index))
            .collect();
        Ok(PathEstimate::new(StrategyKind::SinglePair, length, 1).with_path(path))
    }

    fn run_sampled<H: Heuristic + Sync>(&self, lcc: &CompactLcc, heuristic: &H) -> PathEstimate {
        let trials = self.trials(lcc.len());
        let length = sampled_relaxation(lcc, trials, self.rng_seed, heuristic);
        PathEstimate::new(StrategyKind::SampledRelaxation, length, trials)
    }

    fn run_double_sweep(&self, lcc: &CompactLcc) -> PathEstimate {
        let trials = self.trials(lcc.len());
        let depth = double_sweep(lcc, trials, self.rng_seed);
        PathEstimate::new(StrategyKind::DoubleSweep, depth as f64, trials)
    }

    /// Resolves the trial count: the override if present, otherwise
    /// `round(sqrt(n))` with a floor of one.
    fn trials(&self, component_size: usize) -> usize {
        self.sample_count
            .map_or_else(|| default_trial_count(component_size), NonZeroUsize::get)
    }
}

fn default_trial_count(component_size: usize) -> usize {
    let derived = (component_size as f64).sqrt().round() as usize;
    derived.max(1)
}
