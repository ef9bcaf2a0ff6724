//! Builder for configuring estimation runs.
//!
//! Strategy selection, the sample-count override and the RNG seed are the
//! whole configuration surface; everything else is a call parameter.

use std::num::NonZeroUsize;

use crate::{
    error::{EstimateError, Result},
    estimator::Estimator,
    graph::VertexId,
};

/// Default RNG seed used when the caller does not supply one.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_BA5E;

/// Selects which estimation strategy an [`Estimator`] runs.
///
/// # Examples
/// ```
/// use longpath_core::{Strategy, VertexId};
///
/// let strategy = Strategy::SinglePair {
///     source: VertexId::new(1),
///     destination: VertexId::new(3),
/// };
/// assert!(matches!(strategy, Strategy::SinglePair { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Best-first max-relaxation between a fixed source and destination.
    SinglePair {
        /// Search origin; must belong to the component.
        source: VertexId,
        /// Search target; must belong to the component.
        destination: VertexId,
    },
    /// Multi-source sampled max-relaxation over random sources.
    SampledRelaxation,
    /// Repeated double-sweep depth trials.
    DoubleSweep,
}

/// Configures and constructs [`Estimator`] instances.
///
/// # Examples
/// ```
/// use longpath_core::{EstimatorBuilder, Strategy};
///
/// let estimator = EstimatorBuilder::new()
///     .with_strategy(Strategy::SampledRelaxation)
///     .with_sample_count(8)
///     .with_rng_seed(7)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(estimator.rng_seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorBuilder {
    strategy: Strategy,
    sample_count: Option<usize>,
    rng_seed: u64,
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self {
            strategy: Strategy::DoubleSweep,
            sample_count: None,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl EstimatorBuilder {
    /// Creates a builder populated with default parameters: the double-sweep
    /// strategy, the `round(sqrt(|component|))` sample count and
    /// [`DEFAULT_RNG_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the estimation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the currently configured strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Overrides the number of randomised trials.
    ///
    /// Without an override the randomised strategies use
    /// `round(sqrt(|component|))`, with a minimum of one trial.
    #[must_use]
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = Some(count);
        self
    }

    /// Returns the configured sample-count override, if any.
    #[must_use]
    pub fn sample_count(&self) -> Option<usize> {
        self.sample_count
    }

    /// Seeds the trial RNG to make runs reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the configured RNG seed.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Validates the configuration and constructs an [`Estimator`].
    ///
    /// # Errors
    /// Returns [`EstimateError::SampleSizeInvalid`] when a sample-count
    /// override is zero.
    pub fn build(self) -> Result<Estimator> {
        let sample_count = match self.sample_count {
            None => None,
            Some(count) => Some(
                NonZeroUsize::new(count)
                    .ok_or(EstimateError::SampleSizeInvalid { got: count })?,
            ),
        };
        Ok(Estimator::new(self.strategy, sample_count, self.rng_seed))
    }
}
