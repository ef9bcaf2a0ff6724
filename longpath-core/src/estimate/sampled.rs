//! Multi-source sampled max-relaxation (the second strategy).
//!
//! Randomisation exists purely to bound runtime on large components: a full
//! all-pairs computation is infeasible, so sources are sampled uniformly
//! with replacement and each seeds an independent run of the relaxation
//! engine. The per-trial searches are embarrassingly parallel; each owns a
//! private distance arena over the shared read-only subgraph and the final
//! reduction is a plain associative max.

use rand::{Rng, SeedableRng, rngs::SmallRng};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::{
    arena::CompactLcc, heuristic::Heuristic, relaxation::max_relaxation, seed::mix_trial_seed,
};

/// Runs `trials` independent relaxation searches and returns the maximum of
/// the per-source maxima.
///
/// Trial `i` draws its source from an RNG seeded by
/// [`mix_trial_seed`]`(base_seed, i)`, so a longer schedule extends a shorter
/// one and the estimate can only grow with the trial count.
#[cfg(not(feature = "rayon"))]
pub(crate) fn sampled_relaxation<H: Heuristic + Sync>(
    lcc: &CompactLcc,
    trials: usize,
    base_seed: u64,
    heuristic: &H,
) -> f64 {
    (0..trials)
        .map(|trial| trial_maximum(lcc, base_seed, trial, heuristic))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Parallel variant: identical trial seeds, identical result, any worker
/// order.
#[cfg(feature = "rayon")]
pub(crate) fn sampled_relaxation<H: Heuristic + Sync>(
    lcc: &CompactLcc,
    trials: usize,
    base_seed: u64,
    heuristic: &H,
) -> f64 {
    (0..trials)
        .into_par_iter()
        .map(|trial| trial_maximum(lcc, base_seed, trial, heuristic))
        .reduce(|| f64::NEG_INFINITY, f64::max)
}

fn trial_maximum<H: Heuristic>(
    lcc: &CompactLcc,
    base_seed: u64,
    trial: usize,
    heuristic: &H,
) -> f64 {
    let mut rng = SmallRng::seed_from_u64(mix_trial_seed(base_seed, trial));
    let source = rng.gen_range(0..lcc.len());
    max_relaxation(lcc, source, heuristic).max_finite_distance()
}
