//! Deterministic per-trial seed derivation.
//!
//! Each randomised trial owns an independent RNG seeded from the base seed
//! and the trial index. The schedule is append-only: adding trials never
//! changes the seeds of earlier ones, which is what makes fixed-seed
//! estimates monotone in the trial count and lets parallel trial execution
//! reproduce the sequential results bit for bit.

/// SplitMix64 increment (the 64-bit golden ratio) spacing trial seeds apart.
const TRIAL_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(TRIAL_SEED_SPACING);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives the seed for trial `trial` from `base_seed`.
pub(crate) fn mix_trial_seed(base_seed: u64, trial: usize) -> u64 {
    splitmix64(base_seed ^ ((trial as u64 + 1).wrapping_mul(TRIAL_SEED_SPACING)))
}
