//! Max-ordered frontier entries for the relaxation search.
//!
//! The frontier is a plain [`std::collections::BinaryHeap`] keyed on the
//! natural score, so the best-scored vertex pops first without any
//! sign-inversion trickery.

use std::cmp::Ordering;

/// A frontier entry: a dense vertex index scored by
/// `best_distance + heuristic`.
#[derive(Clone, Copy, Debug)]
pub(super) struct ScoredVertex {
    pub(super) score: f64,
    pub(super) vertex: usize,
}

impl Eq for ScoredVertex {}

impl PartialEq for ScoredVertex {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for ScoredVertex {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are finite by construction; ties fall back to the vertex
        // index so pop order stays deterministic.
        self.score
            .total_cmp(&other.score)
            .then(self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for ScoredVertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
