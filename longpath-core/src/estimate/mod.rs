//! The longest-simple-path estimation engine.
//!
//! Three interchangeable strategies operate over a dense arena of the
//! component's vertices: a single-pair max-relaxation search, a multi-source
//! sampled max-relaxation, and a double-sweep depth heuristic. All three are
//! heuristics; none proves simplicity or an approximation bound.

mod arena;
mod frontier;
mod heuristic;
mod relaxation;
mod sampled;
mod seed;
mod sweep;

pub use heuristic::{Heuristic, ZeroHeuristic};

pub(crate) use arena::CompactLcc;
pub(crate) use relaxation::max_relaxation;
pub(crate) use sampled::sampled_relaxation;
pub(crate) use sweep::double_sweep;
