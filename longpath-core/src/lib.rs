//! Longpath core library: heuristic longest-simple-path estimation over the
//! largest connected component of a sparse undirected graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod component;
mod degree;
mod error;
mod estimate;
mod estimator;
mod graph;
mod result;
mod source;

pub use crate::{
    builder::{DEFAULT_RNG_SEED, EstimatorBuilder, Strategy},
    component::{Component, largest_component},
    degree::DegreeStats,
    error::{EstimateError, EstimateErrorCode, Result},
    estimate::{Heuristic, ZeroHeuristic},
    estimator::Estimator,
    graph::{Graph, VertexId},
    result::{PathEstimate, StrategyKind},
    source::{EdgeRecord, GraphSource},
};
