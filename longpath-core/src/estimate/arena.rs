//! Dense induced-subgraph arena for one estimation call.
//!
//! The component's vertices are renumbered into contiguous indices so that
//! search state lives in plain vectors. Adjacency entries whose far endpoint
//! is outside the component are dropped during construction; the strategies
//! therefore never dereference a vertex outside the set.

use std::collections::HashMap;

use crate::{
    component::Component,
    graph::{Graph, VertexId},
};

/// Induced subgraph of a component with dense vertex indices.
///
/// Owned exclusively by the estimation call that created it and dropped at
/// call return; predecessor references are indices into this arena, so no
/// lifetime management is needed.
#[derive(Debug)]
pub(crate) struct CompactLcc {
    ids: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    adjacency_entries: usize,
}

impl CompactLcc {
    /// Builds the arena from a graph restricted to `component`.
    pub(crate) fn from_component(graph: &Graph, component: &Component) -> Self {
        let ids: Vec<VertexId> = component.vertices().to_vec();
        let index: HashMap<VertexId, usize> = ids
            .iter()
            .copied()
            .enumerate()
            .map(|(dense, id)| (id, dense))
            .collect();

        let mut adjacency_entries = 0usize;
        let adjacency = ids
            .iter()
            .map(|id| {
                let entries: Vec<(usize, f64)> = graph
                    .neighbours(*id)
                    .filter_map(|(neighbour, weight)| {
                        index.get(&neighbour).map(|dense| (*dense, weight))
                    })
                    .collect();
                adjacency_entries += entries.len();
                entries
            })
            .collect();

        Self {
            ids,
            index,
            adjacency,
            adjacency_entries,
        }
    }

    /// Returns the number of vertices in the arena.
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Maps a dense index back to its vertex identifier.
    pub(crate) fn vertex_id(&self, index: usize) -> VertexId {
        self.ids[index]
    }

    /// Maps a vertex identifier to its dense index, if present.
    pub(crate) fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    /// Returns the in-component neighbours of a dense index.
    pub(crate) fn neighbours(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    /// Returns the total stored adjacency entry count, used to bound search
    /// iteration.
    pub(crate) fn adjacency_entries(&self) -> usize {
        self.adjacency_entries
    }
}
