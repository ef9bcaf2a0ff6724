//! Connected-component discovery over a [`Graph`].
//!
//! Traversal is iterative with an explicit work-list so components that
//! approach the full vertex count cannot exhaust the call stack.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::{EstimateError, Result},
    graph::{Graph, VertexId},
};

/// A set of mutually reachable vertices.
///
/// Computed, never persisted: a component only lives for the duration of one
/// extraction and the estimation calls that consume it.
///
/// # Examples
/// ```
/// use longpath_core::{Graph, VertexId, largest_component};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// let component = largest_component(&graph).expect("graph is not empty");
/// assert_eq!(component.len(), 2);
/// assert!(component.contains(VertexId::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Component {
    vertices: Vec<VertexId>,
    members: HashSet<VertexId>,
}

impl Component {
    fn from_vertices(vertices: Vec<VertexId>) -> Self {
        let members = vertices.iter().copied().collect();
        Self { vertices, members }
    }

    /// Forges a component from raw vertices, bypassing the traversal.
    ///
    /// Only tests use this; it can describe vertex sets that are not actually
    /// connected.
    #[cfg(test)]
    pub(crate) fn from_parts(vertices: Vec<VertexId>) -> Self {
        Self::from_vertices(vertices)
    }

    /// Returns the number of vertices in the component.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the component is empty.
    ///
    /// Components produced by [`largest_component`] are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether `vertex` belongs to the component.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }

    /// Returns the component's vertices in first-visited order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }
}

/// Finds the largest connected component of `graph`.
///
/// Every vertex is visited exactly once across the whole scan (total work
/// `O(V + E)`); ties between equally sized components are broken in favour of
/// the first one found in the graph's deterministic vertex order.
///
/// # Errors
/// Returns [`EstimateError::EmptyGraph`] when the graph has no vertices.
///
/// # Examples
/// ```
/// use longpath_core::{Graph, VertexId, largest_component};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// graph.add_unit_edge(VertexId::new(2), VertexId::new(3));
/// graph.add_unit_edge(VertexId::new(8), VertexId::new(9));
///
/// let component = largest_component(&graph)?;
/// assert_eq!(component.len(), 3);
/// # Ok::<(), longpath_core::EstimateError>(())
/// ```
pub fn largest_component(graph: &Graph) -> Result<Component> {
    if graph.is_empty() {
        return Err(EstimateError::EmptyGraph);
    }

    let mut largest: Vec<VertexId> = Vec::new();
    for candidate in scan_components(graph) {
        if candidate.len() > largest.len() {
            largest = candidate;
        }
    }
    debug!(size = largest.len(), "largest component selected");
    Ok(Component::from_vertices(largest))
}

/// Partitions the vertex set into connected components.
///
/// Each traversal is an explicit-stack depth-first walk; vertices are marked
/// visited when pushed so no vertex enters the work-list twice.
fn scan_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.vertex_count());
    let mut components = Vec::new();

    for root in graph.vertex_ids() {
        if !visited.insert(root) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            component.push(vertex);
            for (neighbour, _) in graph.neighbours(vertex) {
                if visited.insert(neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        components.push(component);
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn cycle4() -> Graph {
        let mut graph = Graph::new();
        graph.add_unit_edge(v(1), v(2));
        graph.add_unit_edge(v(2), v(3));
        graph.add_unit_edge(v(3), v(4));
        graph.add_unit_edge(v(4), v(1));
        graph
    }

    #[test]
    fn empty_graph_is_rejected() {
        let graph = Graph::new();
        let err = largest_component(&graph).expect_err("empty graph must be rejected");
        assert!(matches!(err, EstimateError::EmptyGraph));
    }

    #[test]
    fn cycle_is_a_single_component() {
        let component = largest_component(&cycle4()).expect("component must exist");
        assert_eq!(component.len(), 4);
        for id in 1..=4 {
            assert!(component.contains(v(id)), "vertex {id} missing");
        }
    }

    #[test]
    fn larger_of_two_components_wins() {
        let mut graph = Graph::new();
        // Three-vertex path.
        graph.add_unit_edge(v(1), v(2));
        graph.add_unit_edge(v(2), v(3));
        // Five-vertex path, disjoint from the first.
        graph.add_unit_edge(v(10), v(11));
        graph.add_unit_edge(v(11), v(12));
        graph.add_unit_edge(v(12), v(13));
        graph.add_unit_edge(v(13), v(14));

        let component = largest_component(&graph).expect("component must exist");
        assert_eq!(component.len(), 5);
        assert!(component.contains(v(10)));
        assert!(!component.contains(v(1)));
    }

    #[test]
    fn equal_sizes_break_ties_by_first_found() {
        let mut graph = Graph::new();
        graph.add_unit_edge(v(1), v(2));
        graph.add_unit_edge(v(10), v(11));

        let component = largest_component(&graph).expect("component must exist");
        assert!(component.contains(v(1)));
        assert!(!component.contains(v(10)));
    }

    #[test]
    fn deep_path_does_not_recurse() {
        // A 50_000-vertex path would overflow the stack under naive
        // recursion; the explicit work-list must walk it without issue.
        let mut graph = Graph::with_capacity(50_000);
        for id in 0..49_999u64 {
            graph.add_unit_edge(v(id), v(id + 1));
        }
        let component = largest_component(&graph).expect("component must exist");
        assert_eq!(component.len(), 50_000);
    }

    /// Builds a graph from arbitrary edges over a small id space so that
    /// multi-component layouts are common.
    fn arbitrary_graph() -> impl Strategy<Value = Graph> {
        prop::collection::vec((0u64..40, 0u64..40), 1..80).prop_map(|edges| {
            let mut graph = Graph::new();
            for (u, w) in edges {
                graph.add_unit_edge(VertexId::new(u), VertexId::new(w));
            }
            graph
        })
    }

    proptest! {
        #[test]
        fn components_partition_the_vertex_set(graph in arbitrary_graph()) {
            let components = scan_components(&graph);

            let mut seen = HashSet::new();
            for component in &components {
                for vertex in component {
                    prop_assert!(seen.insert(*vertex), "vertex {vertex} appears twice");
                }
            }
            let all: HashSet<_> = graph.vertex_ids().collect();
            prop_assert_eq!(seen, all);

            let largest = largest_component(&graph).expect("graph is non-empty");
            for component in &components {
                prop_assert!(largest.len() >= component.len());
            }
        }
    }
}
