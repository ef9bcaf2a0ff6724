//! Degree statistics over a component's vertices.

use crate::{component::Component, graph::Graph};

/// Maximum and average raw adjacency-list length over a vertex subset.
///
/// Degrees count stored adjacency entries, so duplicate edges inflate both
/// figures; this mirrors the graph store's non-deduplicating data model.
///
/// # Examples
/// ```
/// use longpath_core::{DegreeStats, Graph, VertexId, largest_component};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// graph.add_unit_edge(VertexId::new(2), VertexId::new(3));
/// let component = largest_component(&graph).expect("graph is not empty");
///
/// let stats = DegreeStats::for_component(&graph, &component);
/// assert_eq!(stats.max(), 2);
/// assert!((stats.average() - 4.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeStats {
    max: usize,
    average: f64,
}

impl DegreeStats {
    /// Computes degree statistics for the vertices of `component`.
    #[must_use]
    pub fn for_component(graph: &Graph, component: &Component) -> Self {
        debug_assert!(!component.is_empty(), "components are never empty");
        let mut max = 0usize;
        let mut total = 0usize;
        for vertex in component.vertices() {
            let degree = graph.degree(*vertex);
            max = max.max(degree);
            total += degree;
        }
        let average = if component.is_empty() {
            0.0
        } else {
            total as f64 / component.len() as f64
        };
        Self { max, average }
    }

    /// Returns the maximum degree over the component.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Returns the average degree over the component.
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component::largest_component, graph::VertexId};

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn cycle_has_uniform_degree_two() {
        let mut graph = Graph::new();
        graph.add_unit_edge(v(1), v(2));
        graph.add_unit_edge(v(2), v(3));
        graph.add_unit_edge(v(3), v(4));
        graph.add_unit_edge(v(4), v(1));
        let component = largest_component(&graph).expect("component must exist");

        let stats = DegreeStats::for_component(&graph, &component);
        assert_eq!(stats.max(), 2);
        assert!((stats.average() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn star_centre_dominates_max_degree() {
        let mut graph = Graph::new();
        graph.add_unit_edge(v(0), v(1));
        graph.add_unit_edge(v(0), v(2));
        graph.add_unit_edge(v(0), v(3));
        let component = largest_component(&graph).expect("component must exist");

        let stats = DegreeStats::for_component(&graph, &component);
        assert_eq!(stats.max(), 3);
        assert!((stats.average() - 1.5).abs() < f64::EPSILON);
        assert!(stats.max() as f64 >= stats.average());
    }

    #[test]
    fn duplicate_edges_inflate_degrees() {
        let mut graph = Graph::new();
        graph.add_unit_edge(v(1), v(2));
        graph.add_unit_edge(v(1), v(2));
        let component = largest_component(&graph).expect("component must exist");

        let stats = DegreeStats::for_component(&graph, &component);
        assert_eq!(stats.max(), 2);
        assert!((stats.average() - 2.0).abs() < f64::EPSILON);
    }
}
