//! Graph source abstraction consumed from the I/O layer.
//!
//! Concrete textual encodings live in provider crates; the core only sees a
//! finite, order-irrelevant sequence of edge records.

use crate::graph::{Graph, VertexId};

/// One undirected edge as delivered by a [`GraphSource`].
///
/// A missing weight means unit weight (hop-count semantics).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
    /// Optional non-negative edge weight; `None` means 1.0.
    pub weight: Option<f64>,
}

/// Abstraction over a finite collection of edge records.
///
/// Implementations parse or generate their edges eagerly so that iteration
/// here is infallible and restartable.
///
/// # Examples
/// ```
/// use longpath_core::{EdgeRecord, GraphSource, VertexId};
///
/// struct Fixed(Vec<EdgeRecord>);
///
/// impl GraphSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn edges(&self) -> &[EdgeRecord] { &self.0 }
/// }
///
/// let source = Fixed(vec![EdgeRecord {
///     u: VertexId::new(1),
///     v: VertexId::new(2),
///     weight: None,
/// }]);
/// let graph = source.build_graph();
/// assert_eq!(graph.vertex_count(), 2);
/// ```
pub trait GraphSource {
    /// Returns a human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Returns the edge records in delivery order.
    fn edges(&self) -> &[EdgeRecord];

    /// Returns whether the source delivered no edges.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.edges().is_empty()
    }

    /// Builds an adjacency-list graph from the edge records.
    ///
    /// Missing weights default to 1.0; duplicate records are inserted as
    /// given, matching the graph store's data model.
    #[must_use]
    fn build_graph(&self) -> Graph {
        let mut graph = Graph::with_capacity(self.edges().len());
        for record in self.edges() {
            graph.add_edge(record.u, record.v, record.weight.unwrap_or(1.0));
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture(Vec<EdgeRecord>);

    impl GraphSource for Fixture {
        fn name(&self) -> &str {
            "fixture"
        }
        fn edges(&self) -> &[EdgeRecord] {
            &self.0
        }
    }

    fn record(u: u64, v: u64, weight: Option<f64>) -> EdgeRecord {
        EdgeRecord {
            u: VertexId::new(u),
            v: VertexId::new(v),
            weight,
        }
    }

    #[test]
    fn build_graph_defaults_missing_weights_to_unit() {
        let source = Fixture(vec![record(1, 2, None), record(2, 3, Some(2.5))]);
        let graph = source.build_graph();

        let weights: Vec<_> = graph.neighbours(VertexId::new(2)).collect();
        assert_eq!(
            weights,
            vec![(VertexId::new(1), 1.0), (VertexId::new(3), 2.5)]
        );
    }

    #[test]
    fn empty_source_builds_empty_graph() {
        let source = Fixture(Vec::new());
        assert!(source.is_empty());
        assert!(source.build_graph().is_empty());
    }
}
