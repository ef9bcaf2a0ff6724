//! Max-relaxation search: the shared engine behind the single-pair and
//! sampled strategies.
//!
//! The search mirrors shortest-path relaxation with the comparison inverted:
//! a vertex's best-known value only improves when a *larger* candidate is
//! found. Because longest paths have no optimal-substructure guarantee, the
//! finalised values are heuristic estimates of the longest walk reaching each
//! vertex under the exploration order, not proven longest simple paths.

use std::collections::BinaryHeap;

use tracing::warn;

use super::{arena::CompactLcc, frontier::ScoredVertex, heuristic::Heuristic};

/// Per-vertex search state, arena-indexed and dropped with the outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    /// Best distance reached so far; `NEG_INFINITY` means unreached.
    pub(crate) best_distance: f64,
    /// Arena index of the relaxing vertex, for path reconstruction only.
    pub(crate) predecessor: Option<usize>,
}

/// Result of one max-relaxation run from a single source.
#[derive(Debug)]
pub(crate) struct RelaxationOutcome {
    nodes: Vec<SearchNode>,
}

impl RelaxationOutcome {
    /// Returns the best distance finalised for `vertex`.
    pub(crate) fn distance(&self, vertex: usize) -> f64 {
        self.nodes[vertex].best_distance
    }

    /// Returns the maximum finite distance over all reached vertices.
    pub(crate) fn max_finite_distance(&self) -> f64 {
        self.nodes
            .iter()
            .map(|node| node.best_distance)
            .filter(|distance| distance.is_finite())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Walks the predecessor chain backwards from `destination`.
    ///
    /// The returned indices run source-first. The walk is bounded by the
    /// arena size; finalisation order is topological for predecessor edges,
    /// so the bound cannot trigger in practice. The path is not guaranteed
    /// to be vertex-simple.
    pub(crate) fn walk_back(&self, destination: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(vertex) = current {
            path.push(vertex);
            if path.len() > self.nodes.len() {
                warn!(destination, "predecessor walk exceeded arena size; truncating");
                break;
            }
            current = self.nodes[vertex].predecessor;
        }
        path.reverse();
        path
    }
}

/// Upper bound on frontier pops for one run.
///
/// Relaxation only happens out of a freshly finalised vertex, so each stored
/// adjacency entry causes at most one push and total pops cannot exceed
/// `1 + adjacency entries`. The cap sits above that bound; reaching it means
/// the input or the engine changed in a way that broke the argument, and the
/// run stops rather than looping.
fn pop_cap(lcc: &CompactLcc) -> usize {
    2 * lcc.adjacency_entries() + lcc.len() + 1
}

/// Runs one max-relaxation search from `source` to exhaustion.
///
/// Every vertex's best distance starts at negative infinity except the
/// source (zero). The best-scored frontier vertex is finalised on first pop;
/// its unfinalised neighbours are relaxed and re-inserted on improvement, so
/// a vertex may sit in the frontier several times and stale entries are
/// skipped. The search terminates when the frontier drains (or the defensive
/// pop cap fires); it never stops early at a destination, heuristic or not.
pub(crate) fn max_relaxation<H: Heuristic>(
    lcc: &CompactLcc,
    source: usize,
    heuristic: &H,
) -> RelaxationOutcome {
    let vertex_count = lcc.len();
    let mut nodes = vec![
        SearchNode {
            best_distance: f64::NEG_INFINITY,
            predecessor: None,
        };
        vertex_count
    ];
    nodes[source].best_distance = 0.0;

    let mut finalised = vec![false; vertex_count];
    let mut frontier = BinaryHeap::new();
    frontier.push(ScoredVertex {
        score: heuristic.score(lcc.vertex_id(source)),
        vertex: source,
    });

    let cap = pop_cap(lcc);
    let mut pops = 0usize;
    while let Some(ScoredVertex { vertex, .. }) = frontier.pop() {
        pops += 1;
        if pops > cap {
            warn!(pops, cap, "relaxation pop cap reached; stopping search");
            break;
        }
        if finalised[vertex] {
            continue;
        }
        finalised[vertex] = true;

        let base = nodes[vertex].best_distance;
        for &(neighbour, weight) in lcc.neighbours(vertex) {
            if finalised[neighbour] {
                continue;
            }
            let candidate = base + weight;
            if candidate > nodes[neighbour].best_distance {
                nodes[neighbour].best_distance = candidate;
                nodes[neighbour].predecessor = Some(vertex);
                frontier.push(ScoredVertex {
                    score: candidate + heuristic.score(lcc.vertex_id(neighbour)),
                    vertex: neighbour,
                });
            }
        }
    }

    RelaxationOutcome { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        component::largest_component,
        estimate::heuristic::ZeroHeuristic,
        graph::{Graph, VertexId},
    };

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn arena(graph: &Graph) -> CompactLcc {
        let component = largest_component(graph).expect("component must exist");
        CompactLcc::from_component(graph, &component)
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
    fn cycle_terminates_with_bounded_distances() {
        let graph = cycle4();
        let lcc = arena(&graph);
        let source = lcc.index_of(v(1)).expect("vertex 1 in arena");
        let destination = lcc.index_of(v(3)).expect("vertex 3 in arena");

        let outcome = max_relaxation(&lcc, source, &ZeroHeuristic);
        // Opposite corner of the cycle: two hops via either arc.
        assert!((outcome.distance(destination) - 2.0).abs() < f64::EPSILON);
        assert!((outcome.distance(source) - 0.0).abs() < f64::EPSILON);
        assert!((outcome.max_finite_distance() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn path_graph_distances_count_hops() {
        let mut graph = Graph::new();
        for id in 1..10u64 {
            graph.add_unit_edge(v(id), v(id + 1));
        }
        let lcc = arena(&graph);
        let source = lcc.index_of(v(1)).expect("vertex 1 in arena");
        let far_end = lcc.index_of(v(10)).expect("vertex 10 in arena");

        let outcome = max_relaxation(&lcc, source, &ZeroHeuristic);
        assert!((outcome.distance(far_end) - 9.0).abs() < f64::EPSILON);
        assert!((outcome.max_finite_distance() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weighted_edges_accumulate() {
        let mut graph = Graph::new();
        graph.add_edge(v(1), v(2), 1.5);
        graph.add_edge(v(2), v(3), 2.5);
        let lcc = arena(&graph);
        let source = lcc.index_of(v(1)).expect("vertex 1 in arena");
        let last = lcc.index_of(v(3)).expect("vertex 3 in arena");

        let outcome = max_relaxation(&lcc, source, &ZeroHeuristic);
        assert!((outcome.distance(last) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_component_vertices_end_finite_and_non_negative() {
        let graph = cycle4();
        let lcc = arena(&graph);
        let outcome = max_relaxation(&lcc, 0, &ZeroHeuristic);
        for vertex in 0..lcc.len() {
            let distance = outcome.distance(vertex);
            assert!(distance.is_finite());
            assert!(distance >= 0.0);
        }
    }

    #[test]
    fn predecessor_walk_reaches_the_source_within_bounds() {
        let graph = cycle4();
        let lcc = arena(&graph);
        let source = lcc.index_of(v(1)).expect("vertex 1 in arena");
        let destination = lcc.index_of(v(3)).expect("vertex 3 in arena");

        let outcome = max_relaxation(&lcc, source, &ZeroHeuristic);
        let path = outcome.walk_back(destination);
        assert!(path.len() <= lcc.len());
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&destination));
    }

    #[test]
    fn heuristic_biases_order_not_reachability() {
        struct FavourVertex(u64);
        impl Heuristic for FavourVertex {
            fn score(&self, vertex: VertexId) -> f64 {
                if vertex.get() == self.0 { 10.0 } else { 0.0 }
            }
        }

        let graph = cycle4();
        let lcc = arena(&graph);
        let source = lcc.index_of(v(1)).expect("vertex 1 in arena");
        let outcome = max_relaxation(&lcc, source, &FavourVertex(4));
        for vertex in 0..lcc.len() {
            assert!(outcome.distance(vertex).is_finite());
        }
    }
}
