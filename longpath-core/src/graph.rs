//! Adjacency-list graph store for undirected graphs with integer vertex
//! identifiers.
//!
//! The graph is built once by bulk edge insertion and treated as read-only by
//! every downstream component; no removal operation exists.

use std::collections::HashMap;

/// Identifier of a vertex within a [`Graph`].
///
/// Identifiers are arbitrary non-negative integers and need not be
/// contiguous.
///
/// # Examples
/// ```
/// use longpath_core::VertexId;
///
/// let id = VertexId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new vertex identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Undirected adjacency-list graph.
///
/// Inserting an edge registers both endpoints as vertices on first sight and
/// records a symmetric adjacency entry for each. Duplicate edges and
/// self-loops are stored exactly as supplied; they are benign for traversal
/// but inflate raw degree counts, so callers wanting exact degree figures
/// must deduplicate their input.
///
/// # Examples
/// ```
/// use longpath_core::{Graph, VertexId};
///
/// let mut graph = Graph::new();
/// graph.add_unit_edge(VertexId::new(1), VertexId::new(2));
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.degree(VertexId::new(1)), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<VertexId, Vec<(VertexId, f64)>>,
    // First-seen insertion order; keeps traversal and tie-breaking
    // deterministic where HashMap iteration would not be.
    order: Vec<VertexId>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph sized for roughly `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
            order: Vec::with_capacity(vertices),
        }
    }

    /// Inserts an undirected edge between `u` and `v` with the given weight.
    ///
    /// Both endpoints are registered as vertices if they have not been seen
    /// before. Any identifier is valid; there are no error conditions.
    ///
    /// # Examples
    /// ```
    /// use longpath_core::{Graph, VertexId};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge(VertexId::new(7), VertexId::new(9), 2.5);
    /// let weights: Vec<f64> = graph
    ///     .neighbours(VertexId::new(7))
    ///     .map(|(_, w)| w)
    ///     .collect();
    /// assert_eq!(weights, vec![2.5]);
    /// ```
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) {
        self.register(u);
        self.register(v);
        if let Some(entries) = self.adjacency.get_mut(&u) {
            entries.push((v, weight));
        }
        if let Some(entries) = self.adjacency.get_mut(&v) {
            entries.push((u, weight));
        }
    }

    /// Inserts an undirected edge with unit weight (hop-count semantics).
    pub fn add_unit_edge(&mut self, u: VertexId, v: VertexId) {
        self.add_edge(u, v, 1.0);
    }

    fn register(&mut self, vertex: VertexId) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex, Vec::new());
            self.order.push(vertex);
        }
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns whether `vertex` has been registered.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Iterates over all vertex identifiers in first-seen order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Iterates over the neighbours of `vertex` together with edge weights.
    ///
    /// The iterator is lazy, finite and restartable; an unknown vertex yields
    /// an empty sequence.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
    }

    /// Returns the raw adjacency-list length of `vertex`.
    ///
    /// Duplicate edges count once per stored entry.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, Vec::len)
    }
}
