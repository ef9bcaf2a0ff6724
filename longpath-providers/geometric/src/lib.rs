//! Synthetic geometric graph provider.
//!
//! Generates random geometric graphs on the unit square: vertices are
//! uniform random points and an edge joins every pair within a connectivity
//! radius. Includes a binary-search calibration that finds a radius whose
//! largest connected component covers a requested fraction of the vertices,
//! and writers for the two textual encodings the edge-list provider reads.

mod calibrate;

pub use calibrate::{FractionBand, calibrate_radius};

use std::io::{self, Write};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use longpath_core::{EdgeRecord, GraphSource, VertexId};

/// Errors raised while generating or calibrating geometric instances.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometricError {
    /// The connectivity radius was negative or non-finite.
    #[error("connectivity radius {radius} must be non-negative and finite")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
    /// The calibration band was not within `0 < min <= max <= 1`.
    #[error("fraction band [{min}, {max}] must satisfy 0 < min <= max <= 1")]
    InvalidBand {
        /// Lower bound of the rejected band.
        min: f64,
        /// Upper bound of the rejected band.
        max: f64,
    },
    /// Calibration needs at least one vertex to measure a fraction against.
    #[error("cannot calibrate a radius for zero vertices")]
    VertexCountZero,
}

/// Parameters for one generated instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricConfig {
    /// Number of uniform random points to place.
    pub vertices: usize,
    /// Maximum Euclidean distance at which two points are joined.
    pub radius: f64,
    /// Seed for the point-placement RNG.
    pub seed: u64,
}

/// A point in the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    /// Horizontal coordinate in `[0, 1)`.
    pub x: f64,
    /// Vertical coordinate in `[0, 1)`.
    pub y: f64,
}

impl UnitPoint {
    fn distance(&self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A generated random geometric graph.
///
/// # Examples
/// ```
/// use longpath_core::GraphSource;
/// use longpath_providers_geometric::{GeometricConfig, GeometricGraph};
///
/// let graph = GeometricGraph::generate(&GeometricConfig {
///     vertices: 20,
///     radius: 0.5,
///     seed: 42,
/// })?;
/// assert_eq!(graph.points().len(), 20);
/// assert!(!graph.edges().is_empty());
/// # Ok::<(), longpath_providers_geometric::GeometricError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeometricGraph {
    name: String,
    points: Vec<UnitPoint>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<EdgeRecord>,
}

impl GeometricGraph {
    /// Generates an instance from `config`.
    ///
    /// Placement is deterministic for a fixed seed. Every pair of points
    /// within the radius is joined, so generation is quadratic in the vertex
    /// count; intended instance sizes are the hundreds-to-thousands used for
    /// estimator evaluation.
    ///
    /// # Errors
    /// Returns [`GeometricError::InvalidRadius`] when the radius is negative
    /// or non-finite.
    pub fn generate(config: &GeometricConfig) -> Result<Self, GeometricError> {
        if !config.radius.is_finite() || config.radius < 0.0 {
            return Err(GeometricError::InvalidRadius {
                radius: config.radius,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let points: Vec<UnitPoint> = (0..config.vertices)
            .map(|_| UnitPoint {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
            })
            .collect();

        let mut adjacency = vec![Vec::new(); config.vertices];
        let mut edges = Vec::new();
        for i in 0..config.vertices {
            for j in (i + 1)..config.vertices {
                if points[i].distance(points[j]) <= config.radius {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                    edges.push(EdgeRecord {
                        u: VertexId::new(i as u64),
                        v: VertexId::new(j as u64),
                        weight: None,
                    });
                }
            }
        }

        Ok(Self {
            name: format!("geometric-n{}", config.vertices),
            points,
            adjacency,
            edges,
        })
    }

    /// Returns the generated points in vertex order.
    #[must_use]
    pub fn points(&self) -> &[UnitPoint] {
        &self.points
    }

    /// Returns the size of the largest connected component, counting
    /// isolated vertices as singleton components.
    ///
    /// Calibration probes call this on throwaway instances, so the scan is
    /// self-contained and iterative.
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        let vertex_count = self.points.len();
        let mut visited = vec![false; vertex_count];
        let mut largest = 0usize;

        for root in 0..vertex_count {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            let mut size = 0usize;
            let mut stack = vec![root];
            while let Some(vertex) = stack.pop() {
                size += 1;
                for &neighbour in &self.adjacency[vertex] {
                    if !visited[neighbour] {
                        visited[neighbour] = true;
                        stack.push(neighbour);
                    }
                }
            }
            largest = largest.max(size);
        }
        largest
    }

    /// Writes the six-field geometric encoding (`u x_u y_u v x_v y_v`),
    /// one line per unordered pair with `u < v`, identifiers one-based.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    pub fn write_edges<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, neighbours) in self.adjacency.iter().enumerate() {
            for &j in neighbours {
                if i < j {
                    let a = self.points[i];
                    let b = self.points[j];
                    writeln!(writer, "{} {} {} {} {} {}", i + 1, a.x, a.y, j + 1, b.x, b.y)?;
                }
            }
        }
        Ok(())
    }

    /// Writes the two-field encoding (`u v`), one line per pair with
    /// `u <= v`, identifiers one-based.
    ///
    /// # Errors
    /// Propagates failures from `writer`.
    pub fn write_pairs<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, neighbours) in self.adjacency.iter().enumerate() {
            for &j in neighbours {
                if i <= j {
                    writeln!(writer, "{} {}", i + 1, j + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl GraphSource for GeometricGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }
}
