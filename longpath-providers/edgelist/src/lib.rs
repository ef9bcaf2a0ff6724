//! Edge-list provider for line-based textual graph encodings.
//!
//! Two encodings are supported: plain lines (`u v` with implied unit weight
//! or `u v weight`) and geometric lines (`u x_u y_u v x_v y_v`, where the
//! coordinate fields are retained as vertex positions but never consulted by
//! the estimator). Parsing is eager so the resulting [`GraphSource`] is
//! infallible to iterate.

use std::{collections::HashMap, io};

use thiserror::Error;

use longpath_core::{EdgeRecord, GraphSource, Heuristic, VertexId};

/// A 2-D vertex position parsed from the geometric encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Which textual encoding a reader contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// `u v` or `u v weight` lines.
    Plain,
    /// `u x_u y_u v x_v y_v` lines with positional coordinates.
    Geometric,
}

impl EdgeListFormat {
    /// Guesses the format from a line's whitespace-separated field count.
    #[must_use]
    pub fn detect(field_count: usize) -> Option<Self> {
        match field_count {
            2 | 3 => Some(Self::Plain),
            6 => Some(Self::Geometric),
            _ => None,
        }
    }
}

/// Errors raised while ingesting an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// A line did not match the expected encoding.
    #[error("line {line}: {reason}")]
    MalformedRecord {
        /// One-based line number of the offending record.
        line: usize,
        /// Human-readable description of the mismatch.
        reason: String,
    },
    /// An edge weight was negative or non-finite.
    #[error("line {line}: edge weight {value} must be non-negative and finite")]
    InvalidWeight {
        /// One-based line number of the offending record.
        line: usize,
        /// The rejected weight value.
        value: f64,
    },
}

/// Line-based edge-list data source.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use longpath_providers_edgelist::EdgeListSource;
/// use longpath_core::GraphSource;
///
/// let source = EdgeListSource::from_reader("demo", Cursor::new("1 2\n2 3 0.5\n"))?;
/// assert_eq!(source.edges().len(), 2);
/// let graph = source.build_graph();
/// assert_eq!(graph.vertex_count(), 3);
/// # Ok::<(), longpath_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListSource {
    name: String,
    edges: Vec<EdgeRecord>,
    positions: HashMap<VertexId, Position>,
}

impl EdgeListSource {
    /// Parses an edge list, detecting the encoding from the first non-blank
    /// line.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] on I/O failures, malformed records or
    /// invalid weights.
    pub fn from_reader<R: io::BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        Self::parse(name.into(), reader, None)
    }

    /// Parses an edge list with an explicitly declared encoding.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] on I/O failures, malformed records or
    /// invalid weights.
    pub fn with_format<R: io::BufRead>(
        name: impl Into<String>,
        reader: R,
        format: EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        Self::parse(name.into(), reader, Some(format))
    }

    fn parse<R: io::BufRead>(
        name: String,
        reader: R,
        declared: Option<EdgeListFormat>,
    ) -> Result<Self, EdgeListError> {
        let mut format = declared;
        let mut edges = Vec::new();
        let mut positions = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let resolved = match format {
                Some(resolved) => resolved,
                None => {
                    let detected = EdgeListFormat::detect(fields.len()).ok_or_else(|| {
                        EdgeListError::MalformedRecord {
                            line: number,
                            reason: format!(
                                "expected 2, 3 or 6 fields, found {}",
                                fields.len()
                            ),
                        }
                    })?;
                    format = Some(detected);
                    detected
                }
            };

            match resolved {
                EdgeListFormat::Plain => edges.push(parse_plain(number, &fields)?),
                EdgeListFormat::Geometric => {
                    let (record, endpoints) = parse_geometric(number, &fields)?;
                    for (vertex, position) in endpoints {
                        positions.insert(vertex, position);
                    }
                    edges.push(record);
                }
            }
        }

        Ok(Self {
            name,
            edges,
            positions,
        })
    }

    /// Returns the positions parsed from a geometric edge list.
    ///
    /// Empty for the plain encoding. When a vertex appears on several lines
    /// the last position wins.
    #[must_use]
    pub fn positions(&self) -> &HashMap<VertexId, Position> {
        &self.positions
    }

    /// Returns the parsed position of `vertex`, if any.
    #[must_use]
    pub fn position(&self, vertex: VertexId) -> Option<Position> {
        self.positions.get(&vertex).copied()
    }
}

impl GraphSource for EdgeListSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }
}

fn parse_vertex(line: usize, raw: &str) -> Result<VertexId, EdgeListError> {
    raw.parse::<u64>()
        .map(VertexId::new)
        .map_err(|_| EdgeListError::MalformedRecord {
            line,
            reason: format!("invalid vertex id `{raw}`"),
        })
}

fn parse_coordinate(line: usize, raw: &str) -> Result<f64, EdgeListError> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| EdgeListError::MalformedRecord {
            line,
            reason: format!("invalid coordinate `{raw}`"),
        })?;
    if !value.is_finite() {
        return Err(EdgeListError::MalformedRecord {
            line,
            reason: format!("coordinate `{raw}` is not finite"),
        });
    }
    Ok(value)
}

fn parse_plain(line: usize, fields: &[&str]) -> Result<EdgeRecord, EdgeListError> {
    let (u_raw, v_raw, weight_raw) = match fields {
        [u, v] => (*u, *v, None),
        [u, v, w] => (*u, *v, Some(*w)),
        _ => {
            return Err(EdgeListError::MalformedRecord {
                line,
                reason: format!(
                    "expected `u v` or `u v weight`, found {} fields",
                    fields.len()
                ),
            });
        }
    };

    let u = parse_vertex(line, u_raw)?;
    let v = parse_vertex(line, v_raw)?;
    let weight = match weight_raw {
        None => None,
        Some(raw) => {
            let value = raw
                .parse::<f64>()
                .map_err(|_| EdgeListError::MalformedRecord {
                    line,
                    reason: format!("invalid weight `{raw}`"),
                })?;
            if !value.is_finite() || value < 0.0 {
                return Err(EdgeListError::InvalidWeight { line, value });
            }
            Some(value)
        }
    };
    Ok(EdgeRecord { u, v, weight })
}

type GeometricLine = (EdgeRecord, [(VertexId, Position); 2]);

fn parse_geometric(line: usize, fields: &[&str]) -> Result<GeometricLine, EdgeListError> {
    let (u_raw, ux, uy, v_raw, vx, vy) = match fields {
        [u, ux, uy, v, vx, vy] => (*u, *ux, *uy, *v, *vx, *vy),
        _ => {
            return Err(EdgeListError::MalformedRecord {
                line,
                reason: format!(
                    "expected `u x_u y_u v x_v y_v`, found {} fields",
                    fields.len()
                ),
            });
        }
    };

    let u = parse_vertex(line, u_raw)?;
    let v = parse_vertex(line, v_raw)?;
    let u_position = Position {
        x: parse_coordinate(line, ux)?,
        y: parse_coordinate(line, uy)?,
    };
    let v_position = Position {
        x: parse_coordinate(line, vx)?,
        y: parse_coordinate(line, vy)?,
    };

    Ok((
        EdgeRecord { u, v, weight: None },
        [(u, u_position), (v, v_position)],
    ))
}

/// Frontier-order bias that favours vertices close to a destination.
///
/// Built from the positions of a geometric edge list; vertices without a
/// known position score zero. Pure exploration-order bias: it never shortens
/// or terminates a search.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use longpath_core::{Heuristic, VertexId};
/// use longpath_providers_edgelist::{EdgeListSource, EuclideanHeuristic};
///
/// let data = "1 0.0 0.0 2 1.0 0.0\n2 1.0 0.0 3 2.0 0.0\n";
/// let source = EdgeListSource::from_reader("demo", Cursor::new(data))?;
/// let heuristic = EuclideanHeuristic::towards(&source, VertexId::new(3))
///     .expect("destination has a position");
/// assert!(heuristic.score(VertexId::new(2)) > heuristic.score(VertexId::new(1)));
/// # Ok::<(), longpath_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EuclideanHeuristic {
    positions: HashMap<VertexId, Position>,
    destination: Position,
}

impl EuclideanHeuristic {
    /// Builds a heuristic aiming at `destination`.
    ///
    /// Returns `None` when the source has no position for the destination,
    /// which is always the case for the plain encoding.
    #[must_use]
    pub fn towards(source: &EdgeListSource, destination: VertexId) -> Option<Self> {
        let goal = source.position(destination)?;
        Some(Self {
            positions: source.positions().clone(),
            destination: goal,
        })
    }
}

impl Heuristic for EuclideanHeuristic {
    fn score(&self, vertex: VertexId) -> f64 {
        self.positions
            .get(&vertex)
            .map_or(0.0, |position| -position.distance(self.destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_recognises_supported_field_counts() {
        assert_eq!(EdgeListFormat::detect(2), Some(EdgeListFormat::Plain));
        assert_eq!(EdgeListFormat::detect(3), Some(EdgeListFormat::Plain));
        assert_eq!(EdgeListFormat::detect(6), Some(EdgeListFormat::Geometric));
        assert_eq!(EdgeListFormat::detect(4), None);
    }

    #[test]
    fn position_distance_is_euclidean() {
        let a = Position { x: 0.0, y: 0.0 };
        let b = Position { x: 3.0, y: 4.0 };
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }
}
