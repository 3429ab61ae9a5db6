//! Immutable graphs with precomputed hop distances.
//!
//! A [`Graph`] owns an ordered adjacency list, one color tag per vertex and
//! the all-pairs hop-distance matrix derived from the adjacency at
//! construction time. Vertices are dense ids `0..nb_vertices()`.

mod distances;
mod error;

pub use error::GraphError;

use distances::DistanceMatrix;

/// Dense vertex identifier.
pub type VertexId = usize;

/// Hop distance between two vertices.
pub type Distance = u32;

/// Color tag assigned to vertices built from plain adjacency input.
pub const DEFAULT_COLOR: u32 = 1;

/// Largest vertex count a [`Graph`] accepts. The distance matrix holds
/// `MAX_VERTICES²` entries at this size.
pub const MAX_VERTICES: usize = 1 << 16;

/// Vertex/adjacency/distance abstraction consumed by the solvers.
///
/// # Examples
///
/// ```
/// use coverplan_core::Graph;
///
/// # fn main() -> Result<(), coverplan_core::GraphError> {
/// let graph = Graph::new(vec![vec![1], vec![0, 2], vec![1]])?;
/// assert_eq!(graph.nb_vertices(), 3);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// assert_eq!(graph.distance(0, 2), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    colors: Vec<u32>,
    distances: DistanceMatrix,
}

impl Graph {
    /// Build a graph from an adjacency description, tagging every vertex with
    /// [`DEFAULT_COLOR`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NeighborOutOfRange`] when a neighbor id does not
    /// name a vertex.
    pub fn new(adjacency: Vec<Vec<VertexId>>) -> Result<Self, GraphError> {
        let colors = vec![DEFAULT_COLOR; adjacency.len()];
        Self::with_colors(adjacency, colors)
    }

    /// Build a graph whose vertices carry explicit color tags.
    ///
    /// # Errors
    ///
    /// Fails when the graph has more than [`MAX_VERTICES`] vertices, when a
    /// neighbor id is out of range or when `colors` does not hold exactly one
    /// entry per adjacency list.
    pub fn with_colors(
        adjacency: Vec<Vec<VertexId>>,
        colors: Vec<u32>,
    ) -> Result<Self, GraphError> {
        let nb_vertices = adjacency.len();
        if nb_vertices > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                nb_vertices,
                limit: MAX_VERTICES,
            });
        }
        if colors.len() != nb_vertices {
            return Err(GraphError::ColorCountMismatch {
                nb_vertices,
                nb_colors: colors.len(),
            });
        }
        for (vertex, neighbors) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = neighbors.iter().find(|&&n| n >= nb_vertices) {
                return Err(GraphError::NeighborOutOfRange {
                    vertex,
                    neighbor,
                    nb_vertices,
                });
            }
        }
        let distances = distances::all_pairs(&adjacency);
        Ok(Self {
            adjacency,
            colors,
            distances,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn nb_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Ordered neighbors of `vertex`; empty for unknown ids.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Color tag of `vertex`, if it exists.
    #[must_use]
    pub fn color(&self, vertex: VertexId) -> Option<u32> {
        self.colors.get(vertex).copied()
    }

    /// Hop distance between two vertices.
    ///
    /// Returns `None` when no path connects them or either id is unknown.
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<Distance> {
        self.distances.get(from)?.get(to).copied().flatten()
    }

    /// Iterate over every vertex id in ascending order.
    #[must_use]
    pub const fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.nb_vertices()
    }

    /// Largest finite distance between any two vertices (0 for graphs with
    /// fewer than two connected vertices).
    #[must_use]
    pub fn max_finite_distance(&self) -> Distance {
        self.distances
            .iter()
            .flatten()
            .filter_map(|d| *d)
            .max()
            .unwrap_or(0)
    }

    /// Distinct finite pairwise distances in ascending order.
    ///
    /// Always starts with `0` for non-empty graphs.
    #[must_use]
    pub fn distinct_distances(&self) -> Vec<Distance> {
        let mut values: Vec<Distance> = self
            .distances
            .iter()
            .flatten()
            .filter_map(|d| *d)
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}
