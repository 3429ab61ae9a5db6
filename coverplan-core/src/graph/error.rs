//! Validation errors for graph construction.

use thiserror::Error;

use super::VertexId;

/// Errors returned by [`crate::Graph::new`] and [`crate::Graph::with_colors`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An adjacency list referenced a vertex that does not exist.
    ///
    /// Vertex ids are dense: a graph with `n` adjacency lists owns the ids
    /// `0..n`.
    #[error("vertex {vertex} lists neighbor {neighbor}, but the graph only has {nb_vertices} vertices")]
    NeighborOutOfRange {
        /// Vertex whose adjacency list is malformed.
        vertex: VertexId,
        /// Offending neighbor id.
        neighbor: VertexId,
        /// Number of vertices in the graph.
        nb_vertices: usize,
    },
    /// The color vector does not provide exactly one tag per vertex.
    #[error("expected {nb_vertices} vertex colors, found {nb_colors}")]
    ColorCountMismatch {
        /// Number of vertices in the graph.
        nb_vertices: usize,
        /// Number of colors supplied.
        nb_colors: usize,
    },
    /// The all-pairs distance matrix would exceed [`crate::MAX_VERTICES`]
    /// vertices per side.
    #[error("graph has {nb_vertices} vertices, more than the supported {limit}")]
    TooManyVertices {
        /// Number of vertices requested.
        nb_vertices: usize,
        /// Largest supported vertex count.
        limit: usize,
    },
}
