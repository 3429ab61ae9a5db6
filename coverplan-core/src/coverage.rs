//! Coverage graphs at a fixed covering radius.
//!
//! Turning a metric question ("is `v2` within `radius` of `v1`?") into plain
//! adjacency lets the solvers treat the minimum-centers problem as a minimum
//! dominating set search.

use crate::{Distance, Graph, VertexId};

/// Graph whose edge `(v1, v2)` exists iff `distance(v1, v2) <= radius` in the
/// source graph.
///
/// Every vertex carries a self-loop because `distance(v, v) == 0`, and each
/// neighbor list is in ascending vertex-id order.
///
/// # Examples
///
/// ```
/// use coverplan_core::{CoverageGraph, Graph};
///
/// # fn main() -> Result<(), coverplan_core::GraphError> {
/// let path = Graph::new(vec![vec![1], vec![0, 2], vec![1]])?;
/// let coverage = CoverageGraph::from_graph(&path, 1);
/// assert_eq!(coverage.neighbors(0), &[0, 1]);
/// assert_eq!(coverage.neighbors(1), &[0, 1, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGraph {
    radius: Distance,
    adjacency: Vec<Vec<VertexId>>,
}

impl CoverageGraph {
    /// Build the coverage graph of `graph` for `radius`.
    ///
    /// Queries the distance oracle for every ordered pair, so the cost is
    /// `O(V²)`. Unreachable pairs never become edges.
    #[must_use]
    pub fn from_graph(graph: &Graph, radius: Distance) -> Self {
        let adjacency = graph
            .vertices()
            .map(|from| {
                graph
                    .vertices()
                    .filter(|&to| graph.distance(from, to).is_some_and(|d| d <= radius))
                    .collect()
            })
            .collect();
        Self { radius, adjacency }
    }

    /// Radius this graph was built for.
    #[must_use]
    pub const fn radius(&self) -> Distance {
        self.radius
    }

    /// Number of vertices.
    #[must_use]
    pub const fn nb_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Closed neighborhood of `vertex` (itself included); empty for unknown
    /// ids.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Size of the closed neighborhood of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    /// Mark every vertex dominated by `centers`.
    ///
    /// A vertex is dominated when it is a center or adjacent to one. Ids
    /// outside the graph are ignored.
    #[must_use]
    pub fn dominated_by(&self, centers: &[VertexId]) -> Vec<bool> {
        let mut marks = vec![false; self.nb_vertices()];
        for &center in centers {
            if let Some(mark) = marks.get_mut(center) {
                *mark = true;
            }
            for &neighbor in self.neighbors(center) {
                if let Some(mark) = marks.get_mut(neighbor) {
                    *mark = true;
                }
            }
        }
        marks
    }

    /// Whether `centers` dominate every vertex.
    #[must_use]
    pub fn is_dominating(&self, centers: &[VertexId]) -> bool {
        self.dominated_by(centers).into_iter().all(|mark| mark)
    }
}
