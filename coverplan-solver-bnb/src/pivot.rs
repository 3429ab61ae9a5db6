//! Pivot selection strategies for [`crate::BranchAndBoundSearch`].
//!
//! A non-dominated pivot must end up dominated by itself or one of its
//! neighbors, so branching on its closed neighborhood keeps the search
//! exhaustive whichever pivot is chosen. The strategy only changes how much
//! of the tree gets explored.

use coverplan_core::{CoverageGraph, VertexId};

/// Choose the vertex whose closed neighborhood drives the next branching.
///
/// Implementations must return a member of `undominated` whenever it is
/// non-empty; returning `None` for a non-empty slice makes the search report
/// the branch as infeasible.
///
/// # Examples
///
/// ```rust
/// use coverplan_core::{CoverageGraph, Graph, VertexId};
/// use coverplan_solver_bnb::PivotStrategy;
///
/// struct HighestId;
///
/// impl PivotStrategy for HighestId {
///     fn select(&self, _graph: &CoverageGraph, undominated: &[VertexId]) -> Option<VertexId> {
///         undominated.iter().copied().max()
///     }
/// }
///
/// # fn main() -> Result<(), coverplan_core::GraphError> {
/// let graph = Graph::new(vec![vec![1], vec![0]])?;
/// let coverage = CoverageGraph::from_graph(&graph, 0);
/// assert_eq!(HighestId.select(&coverage, &[0, 1]), Some(1));
/// # Ok(())
/// # }
/// ```
pub trait PivotStrategy: Send + Sync {
    /// Pick the pivot among the non-dominated vertices, given in ascending
    /// id order.
    fn select(&self, graph: &CoverageGraph, undominated: &[VertexId]) -> Option<VertexId>;
}

/// Non-dominated vertex with the smallest closed neighborhood; ties go to
/// the lowest id.
///
/// Small neighborhoods mean few branches, which keeps the tree narrow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinDegreePivot;

impl PivotStrategy for MinDegreePivot {
    fn select(&self, graph: &CoverageGraph, undominated: &[VertexId]) -> Option<VertexId> {
        undominated
            .iter()
            .copied()
            .min_by_key(|&vertex| (graph.degree(vertex), vertex))
    }
}

/// Lowest-id non-dominated vertex.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowestIdPivot;

impl PivotStrategy for LowestIdPivot {
    fn select(&self, _graph: &CoverageGraph, undominated: &[VertexId]) -> Option<VertexId> {
        undominated.iter().copied().min()
    }
}
