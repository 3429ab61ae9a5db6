//! Solver results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Distance, Graph, VertexId};

/// Centers chosen by a solver, or the absence of a feasible placement.
///
/// An invalid solution carries no centers. The order of `centers` is the
/// order in which the solver placed them, which keeps results reproducible.
///
/// # Examples
/// ```
/// use coverplan_core::{Graph, Solution};
///
/// # fn main() -> Result<(), coverplan_core::GraphError> {
/// let path = Graph::new(vec![vec![1], vec![0, 2], vec![1]])?;
/// let solution = Solution::valid(vec![1]);
/// assert!(solution.covers(&path, 1));
/// assert_eq!(solution.covering_radius(&path), Some(1));
/// assert!(!Solution::invalid().covers(&path, 5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Selected center vertices.
    pub centers: Vec<VertexId>,
    /// Whether the solver found a feasible placement.
    pub is_valid: bool,
}

impl Solution {
    /// A feasible solution built from `centers`.
    #[must_use]
    pub const fn valid(centers: Vec<VertexId>) -> Self {
        Self {
            centers,
            is_valid: true,
        }
    }

    /// The infeasible result.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            centers: Vec::new(),
            is_valid: false,
        }
    }

    /// Number of centers used.
    #[must_use]
    pub const fn nb_centers(&self) -> usize {
        self.centers.len()
    }

    /// Whether every vertex of `graph` lies within `radius` of a center.
    ///
    /// Invalid solutions never cover anything.
    #[must_use]
    pub fn covers(&self, graph: &Graph, radius: Distance) -> bool {
        self.is_valid
            && graph.vertices().all(|vertex| {
                self.centers.iter().any(|&center| {
                    graph
                        .distance(center, vertex)
                        .is_some_and(|distance| distance <= radius)
                })
            })
    }

    /// Largest distance from any vertex to its nearest center.
    ///
    /// Returns `None` for invalid solutions and when some vertex cannot
    /// reach any center. An empty graph has covering radius 0.
    #[must_use]
    pub fn covering_radius(&self, graph: &Graph) -> Option<Distance> {
        if !self.is_valid {
            return None;
        }
        graph.vertices().try_fold(0, |worst, vertex| {
            let nearest = self
                .centers
                .iter()
                .filter_map(|&center| graph.distance(center, vertex))
                .min()?;
            Some(worst.max(nearest))
        })
    }
}
