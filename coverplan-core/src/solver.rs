//! The solver boundary shared by the exact search and the integer-programming
//! backend.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Distance, Graph, Solution};

/// Which coverage question to answer.
///
/// # Examples
/// ```rust
/// use coverplan_core::Objective;
///
/// let objective = Objective::MinCenters { radius: 2 };
/// assert_eq!(objective.to_string(), "minimum centers at radius 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// Fewest centers covering every vertex within `radius`.
    MinCenters {
        /// Covering radius in hops.
        radius: Distance,
    },
    /// Smallest radius coverable with at most `nb_centers` centers.
    MinRadius {
        /// Center budget.
        nb_centers: usize,
    },
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinCenters { radius } => write!(f, "minimum centers at radius {radius}"),
            Self::MinRadius { nb_centers } => {
                write!(f, "minimum radius with {nb_centers} centers")
            }
        }
    }
}

/// Errors returned by [`Solver`] implementations.
///
/// Infeasible instances are not errors: they produce
/// [`Solution::invalid`]. Errors are reserved for searches that could not
/// run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Iterative deepening passed the vertex count without a solution.
    ///
    /// The full vertex set always dominates, so this signals a broken
    /// search invariant rather than bad input.
    #[error("search exhausted every budget up to {nb_vertices} centers without a solution")]
    SearchExhausted {
        /// Number of vertices in the searched graph.
        nb_vertices: usize,
    },
    /// The configured time limit expired before the search finished.
    #[error("time limit reached after exploring {nodes_explored} search nodes")]
    TimeLimitReached {
        /// Search nodes visited before the deadline.
        nodes_explored: u64,
    },
}

/// Place centers on a graph.
///
/// Both entry points return `Ok(Solution::invalid())` when no placement
/// satisfies the request. Solvers must be `Send + Sync` to operate safely
/// across threads.
pub trait Solver: Send + Sync {
    /// Fewest centers such that every vertex lies within `radius` of one.
    fn solve_min_centers(&self, graph: &Graph, radius: Distance) -> Result<Solution, SolveError>;

    /// Smallest covering radius achievable with at most `nb_centers` centers.
    fn solve_min_radius(&self, graph: &Graph, nb_centers: usize)
    -> Result<Solution, SolveError>;

    /// Dispatch on an [`Objective`].
    fn solve(&self, graph: &Graph, objective: Objective) -> Result<Solution, SolveError> {
        match objective {
            Objective::MinCenters { radius } => self.solve_min_centers(graph, radius),
            Objective::MinRadius { nb_centers } => self.solve_min_radius(graph, nb_centers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Places a center on every vertex.
    struct EveryVertexSolver;

    impl Solver for EveryVertexSolver {
        fn solve_min_centers(
            &self,
            graph: &Graph,
            _radius: Distance,
        ) -> Result<Solution, SolveError> {
            Ok(Solution::valid(graph.vertices().collect()))
        }

        fn solve_min_radius(
            &self,
            graph: &Graph,
            nb_centers: usize,
        ) -> Result<Solution, SolveError> {
            if nb_centers < graph.nb_vertices() {
                return Ok(Solution::invalid());
            }
            Ok(Solution::valid(graph.vertices().collect()))
        }
    }

    #[rstest]
    #[case(Objective::MinCenters { radius: 0 }, true)]
    #[case(Objective::MinRadius { nb_centers: 1 }, false)]
    #[case(Objective::MinRadius { nb_centers: 2 }, true)]
    fn solve_dispatches_on_objective(#[case] objective: Objective, #[case] valid: bool) {
        let graph = Graph::new(vec![vec![1], vec![0]]).expect("graph");
        let solution = EveryVertexSolver
            .solve(&graph, objective)
            .expect("dummy solver never fails");
        assert_eq!(solution.is_valid, valid);
    }

    #[rstest]
    fn objective_displays_its_parameter() {
        let objective = Objective::MinRadius { nb_centers: 3 };
        assert_eq!(objective.to_string(), "minimum radius with 3 centers");
    }
}
