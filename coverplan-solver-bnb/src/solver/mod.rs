//! `BranchAndBoundSolver` implementation of the core [`Solver`] trait.

use std::time::{Duration, Instant};

use coverplan_core::{CoverageGraph, Distance, Graph, Solution, SolveError, Solver};

use crate::pivot::{MinDegreePivot, PivotStrategy};
use crate::search::BranchAndBoundSearch;

/// Configuration for [`BranchAndBoundSolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchAndBoundConfig {
    /// Wall-clock budget for a whole solve; `None` runs to completion.
    pub time_limit: Option<Duration>,
}

/// Exact solver combining [`BranchAndBoundSearch`] with iterative deepening.
///
/// # Examples
///
/// ```rust
/// use coverplan_core::{Graph, Solver};
/// use coverplan_solver_bnb::BranchAndBoundSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let star = Graph::new(vec![vec![1, 2, 3], vec![0], vec![0], vec![0]])?;
/// let solution = BranchAndBoundSolver::new().solve_min_centers(&star, 1)?;
/// assert_eq!(solution.centers, vec![0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver<P = MinDegreePivot> {
    pivot: P,
    config: BranchAndBoundConfig,
}

impl BranchAndBoundSolver<MinDegreePivot> {
    /// Construct a solver using minimum-degree pivots and no time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MinDegreePivot, BranchAndBoundConfig::default())
    }
}

impl<P: PivotStrategy> BranchAndBoundSolver<P> {
    /// Construct a solver with a custom pivot strategy and no time limit.
    pub fn with_pivot(pivot: P) -> Self {
        Self::with_config(pivot, BranchAndBoundConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(pivot: P, config: BranchAndBoundConfig) -> Self {
        Self { pivot, config }
    }

    /// Active configuration.
    pub const fn config(&self) -> &BranchAndBoundConfig {
        &self.config
    }

    fn deadline(&self, started_at: Instant) -> Option<Instant> {
        self.config
            .time_limit
            .and_then(|limit| started_at.checked_add(limit))
    }

    /// Run one bounded search on the coverage graph of `graph` at `radius`.
    fn search_at(
        &self,
        graph: &Graph,
        radius: Distance,
        budget: usize,
        deadline: Option<Instant>,
    ) -> Result<Solution, SolveError> {
        let coverage = CoverageGraph::from_graph(graph, radius);
        let mut search = BranchAndBoundSearch::new(&coverage, &self.pivot).with_deadline(deadline);
        // Every center dominates a fresh pivot, so depth never exceeds the
        // vertex count.
        let depth = budget.min(graph.nb_vertices());
        let solution = search.search(&mut Vec::with_capacity(depth), budget)?;
        log::debug!(
            "radius {radius} with {budget} centers: {} after {} nodes",
            if solution.is_valid { "feasible" } else { "infeasible" },
            search.nodes_explored()
        );
        Ok(solution)
    }
}

impl<P: PivotStrategy> Solver for BranchAndBoundSolver<P> {
    fn solve_min_centers(&self, graph: &Graph, radius: Distance) -> Result<Solution, SolveError> {
        let started_at = Instant::now();
        let deadline = self.deadline(started_at);
        let coverage = CoverageGraph::from_graph(graph, radius);
        let mut search = BranchAndBoundSearch::new(&coverage, &self.pivot).with_deadline(deadline);

        let nb_vertices = graph.nb_vertices();
        for budget in 0..=nb_vertices {
            log::debug!("searching for a cover with {budget} centers at radius {radius}");
            let solution = search.search(&mut Vec::with_capacity(budget), budget)?;
            if solution.is_valid {
                log::info!(
                    "found {} centers at radius {radius} in {:?} ({} nodes)",
                    solution.nb_centers(),
                    started_at.elapsed(),
                    search.nodes_explored()
                );
                return Ok(solution);
            }
        }
        Err(SolveError::SearchExhausted { nb_vertices })
    }

    fn solve_min_radius(
        &self,
        graph: &Graph,
        nb_centers: usize,
    ) -> Result<Solution, SolveError> {
        let started_at = Instant::now();
        let deadline = self.deadline(started_at);

        let radii = graph.distinct_distances();
        let Some(&widest) = radii.last() else {
            return Ok(Solution::valid(Vec::new()));
        };

        // Feasibility is monotone in the radius: check the widest candidate
        // once, then narrow down to the first feasible one.
        let mut best = self.search_at(graph, widest, nb_centers, deadline)?;
        if !best.is_valid {
            log::info!("{nb_centers} centers cannot cover the graph at any radius");
            return Ok(best);
        }
        let mut best_radius = widest;
        let mut low = 0;
        let mut high = radii.len().saturating_sub(1);
        while low < high {
            let mid = low.midpoint(high);
            let Some(&radius) = radii.get(mid) else {
                break;
            };
            let solution = self.search_at(graph, radius, nb_centers, deadline)?;
            if solution.is_valid {
                best = solution;
                best_radius = radius;
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        log::info!(
            "minimum radius {best_radius} with {} centers found in {:?}",
            best.nb_centers(),
            started_at.elapsed()
        );
        Ok(best)
    }
}
