//! Recursive minimum dominating set search over a [`CoverageGraph`].

use std::time::Instant;

use coverplan_core::{CoverageGraph, Solution, SolveError, VertexId};

use crate::pivot::PivotStrategy;

/// Exhaustive depth-first search for a dominating set of bounded size.
///
/// The partial assignment is a stack shared by every frame: each branch
/// pushes its candidate center before descending and pops it on the way
/// back, so a call always returns with `partial` as it received it.
///
/// # Examples
///
/// ```rust
/// use coverplan_core::{CoverageGraph, Graph};
/// use coverplan_solver_bnb::{BranchAndBoundSearch, MinDegreePivot};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let path = Graph::new(vec![vec![1], vec![0, 2], vec![1]])?;
/// let coverage = CoverageGraph::from_graph(&path, 1);
/// let mut search = BranchAndBoundSearch::new(&coverage, &MinDegreePivot);
///
/// let solution = search.search(&mut Vec::new(), 1)?;
/// assert!(solution.is_valid);
/// assert_eq!(solution.centers, vec![1]);
/// # Ok(())
/// # }
/// ```
pub struct BranchAndBoundSearch<'a, P: PivotStrategy + ?Sized> {
    graph: &'a CoverageGraph,
    pivot: &'a P,
    deadline: Option<Instant>,
    nodes_explored: u64,
}

impl<'a, P: PivotStrategy + ?Sized> BranchAndBoundSearch<'a, P> {
    /// Prepare a search over `graph` using `pivot` to pick branching vertices.
    pub const fn new(graph: &'a CoverageGraph, pivot: &'a P) -> Self {
        Self {
            graph,
            pivot,
            deadline: None,
            nodes_explored: 0,
        }
    }

    /// Abort with [`SolveError::TimeLimitReached`] once `deadline` passes.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Number of search calls made so far, across every `search` invocation.
    #[must_use]
    pub const fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Try to extend `partial` with at most `remaining_budget` centers so that
    /// every vertex is dominated.
    ///
    /// Returns a valid [`Solution`] holding the completed center sequence on
    /// success and [`Solution::invalid`] when no extension exists. A partial
    /// assignment that already dominates the graph succeeds immediately, even
    /// with budget to spare.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::TimeLimitReached`] when the deadline passes
    /// mid-search.
    pub fn search(
        &mut self,
        partial: &mut Vec<VertexId>,
        remaining_budget: usize,
    ) -> Result<Solution, SolveError> {
        self.enter_node()?;

        let dominated = self.graph.dominated_by(partial);
        if remaining_budget == 0 {
            return Ok(if dominated.iter().all(|&mark| mark) {
                Solution::valid(partial.clone())
            } else {
                Solution::invalid()
            });
        }

        let undominated: Vec<VertexId> = dominated
            .iter()
            .enumerate()
            .filter_map(|(vertex, &mark)| (!mark).then_some(vertex))
            .collect();
        if undominated.is_empty() {
            return Ok(Solution::valid(partial.clone()));
        }
        let Some(pivot) = self.pivot.select(self.graph, &undominated) else {
            return Ok(Solution::invalid());
        };

        // The pivot's self-loop would repeat the first branch; skip it.
        let graph = self.graph;
        let neighbors = graph.neighbors(pivot);
        let candidates = std::iter::once(pivot).chain(
            neighbors
                .iter()
                .copied()
                .filter(move |&neighbor| neighbor != pivot),
        );
        for candidate in candidates {
            partial.push(candidate);
            let outcome = self.search(partial, remaining_budget - 1);
            partial.pop();
            let solution = outcome?;
            if solution.is_valid {
                return Ok(solution);
            }
        }
        Ok(Solution::invalid())
    }

    fn enter_node(&mut self) -> Result<(), SolveError> {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(SolveError::TimeLimitReached {
                nodes_explored: self.nodes_explored,
            });
        }
        Ok(())
    }
}
