//! [`MipSolver`] implementation of the core [`Solver`] trait.

use std::time::Duration;

use coverplan_core::{Distance, Graph, Solution, SolveError, Solver};

use crate::backend::{MipBackend, UnavailableBackend};
use crate::model::Formulation;

/// Default wall-clock budget handed to the backend.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(600);

/// Default worker thread count handed to the backend.
pub const DEFAULT_THREADS: usize = 24;

/// Limits passed to every [`MipBackend::optimize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipSolverConfig {
    /// Wall-clock budget per optimisation.
    pub time_limit: Duration,
    /// Worker threads the backend may use.
    pub threads: usize,
}

impl Default for MipSolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            threads: DEFAULT_THREADS,
        }
    }
}

/// Solver that formulates each request as a [`Formulation`] and delegates
/// to a [`MipBackend`].
///
/// Backend failures and statuses without an incumbent are logged and turned
/// into [`Solution::invalid`]; they never surface as [`SolveError`].
///
/// # Examples
///
/// ```rust
/// use coverplan_core::{Graph, Solver};
/// use coverplan_solver_mip::MipSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = Graph::new(vec![vec![1], vec![0]])?;
/// let solution = MipSolver::new().solve_min_centers(&graph, 1)?;
/// assert!(!solution.is_valid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MipSolver<B = UnavailableBackend> {
    backend: B,
    config: MipSolverConfig,
}

impl MipSolver<UnavailableBackend> {
    /// Construct a solver without a linked optimiser.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(UnavailableBackend)
    }
}

impl<B: MipBackend> MipSolver<B> {
    /// Construct a solver over `backend` with default limits.
    pub fn with_backend(backend: B) -> Self {
        Self::with_config(backend, MipSolverConfig::default())
    }

    /// Construct a solver with explicit limits.
    pub const fn with_config(backend: B, config: MipSolverConfig) -> Self {
        Self { backend, config }
    }

    /// Active limits.
    pub const fn config(&self) -> &MipSolverConfig {
        &self.config
    }

    /// Optimise a prepared formulation.
    pub fn solve_formulation(&self, formulation: &Formulation) -> Solution {
        let model = formulation.model();
        log::debug!(
            "optimising {} with {} ({} variables, {} constraints)",
            formulation.objective(),
            self.backend.name(),
            model.variables().len(),
            model.constraints().len()
        );
        match self.backend.optimize(model, &self.config) {
            Ok(outcome) if outcome.has_incumbent() => {
                let centers = formulation.centers_from(&outcome.values);
                log::info!(
                    "{} finished with status {}: {} centers, objective {:?}",
                    self.backend.name(),
                    outcome.status,
                    centers.len(),
                    outcome.objective_value
                );
                Solution::valid(centers)
            }
            Ok(outcome) => {
                log::warn!(
                    "{} finished with status {} and {} incumbents",
                    self.backend.name(),
                    outcome.status,
                    outcome.solution_count
                );
                Solution::invalid()
            }
            Err(err) => {
                log::warn!("{} failed: {err}", self.backend.name());
                Solution::invalid()
            }
        }
    }
}

impl<B: MipBackend> Solver for MipSolver<B> {
    fn solve_min_centers(&self, graph: &Graph, radius: Distance) -> Result<Solution, SolveError> {
        Ok(self.solve_formulation(&Formulation::min_centers(graph, radius)))
    }

    fn solve_min_radius(
        &self,
        graph: &Graph,
        nb_centers: usize,
    ) -> Result<Solution, SolveError> {
        Ok(self.solve_formulation(&Formulation::min_radius(graph, nb_centers)))
    }
}

#[cfg(test)]
mod tests;
