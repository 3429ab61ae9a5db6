//! Tests for the `MipSolver` status handling.

use std::sync::Mutex;

use super::*;
use crate::backend::{MipBackendError, MipOutcome, MipStatus};
use crate::model::MipModel;
use coverplan_core::test_support::path_graph;
use rstest::rstest;

/// Returns a canned outcome and records the limits it was called with.
struct ScriptedBackend {
    outcome: Result<MipOutcome, MipBackendError>,
    seen: Mutex<Vec<MipSolverConfig>>,
}

impl ScriptedBackend {
    fn new(outcome: Result<MipOutcome, MipBackendError>) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn opening(status: MipStatus, solution_count: usize, open: &[usize]) -> Self {
        let mut values = vec![0.0; 32];
        for &vertex in open {
            if let Some(slot) = values.get_mut(vertex) {
                *slot = 1.0;
            }
        }
        Self::new(Ok(MipOutcome {
            status,
            solution_count,
            objective_value: None,
            values,
        }))
    }
}

impl MipBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn optimize(
        &self,
        _model: &MipModel,
        config: &MipSolverConfig,
    ) -> Result<MipOutcome, MipBackendError> {
        self.seen
            .lock()
            .expect("config log lock poisoned")
            .push(config.clone());
        self.outcome.clone()
    }
}

#[rstest]
fn default_config_matches_documented_limits() {
    let config = MipSolverConfig::default();
    assert_eq!(config.time_limit, Duration::from_secs(600));
    assert_eq!(config.threads, 24);
}

#[rstest]
fn unavailable_backend_yields_invalid_solutions() {
    let solver = MipSolver::new();
    let graph = path_graph(3);
    assert_eq!(
        solver.solve_min_centers(&graph, 1).expect("never errors"),
        Solution::invalid()
    );
    assert_eq!(
        solver.solve_min_radius(&graph, 1).expect("never errors"),
        Solution::invalid()
    );
}

#[rstest]
fn optimal_status_opens_marked_centers() {
    let solver = MipSolver::with_backend(ScriptedBackend::opening(MipStatus::Optimal, 1, &[3, 0]));
    let solution = solver
        .solve_min_centers(&path_graph(5), 1)
        .expect("never errors");
    assert_eq!(solution, Solution::valid(vec![0, 3]));
}

#[rstest]
#[case(1, true)]
#[case(0, false)]
fn time_limit_needs_an_incumbent(#[case] solution_count: usize, #[case] valid: bool) {
    let backend = ScriptedBackend::opening(MipStatus::TimeLimit, solution_count, &[2]);
    let solution = MipSolver::with_backend(backend)
        .solve_min_radius(&path_graph(5), 1)
        .expect("never errors");
    assert_eq!(solution.is_valid, valid);
}

#[rstest]
#[case(MipStatus::Infeasible)]
#[case(MipStatus::Other(12))]
fn failing_statuses_are_invalid(#[case] status: MipStatus) {
    let backend = ScriptedBackend::opening(status, 3, &[1]);
    let solution = MipSolver::with_backend(backend)
        .solve_min_centers(&path_graph(3), 1)
        .expect("never errors");
    assert_eq!(solution, Solution::invalid());
}

#[rstest]
fn backend_errors_are_absorbed() {
    let backend = ScriptedBackend::new(Err(MipBackendError::Failed {
        code: 10_009,
        message: "license expired".to_owned(),
    }));
    let solution = MipSolver::with_backend(backend)
        .solve_min_centers(&path_graph(3), 1)
        .expect("never errors");
    assert!(!solution.is_valid);
}

#[rstest]
fn configured_limits_reach_the_backend() {
    let config = MipSolverConfig {
        time_limit: Duration::from_secs(5),
        threads: 2,
    };
    let solver = MipSolver::with_config(
        ScriptedBackend::opening(MipStatus::Optimal, 1, &[1]),
        config.clone(),
    );
    let solution = solver
        .solve_min_centers(&path_graph(3), 1)
        .expect("never errors");
    assert_eq!(solution.centers, vec![1]);

    let seen = solver.backend.seen.lock().expect("config log lock poisoned");
    assert_eq!(seen.as_slice(), &[config]);
}
