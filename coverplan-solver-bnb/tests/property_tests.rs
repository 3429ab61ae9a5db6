//! Property-based tests for the branch-and-bound solver.
//!
//! # Invariants tested
//!
//! - **Coverage:** every vertex lies within the radius of a returned center.
//! - **Minimality:** no smaller center set covers the graph.
//! - **Determinism:** repeated solves return the same center sequence.
//! - **Minimum radius:** the returned placement achieves the smallest
//!   radius coverable with the given budget.


use coverplan_core::Solver;
use coverplan_core::test_support::brute_force_min_centers;
use coverplan_solver_bnb::{BranchAndBoundSolver, LowestIdPivot};
use proptest::prelude::*;

use proptest_support::{MAX_VERTICES, graph_strategy, radius_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the returned centers cover every vertex.
    #[test]
    fn solution_covers_every_vertex(graph in graph_strategy(), radius in radius_strategy()) {
        let solution = BranchAndBoundSolver::new()
            .solve_min_centers(&graph, radius)
            .expect("solve should succeed");
        prop_assert!(solution.is_valid);
        prop_assert!(solution.covers(&graph, radius));
    }

    /// Property: the center count matches an exhaustive subset search.
    #[test]
    fn solution_is_minimal(graph in graph_strategy(), radius in radius_strategy()) {
        let solution = BranchAndBoundSolver::new()
            .solve_min_centers(&graph, radius)
            .expect("solve should succeed");
        prop_assert_eq!(solution.nb_centers(), brute_force_min_centers(&graph, radius));
    }

    /// Property: any pivot strategy reaches the same optimum.
    #[test]
    fn pivot_strategy_preserves_minimality(graph in graph_strategy(), radius in radius_strategy()) {
        let by_degree = BranchAndBoundSolver::new()
            .solve_min_centers(&graph, radius)
            .expect("solve should succeed");
        let by_id = BranchAndBoundSolver::with_pivot(LowestIdPivot)
            .solve_min_centers(&graph, radius)
            .expect("solve should succeed");
        prop_assert_eq!(by_degree.nb_centers(), by_id.nb_centers());
        prop_assert!(by_id.covers(&graph, radius));
    }

    /// Property: identical inputs yield identical center sequences.
    #[test]
    fn solve_is_deterministic(graph in graph_strategy(), radius in radius_strategy()) {
        let solver = BranchAndBoundSolver::new();
        let first = solver.solve_min_centers(&graph, radius).expect("solve should succeed");
        let second = solver.solve_min_centers(&graph, radius).expect("solve should succeed");
        prop_assert_eq!(first.centers, second.centers);
    }

    /// Property: the minimum-radius placement is feasible and tight.
    #[test]
    fn min_radius_is_tight(graph in graph_strategy(), nb_centers in 1..=MAX_VERTICES) {
        let solution = BranchAndBoundSolver::new()
            .solve_min_radius(&graph, nb_centers)
            .expect("solve should succeed");
        let widest = graph.max_finite_distance();
        let feasible = brute_force_min_centers(&graph, widest) <= nb_centers;
        prop_assert_eq!(solution.is_valid, feasible);
        if let Some(radius) = solution.covering_radius(&graph) {
            prop_assert!(solution.nb_centers() <= nb_centers);
            if let Some(tighter) = radius.checked_sub(1) {
                prop_assert!(brute_force_min_centers(&graph, tighter) > nb_centers);
            }
        }
    }
}
