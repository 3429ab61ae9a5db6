//! Facade crate for the Coverplan center placement engine.
//!
//! This crate re-exports the core graph and solution types and exposes the
//! branch-and-bound and MIP solvers behind feature flags.

#![forbid(unsafe_code)]

pub use coverplan_core::{
    CoverageGraph, Distance, Graph, GraphError, MAX_VERTICES, Objective, Solution, SolveError,
    Solver, VertexId,
};

#[cfg(feature = "test-support")]
pub use coverplan_core::test_support;

#[cfg(feature = "solver-bnb")]
pub use coverplan_solver_bnb::{
    BranchAndBoundConfig, BranchAndBoundSearch, BranchAndBoundSolver, LowestIdPivot,
    MinDegreePivot, PivotStrategy,
};

#[cfg(feature = "solver-mip")]
pub use coverplan_solver_mip::{
    Formulation, MipBackend, MipBackendError, MipModel, MipOutcome, MipSolver, MipSolverConfig,
    MipStatus, UnavailableBackend,
};
