//! Exact branch-and-bound solver for the Coverplan minimum-centers problem.
//!
//! This crate provides [`BranchAndBoundSolver`], the default implementation of
//! the [`Solver`](coverplan_core::Solver) trait. A covering radius turns the
//! input graph into a [`CoverageGraph`](coverplan_core::CoverageGraph), and
//! the minimum-centers question becomes a minimum dominating set search:
//!
//! - [`BranchAndBoundSearch`] decides whether a given number of centers can
//!   dominate the coverage graph, branching on the closed neighborhood of a
//!   non-dominated pivot vertex;
//! - the solver wraps the search in iterative deepening over the center
//!   budget, so the first success is also a minimum;
//! - the minimum-radius variant binary searches the distinct pairwise
//!   distances, re-using the same search with a fixed budget.
//!
//! The search is single-threaded and deterministic: identical inputs always
//! produce the same center sequence.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod pivot;
mod search;
mod solver;

pub use pivot::{LowestIdPivot, MinDegreePivot, PivotStrategy};
pub use search::BranchAndBoundSearch;
pub use solver::{BranchAndBoundConfig, BranchAndBoundSolver};
