//! Core domain types for the Coverplan engine.
//!
//! The crate models the inputs and outputs of the minimum-centers problem:
//! an immutable [`Graph`] with precomputed hop distances, the
//! [`CoverageGraph`] derived from it for a fixed covering radius, and the
//! [`Solution`] value returned by every [`Solver`] implementation.
//!
//! Solver backends live in their own crates and depend only on the types
//! exported here.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coverage;
pub mod graph;
pub mod solution;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coverage::CoverageGraph;
pub use graph::{Distance, Graph, GraphError, MAX_VERTICES, VertexId};
pub use solution::Solution;
pub use solver::{Objective, SolveError, Solver};
