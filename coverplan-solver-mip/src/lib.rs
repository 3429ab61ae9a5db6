//! Mixed-integer programming adapter for center placement.
//!
//! This crate formulates both coverage questions as binary programs, renders
//! them in CPLEX LP text and hands them to a pluggable [`MipBackend`]. No
//! native optimiser is linked: the default [`UnavailableBackend`] reports
//! itself as missing, so [`MipSolver`] yields invalid solutions until a real
//! backend is supplied.

#![forbid(unsafe_code)]

mod backend;
mod model;
mod solver;

pub use backend::{MipBackend, MipBackendError, MipOutcome, MipStatus, UnavailableBackend};
pub use model::{
    CENTER_THRESHOLD, Formulation, LinearConstraint, LinearTerm, MipModel, Sense, VarId, VarKind,
    Variable,
};
pub use solver::{DEFAULT_THREADS, DEFAULT_TIME_LIMIT, MipSolver, MipSolverConfig};
