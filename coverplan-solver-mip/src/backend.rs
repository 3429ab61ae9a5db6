//! Optimiser boundary for [`crate::MipSolver`].

use thiserror::Error;

use crate::model::MipModel;
use crate::solver::MipSolverConfig;

/// Termination state reported by a [`MipBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipStatus {
    /// Proven optimum.
    Optimal,
    /// Time limit hit; incumbents may exist.
    TimeLimit,
    /// No feasible assignment exists.
    Infeasible,
    /// Any other backend-specific status code.
    Other(i32),
}

impl std::fmt::Display for MipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => f.write_str("optimal"),
            Self::TimeLimit => f.write_str("time limit"),
            Self::Infeasible => f.write_str("infeasible"),
            Self::Other(code) => write!(f, "status {code}"),
        }
    }
}

/// Result of one optimisation run.
#[derive(Debug, Clone, PartialEq)]
pub struct MipOutcome {
    /// How the run ended.
    pub status: MipStatus,
    /// Number of feasible incumbents found.
    pub solution_count: usize,
    /// Objective value of the best incumbent, if any.
    pub objective_value: Option<f64>,
    /// Best incumbent's values, indexed by [`crate::VarId::index`].
    pub values: Vec<f64>,
}

impl MipOutcome {
    /// Whether `values` holds a usable assignment: the run proved optimality
    /// or stopped on the time limit with at least one incumbent.
    #[must_use]
    pub const fn has_incumbent(&self) -> bool {
        match self.status {
            MipStatus::Optimal => true,
            MipStatus::TimeLimit => self.solution_count > 0,
            MipStatus::Infeasible | MipStatus::Other(_) => false,
        }
    }
}

/// Errors raised by a [`MipBackend`] before it could report a status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MipBackendError {
    /// No optimiser is linked into this build.
    #[error("MIP backend unavailable: {reason}")]
    Unavailable {
        /// Why the backend cannot run.
        reason: String,
    },
    /// The optimiser rejected the model or crashed.
    #[error("MIP backend failed with code {code}: {message}")]
    Failed {
        /// Backend-specific error code.
        code: i32,
        /// Backend diagnostic.
        message: String,
    },
}

/// An optimiser able to solve a [`MipModel`].
///
/// Implementations must be `Send + Sync` so the owning solver can be shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use coverplan_solver_mip::{
///     MipBackend, MipBackendError, MipModel, MipOutcome, MipSolverConfig, MipStatus,
/// };
///
/// struct AllOnes;
///
/// impl MipBackend for AllOnes {
///     fn name(&self) -> &str {
///         "all-ones"
///     }
///
///     fn optimize(
///         &self,
///         model: &MipModel,
///         _config: &MipSolverConfig,
///     ) -> Result<MipOutcome, MipBackendError> {
///         Ok(MipOutcome {
///             status: MipStatus::Optimal,
///             solution_count: 1,
///             objective_value: None,
///             values: vec![1.0; model.variables().len()],
///         })
///     }
/// }
/// ```
pub trait MipBackend: Send + Sync {
    /// Short label used in diagnostics.
    fn name(&self) -> &str;

    /// Minimise `model` within the limits in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MipBackendError`] when no status could be obtained.
    fn optimize(
        &self,
        model: &MipModel,
        config: &MipSolverConfig,
    ) -> Result<MipOutcome, MipBackendError>;
}

/// Placeholder backend used when no optimiser is linked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnavailableBackend;

impl MipBackend for UnavailableBackend {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn optimize(
        &self,
        _model: &MipModel,
        _config: &MipSolverConfig,
    ) -> Result<MipOutcome, MipBackendError> {
        Err(MipBackendError::Unavailable {
            reason: "no optimiser is linked into this build".to_owned(),
        })
    }
}
