//! Error type for the Coverplan CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use coverplan_core::SolveError;
use coverplan_io::{AdjacencyError, PpmError, SettingsError};
use thiserror::Error;

/// Errors emitted by the Coverplan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// CLI flag naming the input.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Two mutually exclusive options were both supplied.
    #[error("--{first} cannot be combined with --{second}")]
    ConflictingArguments {
        /// Flag supplied first.
        first: &'static str,
        /// Conflicting flag.
        second: &'static str,
    },
    /// Neither a radius nor a center budget was supplied.
    #[error("choose an objective with --radius or --centers")]
    MissingObjective,
    /// LP export was requested for a solver that does not build a model.
    #[error("--lp-export is only available with --solver mip")]
    LpExportRequiresMip,
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that would enable the action.
        feature: &'static str,
        /// Operation that was requested.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// CLI flag naming the input.
        field: &'static str,
        /// Path involved.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// CLI flag naming the input.
        field: &'static str,
        /// Path involved.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// CLI flag naming the input.
        field: &'static str,
        /// Path involved.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} file {path:?}: {source}")]
    OpenInput {
        /// CLI flag naming the input.
        field: &'static str,
        /// Path involved.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The adjacency file could not be parsed.
    #[error("failed to parse adjacency list at {path:?}: {source}")]
    ParseAdjacency {
        /// Path involved.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: AdjacencyError,
    },
    /// The settings file could not be parsed.
    #[error("failed to parse settings at {path:?}: {source}")]
    ParseSettings {
        /// Path involved.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: SettingsError,
    },
    /// The image could not be parsed.
    #[error("failed to parse image at {path:?}: {source}")]
    ParseImage {
        /// Path involved.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: PpmError,
    },
    /// Writing the LP model failed.
    #[error("failed to export LP model to {path:?}: {source}")]
    ExportLp {
        /// Path involved.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The solver could not finish.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver diagnostic.
        source: SolveError,
    },
    /// Serialising the solve report failed.
    #[error("failed to serialise solve report: {0}")]
    SerialiseSolveReport(#[source] serde_json::Error),
    /// Writing the solve output failed.
    #[error("failed to write solve output: {0}")]
    WriteSolveOutput(#[source] std::io::Error),
}
