//! Command-line interface for placing coverage centers on graphs and pixel
//! grids.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;
use solve::{SolveArgs, run_solve};
#[cfg(test)]
use solve::{
    GraphSource, SolveConfig, SolveReport, SolveSolverBuilder, SolverKind,
    config_from_layers_for_test, load_graph, run_solve_with,
};

pub(crate) const ARG_SOLVE_GRAPH: &str = "graph";
pub(crate) const ARG_SOLVE_IMAGE: &str = "image";
pub(crate) const ARG_SOLVE_SETTINGS: &str = "settings";
pub(crate) const ARG_SOLVE_RADIUS: &str = "radius";
pub(crate) const ARG_SOLVE_CENTERS: &str = "centers";
pub(crate) const ARG_SOLVE_SOLVER: &str = "solver";
pub(crate) const ARG_SOLVE_TIME_LIMIT: &str = "time-limit-secs";
pub(crate) const ARG_SOLVE_THREADS: &str = "threads";
pub(crate) const ARG_SOLVE_LP_EXPORT: &str = "lp-export";
pub(crate) const ENV_SOLVE_GRAPH: &str = "COVERPLAN_CMDS_SOLVE_GRAPH";
pub(crate) const ENV_SOLVE_IMAGE: &str = "COVERPLAN_CMDS_SOLVE_IMAGE";
pub(crate) const ENV_SOLVE_SETTINGS: &str = "COVERPLAN_CMDS_SOLVE_SETTINGS";

/// Run the Coverplan CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "coverplan",
    about = "Exact center placement on graphs and pixel grids",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Place the fewest centers for a radius, or the tightest radius for a
    /// center budget.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
