//! Solve command implementation for the Coverplan CLI.

use std::io::{BufReader, Write};
use std::time::{Duration, Instant};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8;
use clap::{Parser, ValueEnum};
use coverplan_core::{Distance, Graph, Objective, Solution, Solver};
use coverplan_fs::open_utf8_file;
use coverplan_io::{Settings, read_adjacency, read_ppm_grid};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_SOLVE_CENTERS, ARG_SOLVE_GRAPH, ARG_SOLVE_IMAGE, ARG_SOLVE_LP_EXPORT, ARG_SOLVE_RADIUS,
    ARG_SOLVE_SETTINGS, ARG_SOLVE_SOLVER, ARG_SOLVE_THREADS, ARG_SOLVE_TIME_LIMIT, CliError,
    ENV_SOLVE_GRAPH, ENV_SOLVE_IMAGE, ENV_SOLVE_SETTINGS,
};

/// Solver backend selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SolverKind {
    /// Exact branch-and-bound search.
    #[default]
    Bnb,
    /// Mixed-integer programming backend.
    Mip,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a graph from an adjacency list, or a pixel grid from \
                 a P3 image and its colour settings, then place the fewest \
                 centers covering every vertex within --radius hops, or the \
                 tightest radius achievable with --centers centers. The \
                 result is printed as JSON.",
    about = "Solve a center placement problem"
)]
#[ortho_config(prefix = "COVERPLAN")]
pub(crate) struct SolveArgs {
    /// Path to an adjacency list (`<vertex>: <neighbors>` per line).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) graph: Option<Utf8PathBuf>,
    /// Path to an ASCII PPM (P3) image to solve on instead of a graph.
    #[arg(long = ARG_SOLVE_IMAGE, value_name = "path")]
    #[serde(default)]
    pub(crate) image: Option<Utf8PathBuf>,
    /// Path to the colour settings file used to read `--image`.
    #[arg(long = ARG_SOLVE_SETTINGS, value_name = "path")]
    #[serde(default)]
    pub(crate) settings: Option<Utf8PathBuf>,
    /// Covering radius in hops; minimises the number of centers.
    #[arg(long = ARG_SOLVE_RADIUS, value_name = "hops")]
    #[serde(default)]
    pub(crate) radius: Option<Distance>,
    /// Center budget; minimises the covering radius.
    #[arg(long = ARG_SOLVE_CENTERS, value_name = "count")]
    #[serde(default)]
    pub(crate) centers: Option<usize>,
    /// Solver backend.
    #[arg(long = ARG_SOLVE_SOLVER, value_enum)]
    #[serde(default)]
    pub(crate) solver: Option<SolverKind>,
    /// Wall-clock budget for the solve, in seconds.
    #[arg(long = ARG_SOLVE_TIME_LIMIT, value_name = "seconds")]
    #[serde(default)]
    pub(crate) time_limit_secs: Option<u64>,
    /// Worker threads for the MIP backend.
    #[arg(long = ARG_SOLVE_THREADS, value_name = "count")]
    #[serde(default)]
    pub(crate) threads: Option<usize>,
    /// Write the MIP model in CPLEX LP format to this path before solving.
    #[arg(long = ARG_SOLVE_LP_EXPORT, value_name = "path")]
    #[serde(default)]
    pub(crate) lp_export: Option<Utf8PathBuf>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Where the instance graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GraphSource {
    /// Plain-text adjacency list.
    Adjacency(Utf8PathBuf),
    /// P3 image read through a settings file.
    Image {
        image: Utf8PathBuf,
        settings: Utf8PathBuf,
    },
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Instance input.
    pub(crate) source: GraphSource,
    /// Question to answer.
    pub(crate) objective: Objective,
    /// Backend answering it.
    pub(crate) solver: SolverKind,
    /// Optional wall-clock budget.
    pub(crate) time_limit: Option<Duration>,
    /// MIP worker threads; ignored by branch and bound.
    pub(crate) threads: Option<usize>,
    /// Destination for the exported LP model.
    pub(crate) lp_export: Option<Utf8PathBuf>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.source {
            GraphSource::Adjacency(path) => Self::require_existing(path, ARG_SOLVE_GRAPH),
            GraphSource::Image { image, settings } => {
                Self::require_existing(image, ARG_SOLVE_IMAGE)?;
                Self::require_existing(settings, ARG_SOLVE_SETTINGS)
            }
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match coverplan_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let source = match (args.graph, args.image, args.settings) {
            (Some(graph), None, None) => GraphSource::Adjacency(graph),
            (None, Some(image), Some(settings)) => GraphSource::Image { image, settings },
            (Some(_), Some(_), _) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_SOLVE_GRAPH,
                    second: ARG_SOLVE_IMAGE,
                });
            }
            (Some(_), None, Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_SOLVE_GRAPH,
                    second: ARG_SOLVE_SETTINGS,
                });
            }
            (None, Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_SOLVE_SETTINGS,
                    env: ENV_SOLVE_SETTINGS,
                });
            }
            (None, None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_SOLVE_IMAGE,
                    env: ENV_SOLVE_IMAGE,
                });
            }
            (None, None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_SOLVE_GRAPH,
                    env: ENV_SOLVE_GRAPH,
                });
            }
        };

        let objective = match (args.radius, args.centers) {
            (Some(radius), None) => Objective::MinCenters { radius },
            (None, Some(nb_centers)) => Objective::MinRadius { nb_centers },
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_SOLVE_RADIUS,
                    second: ARG_SOLVE_CENTERS,
                });
            }
            (None, None) => return Err(CliError::MissingObjective),
        };

        let solver = args.solver.unwrap_or_default();
        if args.lp_export.is_some() && solver != SolverKind::Mip {
            return Err(CliError::LpExportRequiresMip);
        }

        Ok(Self {
            source,
            objective,
            solver,
            time_limit: args.time_limit_secs.map(Duration::from_secs),
            threads: args.threads,
            lp_export: args.lp_export,
        })
    }
}

/// JSON document printed by the `solve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SolveReport {
    /// Question that was answered.
    pub(crate) objective: Objective,
    /// Backend that answered it.
    pub(crate) solver: SolverKind,
    /// Placement found, or an invalid marker.
    pub(crate) solution: Solution,
    /// Covering radius achieved by a valid placement.
    pub(crate) covering_radius: Option<Distance>,
    /// Size of the instance.
    pub(crate) nb_vertices: usize,
    /// Wall-clock solve time in milliseconds.
    pub(crate) solve_time_ms: u64,
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        match config.solver {
            SolverKind::Bnb => build_bnb(config),
            SolverKind::Mip => build_mip(config),
        }
    }
}

#[cfg(feature = "solver-bnb")]
fn build_bnb(config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
    use coverplan_solver_bnb::{BranchAndBoundConfig, BranchAndBoundSolver, MinDegreePivot};

    if config.threads.is_some() {
        log::warn!("--{ARG_SOLVE_THREADS} has no effect on the branch-and-bound solver");
    }
    let bnb_config = BranchAndBoundConfig {
        time_limit: config.time_limit,
    };
    Ok(Box::new(BranchAndBoundSolver::with_config(
        MinDegreePivot,
        bnb_config,
    )))
}

#[cfg(not(feature = "solver-bnb"))]
fn build_bnb(_config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-bnb",
        action: "solving with --solver bnb",
    })
}

#[cfg(feature = "solver-mip")]
fn build_mip(config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
    use coverplan_solver_mip::{
        DEFAULT_THREADS, DEFAULT_TIME_LIMIT, MipSolver, MipSolverConfig, UnavailableBackend,
    };

    let mip_config = MipSolverConfig {
        time_limit: config.time_limit.unwrap_or(DEFAULT_TIME_LIMIT),
        threads: config.threads.unwrap_or(DEFAULT_THREADS),
    };
    Ok(Box::new(MipSolver::with_config(
        UnavailableBackend,
        mip_config,
    )))
}

#[cfg(not(feature = "solver-mip"))]
fn build_mip(_config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-mip",
        action: "solving with --solver mip",
    })
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_solve(args, builder)?;
    write_solve_report(writer, &report)
}

fn execute_solve(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveReport, CliError> {
    let config = resolve_solve_config(args)?;
    let graph = load_graph(&config.source)?;
    if let Some(path) = &config.lp_export {
        export_lp(path, &graph, config.objective)?;
    }
    let solver = builder.build(&config)?;

    let started_at = Instant::now();
    let solution = solver
        .solve(&graph, config.objective)
        .map_err(|source| CliError::Solve { source })?;
    let solve_time_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
    log::info!(
        "{} on {} vertices: {} centers, valid = {}",
        config.objective,
        graph.nb_vertices(),
        solution.nb_centers(),
        solution.is_valid
    );

    Ok(SolveReport {
        objective: config.objective,
        solver: config.solver,
        covering_radius: solution.covering_radius(&graph),
        nb_vertices: graph.nb_vertices(),
        solve_time_ms,
        solution,
    })
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads the instance graph described by `source`.
pub(crate) fn load_graph(source: &GraphSource) -> Result<Graph, CliError> {
    match source {
        GraphSource::Adjacency(path) => {
            let reader = open_input(path, ARG_SOLVE_GRAPH)?;
            read_adjacency(reader).map_err(|source| CliError::ParseAdjacency {
                path: path.clone(),
                source,
            })
        }
        GraphSource::Image { image, settings } => {
            let settings_reader = open_input(settings, ARG_SOLVE_SETTINGS)?;
            let parsed = Settings::read(settings_reader).map_err(|source| {
                CliError::ParseSettings {
                    path: settings.clone(),
                    source,
                }
            })?;
            log::debug!(
                "settings at {settings} map {} colours with scale {}",
                parsed.pixel_classes.len(),
                parsed.scale
            );
            let image_reader = open_input(image, ARG_SOLVE_IMAGE)?;
            read_ppm_grid(image_reader, &parsed).map_err(|source| CliError::ParseImage {
                path: image.clone(),
                source,
            })
        }
    }
}

fn open_input(
    path: &Utf8Path,
    field: &'static str,
) -> Result<BufReader<fs_utf8::File>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[cfg(feature = "solver-mip")]
fn export_lp(path: &Utf8Path, graph: &Graph, objective: Objective) -> Result<(), CliError> {
    use coverplan_solver_mip::Formulation;

    let formulation = match objective {
        Objective::MinCenters { radius } => Formulation::min_centers(graph, radius),
        Objective::MinRadius { nb_centers } => Formulation::min_radius(graph, nb_centers),
    };
    let to_error = |source: std::io::Error| CliError::ExportLp {
        path: path.to_path_buf(),
        source,
    };
    let file = coverplan_fs::create_utf8_file(path).map_err(to_error)?;
    let mut writer = std::io::BufWriter::new(file);
    formulation.model().write_lp(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    log::info!("wrote LP model for {objective} to {path}");
    Ok(())
}

#[cfg(not(feature = "solver-mip"))]
fn export_lp(_path: &Utf8Path, _graph: &Graph, _objective: Objective) -> Result<(), CliError> {
    Err(CliError::MissingFeature {
        feature: "solver-mip",
        action: "exporting an LP model",
    })
}

fn write_solve_report(writer: &mut dyn Write, report: &SolveReport) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(report).map_err(CliError::SerialiseSolveReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteSolveOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteSolveOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
