//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{PATH_FIVE, SETTINGS, STRIP_IMAGE, Workspace};
use super::*;
use coverplan_core::{Distance, Graph, Solution, SolveError, Solver};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct SolveWorld {
    workspace: Workspace,
    inputs: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            inputs: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn use_graph(&self, contents: Option<&str>) {
        let path = match contents {
            Some(text) => self.workspace.write("graph.txt", text),
            None => self.workspace.path("graph.txt"),
        };
        self.inputs.replace(vec![path.into_string()]);
    }

    fn run(&self, extra: &[String]) {
        let mut argv = vec!["coverplan".to_owned(), "solve".to_owned()];
        argv.extend(self.inputs.borrow().iter().cloned());
        argv.extend(extra.iter().cloned());
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Solve(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_solve_with(args, &StubSolveSolverBuilder, &mut *buffer)
            }
        });
        self.result.replace(Some(outcome));
    }

    fn assert_success(&self, nb_centers: usize) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");

        let report: SolveReport =
            serde_json::from_slice(&self.stdout.borrow()).expect("output should be a JSON report");
        assert!(report.solution.is_valid);
        assert_eq!(report.solution.nb_centers(), nb_centers);
        assert_eq!(report.solver, SolverKind::Bnb);
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

/// Opens the lowest vertex ids: two for a radius question, the whole
/// budget for a radius search.
struct StubSolver;

impl Solver for StubSolver {
    fn solve_min_centers(
        &self,
        graph: &Graph,
        _radius: Distance,
    ) -> Result<Solution, SolveError> {
        Ok(Solution::valid((0..graph.nb_vertices().min(2)).collect()))
    }

    fn solve_min_radius(
        &self,
        graph: &Graph,
        nb_centers: usize,
    ) -> Result<Solution, SolveError> {
        Ok(Solution::valid((0..nb_centers.min(graph.nb_vertices())).collect()))
    }
}

struct StubSolveSolverBuilder;

impl SolveSolverBuilder for StubSolveSolverBuilder {
    fn build(&self, _config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(StubSolver))
    }
}

#[given("a path adjacency list exists on disk")]
fn path_adjacency_exists(#[from(world)] world: &SolveWorld) {
    world.use_graph(Some(PATH_FIVE));
}

#[given("the adjacency list path does not exist")]
fn adjacency_path_missing(#[from(world)] world: &SolveWorld) {
    world.use_graph(None);
}

#[given("a malformed adjacency list exists on disk")]
fn malformed_adjacency_exists(#[from(world)] world: &SolveWorld) {
    world.use_graph(Some("0 1 2\n"));
}

#[given("a strip image and its settings exist on disk")]
fn strip_image_exists(#[from(world)] world: &SolveWorld) {
    let image = world.workspace.write("strip.ppm", STRIP_IMAGE);
    let settings = world.workspace.write("settings.txt", SETTINGS);
    world.inputs.replace(vec![
        format!("--{ARG_SOLVE_IMAGE}"),
        image.into_string(),
        format!("--{ARG_SOLVE_SETTINGS}"),
        settings.into_string(),
    ]);
}

#[when("I run the solve command with radius 1")]
fn run_with_radius(#[from(world)] world: &SolveWorld) {
    world.run(&[format!("--{ARG_SOLVE_RADIUS}"), "1".to_owned()]);
}

#[when("I run the solve command with a budget of 1 center")]
fn run_with_budget(#[from(world)] world: &SolveWorld) {
    world.run(&[format!("--{ARG_SOLVE_CENTERS}"), "1".to_owned()]);
}

#[when("I run the solve command without an objective")]
fn run_without_objective(#[from(world)] world: &SolveWorld) {
    world.run(&[]);
}

#[then("the command succeeds and reports two centers")]
fn command_reports_two_centers(#[from(world)] world: &SolveWorld) {
    world.assert_success(2);
}

#[then("the command succeeds and reports one center")]
fn command_reports_one_center(#[from(world)] world: &SolveWorld) {
    world.assert_success(1);
}

#[then("the command fails because no objective was chosen")]
fn command_fails_missing_objective(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::MissingObjective => {}
        other => panic!("expected MissingObjective, found {other:?}"),
    }
}

#[then("the command fails because the graph file is missing")]
fn command_fails_missing_graph(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_SOLVE_GRAPH),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the adjacency list is malformed")]
fn command_fails_malformed_graph(#[from(world)] world: &SolveWorld) {
    match &*world.error() {
        CliError::ParseAdjacency { .. } => {}
        other => panic!("expected ParseAdjacency, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(
    solve_adjacency_radius,
    "solving an adjacency list at a fixed radius"
);
register_solve_scenario!(solve_image_budget, "solving an image for a center budget");
register_solve_scenario!(solve_missing_objective, "rejecting a missing objective");
register_solve_scenario!(
    solve_missing_graph,
    "rejecting an adjacency file that does not exist"
);
register_solve_scenario!(solve_malformed_graph, "rejecting a malformed adjacency list");
