//! Linear model representation and the two coverage formulations.
//!
//! Both formulations share the same skeleton: a binary `x_i` per vertex
//! marking it as a center and a binary `c_i_j` per ordered pair assigning
//! vertex `j` to center `i`. Every vertex is assigned exactly once and only
//! to an opened center.

use coverplan_core::{Distance, Graph, Objective, VertexId};

mod lp;

/// Value above which a relaxed `x_i` counts as an opened center.
pub const CENTER_THRESHOLD: f64 = 1e-4;

/// Position of a variable within its [`MipModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Index into [`MipModel::variables`] and into backend value vectors.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Zero or one.
    Binary,
    /// Integer in `0..=upper`.
    Integer {
        /// Inclusive upper bound.
        upper: i64,
    },
}

/// A named decision variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Identifier used in LP output.
    pub name: String,
    /// Variable domain.
    pub kind: VarKind,
}

/// `coefficient · var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTerm {
    /// Integer multiplier.
    pub coefficient: i64,
    /// Variable the coefficient applies to.
    pub var: VarId,
}

impl LinearTerm {
    /// Build a term.
    #[must_use]
    pub const fn new(coefficient: i64, var: VarId) -> Self {
        Self { coefficient, var }
    }
}

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `lhs <= rhs`.
    LessEqual,
    /// `lhs = rhs`.
    Equal,
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::LessEqual => "<=",
            Self::Equal => "=",
        })
    }
}

/// `Σ terms (sense) rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    /// Row label used in LP output.
    pub name: String,
    /// Left-hand side.
    pub terms: Vec<LinearTerm>,
    /// Comparison applied.
    pub sense: Sense,
    /// Constant right-hand side.
    pub rhs: i64,
}

/// A minimisation problem over integer and binary variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MipModel {
    name: String,
    variables: Vec<Variable>,
    objective: Vec<LinearTerm>,
    constraints: Vec<LinearConstraint>,
}

impl MipModel {
    /// Create an empty model labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a variable and return its handle.
    pub fn add_variable(&mut self, name: impl Into<String>, kind: VarKind) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(Variable {
            name: name.into(),
            kind,
        });
        id
    }

    /// Replace the minimised expression.
    pub fn set_objective(&mut self, terms: Vec<LinearTerm>) {
        self.objective = terms;
    }

    /// Append a constraint row.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        terms: Vec<LinearTerm>,
        sense: Sense,
        rhs: i64,
    ) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            terms,
            sense,
            rhs,
        });
    }

    /// Model label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variables in creation order.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a variable by handle.
    #[must_use]
    pub fn variable(&self, var: VarId) -> Option<&Variable> {
        self.variables.get(var.index())
    }

    /// Minimised expression.
    #[must_use]
    pub fn objective(&self) -> &[LinearTerm] {
        &self.objective
    }

    /// Constraint rows in creation order.
    #[must_use]
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}

/// A [`MipModel`] for one coverage question together with the handles
/// needed to read centers back out of a backend's values.
///
/// # Examples
///
/// ```rust
/// use coverplan_core::Graph;
/// use coverplan_solver_mip::Formulation;
///
/// # fn main() -> Result<(), coverplan_core::GraphError> {
/// let path = Graph::new(vec![vec![1], vec![0, 2], vec![1]])?;
/// let formulation = Formulation::min_centers(&path, 1);
/// assert_eq!(formulation.model().variables().len(), 3 + 9);
/// assert_eq!(formulation.centers_from(&[0.0, 1.0, 0.0]), vec![1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formulation {
    objective: Objective,
    model: MipModel,
    centers: Vec<VarId>,
}

impl Formulation {
    /// Minimise `Σ x_i` subject to every vertex being assigned to an opened
    /// center within `radius`.
    #[must_use]
    pub fn min_centers(graph: &Graph, radius: Distance) -> Self {
        let mut model = MipModel::new(format!("coverplan minimum centers at radius {radius}"));
        let vars = AssignmentVars::add_to(&mut model, graph.nb_vertices());
        model.set_objective(
            vars.centers
                .iter()
                .map(|&var| LinearTerm::new(1, var))
                .collect(),
        );

        for (center, row) in vars.assignments.iter().enumerate() {
            for (vertex, &assign) in row.iter().enumerate() {
                let name = format!("reach_{center}_{vertex}");
                match graph.distance(center, vertex) {
                    None => model.add_constraint(
                        name,
                        vec![LinearTerm::new(1, assign)],
                        Sense::LessEqual,
                        0,
                    ),
                    Some(0) => {}
                    Some(distance) => model.add_constraint(
                        name,
                        vec![LinearTerm::new(i64::from(distance), assign)],
                        Sense::LessEqual,
                        i64::from(radius),
                    ),
                }
            }
        }
        vars.add_assignment_rows(&mut model);

        Self {
            objective: Objective::MinCenters { radius },
            model,
            centers: vars.centers,
        }
    }

    /// Minimise an integer radius `r` subject to every vertex being assigned
    /// within `r` of one of at most `nb_centers` opened centers.
    #[must_use]
    pub fn min_radius(graph: &Graph, nb_centers: usize) -> Self {
        let mut model = MipModel::new(format!("coverplan minimum radius with {nb_centers} centers"));
        let vars = AssignmentVars::add_to(&mut model, graph.nb_vertices());
        let radius = model.add_variable(
            "r",
            VarKind::Integer {
                upper: i64::from(graph.max_finite_distance()),
            },
        );
        model.set_objective(vec![LinearTerm::new(1, radius)]);

        for (center, row) in vars.assignments.iter().enumerate() {
            for (vertex, &assign) in row.iter().enumerate() {
                let name = format!("reach_{center}_{vertex}");
                match graph.distance(center, vertex) {
                    None => model.add_constraint(
                        name,
                        vec![LinearTerm::new(1, assign)],
                        Sense::LessEqual,
                        0,
                    ),
                    Some(0) => {}
                    Some(distance) => model.add_constraint(
                        name,
                        vec![
                            LinearTerm::new(i64::from(distance), assign),
                            LinearTerm::new(-1, radius),
                        ],
                        Sense::LessEqual,
                        0,
                    ),
                }
            }
        }
        vars.add_assignment_rows(&mut model);
        model.add_constraint(
            "budget",
            vars.centers
                .iter()
                .map(|&var| LinearTerm::new(1, var))
                .collect(),
            Sense::LessEqual,
            i64::try_from(nb_centers).unwrap_or(i64::MAX),
        );

        Self {
            objective: Objective::MinRadius { nb_centers },
            model,
            centers: vars.centers,
        }
    }

    /// Question this formulation answers.
    #[must_use]
    pub const fn objective(&self) -> Objective {
        self.objective
    }

    /// Underlying model.
    #[must_use]
    pub const fn model(&self) -> &MipModel {
        &self.model
    }

    /// `x_i` handle for every vertex, indexed by vertex id.
    #[must_use]
    pub fn center_vars(&self) -> &[VarId] {
        &self.centers
    }

    /// Vertices whose `x_i` exceeds [`CENTER_THRESHOLD`] in `values`, in
    /// ascending order. Missing values count as closed.
    #[must_use]
    pub fn centers_from(&self, values: &[f64]) -> Vec<VertexId> {
        self.centers
            .iter()
            .enumerate()
            .filter(|&(_, var)| {
                values
                    .get(var.index())
                    .is_some_and(|&value| value > CENTER_THRESHOLD)
            })
            .map(|(vertex, _)| vertex)
            .collect()
    }
}

/// Handles for `x_i` and `c_i_j`.
struct AssignmentVars {
    centers: Vec<VarId>,
    assignments: Vec<Vec<VarId>>,
}

impl AssignmentVars {
    fn add_to(model: &mut MipModel, nb_vertices: usize) -> Self {
        let centers = (0..nb_vertices)
            .map(|vertex| model.add_variable(format!("x_{vertex}"), VarKind::Binary))
            .collect();
        let assignments = (0..nb_vertices)
            .map(|center| {
                (0..nb_vertices)
                    .map(|vertex| {
                        model.add_variable(format!("c_{center}_{vertex}"), VarKind::Binary)
                    })
                    .collect()
            })
            .collect();
        Self {
            centers,
            assignments,
        }
    }

    /// `c_i_j - x_i <= 0` for every pair and `Σ_i c_i_j = 1` for every `j`.
    fn add_assignment_rows(&self, model: &mut MipModel) {
        for (center, (&open, row)) in self.centers.iter().zip(&self.assignments).enumerate() {
            for (vertex, &assign) in row.iter().enumerate() {
                model.add_constraint(
                    format!("link_{center}_{vertex}"),
                    vec![LinearTerm::new(1, assign), LinearTerm::new(-1, open)],
                    Sense::LessEqual,
                    0,
                );
            }
        }
        for vertex in 0..self.centers.len() {
            let terms = self
                .assignments
                .iter()
                .filter_map(|row| row.get(vertex))
                .map(|&assign| LinearTerm::new(1, assign))
                .collect();
            model.add_constraint(format!("assign_{vertex}"), terms, Sense::Equal, 1);
        }
    }
}
