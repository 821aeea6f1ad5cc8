use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};

use crate::error::{DiningError, Result};
use crate::planner::model::{Model, Relation};

/// A 0/1 value per model variable, in the model's variable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    pub fn is_selected(&self, var_idx: usize) -> bool {
        self.values.get(var_idx).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of one solve: a cost-minimal assignment, or a proof none exists.
#[derive(Debug, Clone)]
pub enum Outcome {
    Optimal(Assignment),
    Infeasible,
}

/// Capability contract for a 0/1 integer linear solver.
///
/// Any conforming backend can be substituted without touching the model
/// builder or the extractor. Internal backend failures (timeouts, numerical
/// trouble) surface as errors and are retryable with the same model.
pub trait Solver {
    fn solve(&self, model: &Model) -> Result<Outcome>;
}

/// Production solver backed by `good_lp`'s bundled MILP backend.
#[derive(Debug, Default)]
pub struct MilpSolver;

impl Solver for MilpSolver {
    fn solve(&self, model: &Model) -> Result<Outcome> {
        let mut vars = variables!();
        let xs: Vec<Variable> = (0..model.variable_count())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective = model
            .costs
            .iter()
            .zip(&xs)
            .fold(Expression::from(0.0), |acc, (cost, x)| acc + *cost * *x);

        let mut problem = vars.minimise(objective).using(default_solver);
        for row in &model.constraints {
            let lhs = row
                .terms
                .iter()
                .fold(Expression::from(0.0), |acc, (idx, coeff)| {
                    acc + *coeff * xs[*idx]
                });
            let bound = match row.relation {
                Relation::AtMost => lhs.leq(row.rhs),
                Relation::Equal => lhs.eq(row.rhs),
            };
            problem = problem.with(bound);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = xs.iter().map(|x| solution.value(*x) > 0.5).collect();
                Ok(Outcome::Optimal(Assignment::new(values)))
            }
            Err(ResolutionError::Infeasible) => Ok(Outcome::Infeasible),
            Err(e) => Err(DiningError::Solver(e.to_string())),
        }
    }
}
