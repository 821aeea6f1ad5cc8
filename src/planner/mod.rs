pub mod extract;
pub mod filter;
pub mod model;
pub mod solver;

pub use extract::extract_plan;
pub use filter::{active_rules, eligible_meals, FilterRule, FILTER_RULES};
pub use model::{build_model, Constraint, Model, Relation, VariableKey};
pub use solver::{Assignment, MilpSolver, Outcome, Solver};

use crate::error::{DiningError, Result};
use crate::models::{Meal, Preferences, WeeklyPlan, SLOT_COUNT};

/// Run the full pipeline: filter, inventory check, model build, solve, extract.
///
/// The catalog is borrowed read-only; everything else is request-local, so
/// concurrent calls over the same catalog need no coordination.
pub fn plan_week(
    catalog: &[Meal],
    prefs: &Preferences,
    solver: &dyn Solver,
) -> Result<WeeklyPlan> {
    let eligible = eligible_meals(catalog, prefs);
    if eligible.len() < SLOT_COUNT {
        return Err(DiningError::InsufficientInventory {
            available: eligible.len(),
        });
    }

    let model = build_model(&eligible, prefs);
    match solver.solve(&model)? {
        Outcome::Optimal(assignment) => extract_plan(&eligible, &model, &assignment, prefs),
        Outcome::Infeasible => Err(DiningError::Infeasible),
    }
}
