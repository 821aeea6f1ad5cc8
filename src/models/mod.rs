pub mod meal;
pub mod plan;
pub mod preferences;

pub use meal::Meal;
pub use plan::{Day, PlanEntry, Slot, WeeklyPlan, SLOT_COUNT};
pub use preferences::{Gender, NutritionTargets, Preferences};
