use serde::Serialize;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Daily meal occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Lunch,
    Dinner,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Lunch, Slot::Dinner];
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Total number of weekly slots (7 days x 2 occasions).
pub const SLOT_COUNT: usize = Day::ALL.len() * Slot::ALL.len();

/// One chosen meal in the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub day: Day,
    pub meal_type: Slot,
    pub restaurant: String,
    pub dish: String,
    pub price: f64,
    pub calories: f64,
    pub protein: f64,
}

/// A complete weekly plan: 14 entries in day-major order plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub entries: Vec<PlanEntry>,
    pub total_cost: f64,
    pub budget_used_percent: f64,
    pub avg_daily_calories: f64,
    pub avg_daily_protein: f64,
}

impl WeeklyPlan {
    /// The entry scheduled for a given day and slot, if present.
    pub fn entry(&self, day: Day, slot: Slot) -> Option<&PlanEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.meal_type == slot)
    }

    pub fn meal_count(&self) -> usize {
        self.entries.len()
    }
}
