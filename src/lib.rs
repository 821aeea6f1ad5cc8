pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{DiningError, Result};
pub use models::{Meal, Preferences, WeeklyPlan};
