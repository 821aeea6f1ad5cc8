pub mod prompts;
pub mod render;

pub use prompts::{collect_preferences, prompt_budget, prompt_gender, prompt_yes_no};
pub use render::{display_menu_summary, display_targets, display_weekly_plan};
