use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Render the plan as CSV, one row per entry:
/// day, meal_type, restaurant, dish, price, calories, protein.
pub fn plan_to_csv(plan: &WeeklyPlan) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in &plan.entries {
        writer.serialize(entry)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the CSV export to a file.
pub fn write_plan_csv<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    fs::write(path, plan_to_csv(plan)?)?;
    Ok(())
}

/// Write the full plan (entries plus aggregates) as pretty JSON.
pub fn write_plan_json<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Plain-text summary: cost, budget usage, daily averages, meal count.
pub fn plan_summary(plan: &WeeklyPlan) -> String {
    format!(
        "Total cost: ${:.2}\n\
         Budget used: {:.1}%\n\
         Average daily calories: {:.0} kcal\n\
         Average daily protein: {:.1} g\n\
         Meals planned: {}\n",
        plan.total_cost,
        plan.budget_used_percent,
        plan.avg_daily_calories,
        plan.avg_daily_protein,
        plan.meal_count()
    )
}
