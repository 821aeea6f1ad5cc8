use crate::export::plan_summary;
use crate::models::{Day, Gender, Meal, Slot, WeeklyPlan};

/// Display the weekly schedule, one day at a time, then the summary block.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");
    println!();

    for day in Day::ALL {
        println!("{day}");
        for slot in Slot::ALL {
            match plan.entry(day, slot) {
                Some(entry) => println!(
                    "  {:<6} {} ({}) - ${:.2} | {:.0} kcal | {:.1}g protein",
                    format!("{slot}:"),
                    entry.dish,
                    entry.restaurant,
                    entry.price,
                    entry.calories,
                    entry.protein
                ),
                None => println!("  {:<6} (unassigned)", format!("{slot}:")),
            }
        }
    }

    println!();
    println!("--- Summary ---");
    print!("{}", plan_summary(plan));
    println!();
}

/// Show the reference intake for a gender category next to the plan averages.
///
/// Informative only; the optimizer does not enforce these bounds.
pub fn display_targets(gender: Gender, plan: &WeeklyPlan) {
    let targets = gender.targets();
    println!(
        "Reference intake ({}): {:.0}-{:.0} kcal/day, >= {:.0}g protein/day",
        gender, targets.calories_min, targets.calories_max, targets.protein_min
    );
    println!(
        "This plan averages {:.0} kcal and {:.1}g protein per day.",
        plan.avg_daily_calories, plan.avg_daily_protein
    );
    println!();
}

/// Quick menu overview for the inspect command.
pub fn display_menu_summary(meals: &[Meal]) {
    if meals.is_empty() {
        println!("Menu is empty.");
        return;
    }

    let mut restaurants: Vec<&str> = meals.iter().map(|m| m.restaurant.as_str()).collect();
    restaurants.sort_unstable();
    restaurants.dedup();

    let min_price = meals.iter().map(|m| m.price).fold(f64::MAX, f64::min);
    let max_price = meals.iter().map(|m| m.price).fold(0.0, f64::max);

    println!();
    println!("=== Menu ({} meals) ===", meals.len());
    println!("Restaurants: {}", restaurants.len());
    println!("Price range: ${min_price:.2} - ${max_price:.2}");
    println!();

    for meal in meals.iter().take(10) {
        println!("  {}", meal.debug_string());
    }
    if meals.len() > 10 {
        println!("  ... and {} more", meals.len() - 10);
    }
    println!();
}
