use crate::error::{DiningError, Result};
use crate::models::{Day, Meal, PlanEntry, Preferences, Slot, WeeklyPlan};
use crate::planner::model::Model;
use crate::planner::solver::Assignment;

/// Turn a solver assignment back into a structured weekly plan.
///
/// Expects exactly one selected variable per (day, slot); the slot-coverage
/// constraints guarantee this for any assignment a correct solver reports as
/// optimal. Deterministic: the same assignment always yields the same plan.
pub fn extract_plan(
    meals: &[&Meal],
    model: &Model,
    assignment: &Assignment,
    prefs: &Preferences,
) -> Result<WeeklyPlan> {
    let mut entries = Vec::with_capacity(Day::ALL.len() * Slot::ALL.len());

    for day in Day::ALL {
        for slot in Slot::ALL {
            let chosen: Vec<usize> = (0..meals.len())
                .filter(|m| assignment.is_selected(model.index(*m, day, slot)))
                .collect();

            let meal_idx = match chosen.as_slice() {
                [one] => *one,
                [] => {
                    return Err(DiningError::MalformedSolution(format!(
                        "no meal assigned to {day} {slot}"
                    )))
                }
                many => {
                    return Err(DiningError::MalformedSolution(format!(
                        "{} meals assigned to {day} {slot}",
                        many.len()
                    )))
                }
            };

            let meal = meals[meal_idx];
            entries.push(PlanEntry {
                day,
                meal_type: slot,
                restaurant: meal.restaurant.clone(),
                dish: meal.dish.clone(),
                price: meal.price,
                calories: meal.calories,
                protein: meal.protein,
            });
        }
    }

    let total_cost: f64 = entries.iter().map(|e| e.price).sum();
    let budget_used_percent = if prefs.weekly_budget > 0.0 {
        total_cost / prefs.weekly_budget * 100.0
    } else {
        0.0
    };

    Ok(WeeklyPlan {
        avg_daily_calories: daily_average(&entries, |e| e.calories),
        avg_daily_protein: daily_average(&entries, |e| e.protein),
        entries,
        total_cost,
        budget_used_percent,
    })
}

/// Mean over the 7 days of each day's summed value (lunch + dinner), not a
/// per-meal average.
fn daily_average(entries: &[PlanEntry], value: fn(&PlanEntry) -> f64) -> f64 {
    let total: f64 = Day::ALL
        .iter()
        .map(|day| {
            entries
                .iter()
                .filter(|e| e.day == *day)
                .map(value)
                .sum::<f64>()
        })
        .sum();
    total / Day::ALL.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::model::build_model;
    use assert_float_eq::assert_float_absolute_eq;

    fn meal(restaurant: &str, dish: &str, price: f64, calories: f64, protein: f64) -> Meal {
        Meal {
            restaurant: restaurant.to_string(),
            dish: dish.to_string(),
            price,
            calories,
            protein,
            ..Meal::default()
        }
    }

    fn sample_meals() -> Vec<Meal> {
        (0..14)
            .map(|i| {
                meal(
                    &format!("R{i}"),
                    &format!("dish{i}"),
                    10.0,
                    700.0,
                    35.0,
                )
            })
            .collect()
    }

    /// Assignment serving meal i in slot i (day-major order).
    fn one_meal_per_slot(model: &Model, meal_count: usize) -> Assignment {
        let mut values = vec![false; model.variable_count()];
        let mut slot_pos = 0;
        for day in Day::ALL {
            for slot in Slot::ALL {
                values[model.index(slot_pos % meal_count, day, slot)] = true;
                slot_pos += 1;
            }
        }
        Assignment::new(values)
    }

    fn prefs(budget: f64) -> Preferences {
        Preferences {
            weekly_budget: budget,
            ..Preferences::default()
        }
    }

    #[test]
    fn test_extract_builds_14_entries_with_metrics() {
        let meals = sample_meals();
        let refs: Vec<&Meal> = meals.iter().collect();
        let prefs = prefs(200.0);
        let model = build_model(&refs, &prefs);
        let assignment = one_meal_per_slot(&model, refs.len());

        let plan = extract_plan(&refs, &model, &assignment, &prefs).unwrap();

        assert_eq!(plan.entries.len(), 14);
        assert_float_absolute_eq!(plan.total_cost, 140.0);
        assert_float_absolute_eq!(plan.budget_used_percent, 70.0);
        // Two 700-kcal meals a day.
        assert_float_absolute_eq!(plan.avg_daily_calories, 1400.0);
        assert_float_absolute_eq!(plan.avg_daily_protein, 70.0);
        assert_eq!(plan.entries[0].day, Day::Monday);
        assert_eq!(plan.entries[0].meal_type, Slot::Lunch);
        assert_eq!(plan.entries[13].day, Day::Sunday);
        assert_eq!(plan.entries[13].meal_type, Slot::Dinner);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let meals = sample_meals();
        let refs: Vec<&Meal> = meals.iter().collect();
        let prefs = prefs(200.0);
        let model = build_model(&refs, &prefs);
        let assignment = one_meal_per_slot(&model, refs.len());

        let first = extract_plan(&refs, &model, &assignment, &prefs).unwrap();
        let second = extract_plan(&refs, &model, &assignment, &prefs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_rejects_empty_slot() {
        let meals = sample_meals();
        let refs: Vec<&Meal> = meals.iter().collect();
        let prefs = prefs(200.0);
        let model = build_model(&refs, &prefs);
        let assignment = Assignment::new(vec![false; model.variable_count()]);

        let err = extract_plan(&refs, &model, &assignment, &prefs).unwrap_err();
        assert!(matches!(err, DiningError::MalformedSolution(_)));
    }

    #[test]
    fn test_extract_rejects_double_booking() {
        let meals = sample_meals();
        let refs: Vec<&Meal> = meals.iter().collect();
        let prefs = prefs(200.0);
        let model = build_model(&refs, &prefs);

        let mut assignment = one_meal_per_slot(&model, refs.len());
        // Re-run with a second meal forced into Monday Lunch.
        let mut values: Vec<bool> = (0..model.variable_count())
            .map(|i| assignment.is_selected(i))
            .collect();
        values[model.index(5, Day::Monday, Slot::Lunch)] = true;
        assignment = Assignment::new(values);

        let err = extract_plan(&refs, &model, &assignment, &prefs).unwrap_err();
        assert!(matches!(err, DiningError::MalformedSolution(_)));
    }
}
