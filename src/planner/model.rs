use std::collections::BTreeMap;

use crate::models::{Day, Meal, Preferences, Slot};

/// Identifies one binary decision variable: meal `meal` served on `day` at `slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableKey {
    /// Index into the eligible-meal slice the model was built from.
    pub meal: usize,
    pub day: Day,
    pub slot: Slot,
}

/// Comparison side of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    AtMost,
}

/// A sparse linear row: `sum(coeff * x[var]) {=, <=} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub label: String,
    /// (variable index, coefficient) pairs; variables absent here have coefficient 0.
    pub terms: Vec<(usize, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

/// A 0/1 integer program as plain data: variables, cost vector, constraint rows.
///
/// Building the model is separated from solving it so the constraint set can
/// be unit-tested without a solver backend.
#[derive(Debug, Clone)]
pub struct Model {
    pub variables: Vec<VariableKey>,
    /// Objective coefficient (meal price) per variable, to be minimized.
    pub costs: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl Model {
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Flat index of the variable for (meal, day, slot).
    pub fn index(&self, meal: usize, day: Day, slot: Slot) -> usize {
        let day_pos = Day::ALL.iter().position(|d| *d == day).unwrap_or(0);
        let slot_pos = Slot::ALL.iter().position(|s| *s == slot).unwrap_or(0);
        meal * Day::ALL.len() * Slot::ALL.len() + day_pos * Slot::ALL.len() + slot_pos
    }
}

/// Build the assignment model for an eligible-meal slice and a preference set.
///
/// Pure function of its inputs. Variables are laid out meal-major, then day,
/// then slot, so `Model::index` is simple arithmetic.
pub fn build_model(meals: &[&Meal], prefs: &Preferences) -> Model {
    let mut variables = Vec::with_capacity(meals.len() * Day::ALL.len() * Slot::ALL.len());
    let mut costs = Vec::with_capacity(variables.capacity());

    for (meal_idx, meal) in meals.iter().enumerate() {
        for day in Day::ALL {
            for slot in Slot::ALL {
                variables.push(VariableKey {
                    meal: meal_idx,
                    day,
                    slot,
                });
                costs.push(meal.price);
            }
        }
    }

    let mut model = Model {
        variables,
        costs,
        constraints: Vec::new(),
    };

    add_budget(&mut model, prefs.weekly_budget);
    add_slot_coverage(&mut model);
    add_no_repeat(&mut model, meals);
    add_restaurant_caps(&mut model, meals);
    add_dinner_exclusion(&mut model, meals, "no_legumes_dinner", |m| {
        m.contains_legumes
    });
    add_dinner_exclusion(&mut model, meals, "no_grains_dinner", |m| m.contains_grains);

    model
}

/// Total weekly spend stays within budget.
fn add_budget(model: &mut Model, budget: f64) {
    let terms = model.costs.iter().copied().enumerate().collect();
    model.constraints.push(Constraint {
        label: "budget".to_string(),
        terms,
        relation: Relation::AtMost,
        rhs: budget,
    });
}

/// Exactly one meal per (day, slot).
fn add_slot_coverage(model: &mut Model) {
    let meal_count = model.variable_count() / (Day::ALL.len() * Slot::ALL.len());
    for day in Day::ALL {
        for slot in Slot::ALL {
            let terms = (0..meal_count)
                .map(|m| (model.index(m, day, slot), 1.0))
                .collect();
            model.constraints.push(Constraint {
                label: format!("cover_{day}_{slot}"),
                terms,
                relation: Relation::Equal,
                rhs: 1.0,
            });
        }
    }
}

/// Each dish appears at most once across the week.
fn add_no_repeat(model: &mut Model, meals: &[&Meal]) {
    for (meal_idx, meal) in meals.iter().enumerate() {
        let terms = slots_of(model, meal_idx);
        model.constraints.push(Constraint {
            label: format!("once_{}", meal.dish),
            terms,
            relation: Relation::AtMost,
            rhs: 1.0,
        });
    }
}

/// At most 5 meals per restaurant per week, and at most 1 per restaurant per day.
fn add_restaurant_caps(model: &mut Model, meals: &[&Meal]) {
    let mut by_restaurant: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (meal_idx, meal) in meals.iter().enumerate() {
        by_restaurant
            .entry(meal.restaurant.as_str())
            .or_default()
            .push(meal_idx);
    }

    for (restaurant, meal_idxs) in &by_restaurant {
        let terms: Vec<(usize, f64)> = meal_idxs
            .iter()
            .flat_map(|m| slots_of(model, *m))
            .collect();
        model.constraints.push(Constraint {
            label: format!("weekly_cap_{restaurant}"),
            terms,
            relation: Relation::AtMost,
            rhs: 5.0,
        });

        for day in Day::ALL {
            let terms: Vec<(usize, f64)> = meal_idxs
                .iter()
                .flat_map(|m| Slot::ALL.map(|slot| (model.index(*m, day, slot), 1.0)))
                .collect();
            model.constraints.push(Constraint {
                label: format!("daily_cap_{restaurant}_{day}"),
                terms,
                relation: Relation::AtMost,
                rhs: 1.0,
            });
        }
    }
}

/// Per day, no flagged meal may occupy the Dinner slot.
fn add_dinner_exclusion(
    model: &mut Model,
    meals: &[&Meal],
    label: &str,
    flagged: fn(&Meal) -> bool,
) {
    let flagged_idxs: Vec<usize> = meals
        .iter()
        .enumerate()
        .filter(|(_, m)| flagged(m))
        .map(|(i, _)| i)
        .collect();

    if flagged_idxs.is_empty() {
        return;
    }

    for day in Day::ALL {
        let terms = flagged_idxs
            .iter()
            .map(|m| (model.index(*m, day, Slot::Dinner), 1.0))
            .collect();
        model.constraints.push(Constraint {
            label: format!("{label}_{day}"),
            terms,
            relation: Relation::Equal,
            rhs: 0.0,
        });
    }
}

/// All 14 (day, slot) variable indices for one meal.
fn slots_of(model: &Model, meal_idx: usize) -> Vec<(usize, f64)> {
    Day::ALL
        .iter()
        .flat_map(|day| Slot::ALL.map(|slot| (model.index(meal_idx, *day, slot), 1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SLOT_COUNT;

    fn meal(restaurant: &str, dish: &str, price: f64) -> Meal {
        Meal {
            restaurant: restaurant.to_string(),
            dish: dish.to_string(),
            price,
            ..Meal::default()
        }
    }

    fn prefs(budget: f64) -> Preferences {
        Preferences {
            weekly_budget: budget,
            ..Preferences::default()
        }
    }

    fn find<'a>(model: &'a Model, label: &str) -> &'a Constraint {
        model
            .constraints
            .iter()
            .find(|c| c.label == label)
            .unwrap_or_else(|| panic!("missing constraint {label}"))
    }

    #[test]
    fn test_variable_layout() {
        let meals = [meal("A", "a1", 5.0), meal("B", "b1", 6.0)];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        assert_eq!(model.variable_count(), 2 * SLOT_COUNT);
        assert_eq!(model.costs[model.index(0, Day::Monday, Slot::Lunch)], 5.0);
        assert_eq!(model.costs[model.index(1, Day::Sunday, Slot::Dinner)], 6.0);

        let key = model.variables[model.index(1, Day::Wednesday, Slot::Dinner)];
        assert_eq!(key.meal, 1);
        assert_eq!(key.day, Day::Wednesday);
        assert_eq!(key.slot, Slot::Dinner);
    }

    #[test]
    fn test_budget_constraint() {
        let meals = [meal("A", "a1", 5.0), meal("B", "b1", 6.0)];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(75.0));

        let budget = find(&model, "budget");
        assert_eq!(budget.relation, Relation::AtMost);
        assert_eq!(budget.rhs, 75.0);
        assert_eq!(budget.terms.len(), model.variable_count());
        // Coefficients are the meal prices.
        assert_eq!(budget.terms[model.index(0, Day::Monday, Slot::Lunch)].1, 5.0);
        assert_eq!(budget.terms[model.index(1, Day::Monday, Slot::Lunch)].1, 6.0);
    }

    #[test]
    fn test_slot_coverage_constraints() {
        let meals = [meal("A", "a1", 5.0), meal("B", "b1", 6.0)];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        let cover: Vec<&Constraint> = model
            .constraints
            .iter()
            .filter(|c| c.label.starts_with("cover_"))
            .collect();
        assert_eq!(cover.len(), SLOT_COUNT);

        let monday_lunch = find(&model, "cover_Monday_Lunch");
        assert_eq!(monday_lunch.relation, Relation::Equal);
        assert_eq!(monday_lunch.rhs, 1.0);
        assert_eq!(monday_lunch.terms.len(), 2);
    }

    #[test]
    fn test_no_repeat_constraints() {
        let meals = [meal("A", "a1", 5.0)];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        let once = find(&model, "once_a1");
        assert_eq!(once.relation, Relation::AtMost);
        assert_eq!(once.rhs, 1.0);
        assert_eq!(once.terms.len(), SLOT_COUNT);
    }

    #[test]
    fn test_restaurant_caps() {
        let meals = [
            meal("A", "a1", 5.0),
            meal("A", "a2", 6.0),
            meal("B", "b1", 7.0),
        ];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        let weekly = find(&model, "weekly_cap_A");
        assert_eq!(weekly.relation, Relation::AtMost);
        assert_eq!(weekly.rhs, 5.0);
        assert_eq!(weekly.terms.len(), 2 * SLOT_COUNT);

        let daily = find(&model, "daily_cap_A_Friday");
        assert_eq!(daily.rhs, 1.0);
        // Two meals from A, both slots of Friday.
        assert_eq!(daily.terms.len(), 4);

        let daily_b = find(&model, "daily_cap_B_Friday");
        assert_eq!(daily_b.terms.len(), 2);
    }

    #[test]
    fn test_dinner_exclusions() {
        let mut lentils = meal("A", "Lentil Soup", 5.0);
        lentils.contains_legumes = true;
        let mut pasta = meal("B", "Pasta", 6.0);
        pasta.contains_grains = true;
        let plain = meal("C", "Steak", 9.0);

        let meals = [lentils, pasta, plain];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        let legumes = find(&model, "no_legumes_dinner_Monday");
        assert_eq!(legumes.relation, Relation::Equal);
        assert_eq!(legumes.rhs, 0.0);
        assert_eq!(legumes.terms.len(), 1);
        assert_eq!(
            legumes.terms[0].0,
            model.index(0, Day::Monday, Slot::Dinner)
        );

        let grains = find(&model, "no_grains_dinner_Sunday");
        assert_eq!(grains.terms.len(), 1);
        assert_eq!(grains.terms[0].0, model.index(1, Day::Sunday, Slot::Dinner));
    }

    #[test]
    fn test_dinner_exclusions_omitted_when_no_flagged_meals() {
        let meals = [meal("A", "a1", 5.0)];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        assert!(!model
            .constraints
            .iter()
            .any(|c| c.label.starts_with("no_legumes") || c.label.starts_with("no_grains")));
    }

    #[test]
    fn test_constraint_count_for_plain_catalog() {
        // 3 meals, 2 restaurants, no flags:
        // 1 budget + 14 coverage + 3 no-repeat + 2 weekly caps + 2*7 daily caps.
        let meals = [
            meal("A", "a1", 5.0),
            meal("A", "a2", 6.0),
            meal("B", "b1", 7.0),
        ];
        let refs: Vec<&Meal> = meals.iter().collect();
        let model = build_model(&refs, &prefs(100.0));

        assert_eq!(model.constraints.len(), 1 + 14 + 3 + 2 + 14);
    }
}
