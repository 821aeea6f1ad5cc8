use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{DiningError, Result};
use crate::models::{Gender, Preferences};

/// Restriction labels shown in the picker, paired with their toggle setters.
const RESTRICTIONS: &[(&str, fn(&mut Preferences))] = &[
    ("Diabetic", |p| p.diabetic = true),
    ("Celiac (gluten intolerant)", |p| p.celiac = true),
    ("Lactose intolerant", |p| p.lactose_intolerant = true),
    ("Nut allergy", |p| p.nut_allergy = true),
    ("Vegan", |p| p.vegan = true),
    ("Vegetarian", |p| p.vegetarian = true),
    ("Pescatarian", |p| p.pescatarian = true),
    ("Keto", |p| p.keto = true),
    ("Kosher", |p| p.kosher = true),
    ("Halal", |p| p.halal = true),
    ("Gain weight", |p| p.gain_weight = true),
    ("Lose weight", |p| p.lose_weight = true),
    ("Gain muscle", |p| p.gain_muscle = true),
    ("Avoid grains", |p| p.avoid_grains = true),
    ("Avoid legumes", |p| p.avoid_legumes = true),
    ("Avoid bread", |p| p.avoid_bread = true),
    ("Avoid dairy", |p| p.avoid_dairy = true),
    ("Avoid spicy food", |p| p.avoid_spicy = true),
    ("Avoid fried food", |p| p.avoid_fried = true),
];

/// Prompt for dietary restrictions, goals, gender, and budget.
pub fn collect_preferences() -> Result<Preferences> {
    let mut prefs = Preferences::default();

    let labels: Vec<&str> = RESTRICTIONS.iter().map(|(label, _)| *label).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select restrictions and goals (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    for idx in picked {
        (RESTRICTIONS[idx].1)(&mut prefs);
    }

    prefs.gender = prompt_gender()?;
    prefs.weekly_budget = prompt_budget()?;

    Ok(prefs)
}

/// Prompt for the gender category used for nutrition targets.
pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female", "other"];
    let selection = Select::new()
        .with_prompt("Gender (for reference nutrition targets)")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Other,
    })
}

/// Prompt for the weekly budget in dollars.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weekly budget ($)")
        .default("100".to_string())
        .interact_text()?;

    let budget: f64 = input
        .parse()
        .map_err(|_| DiningError::InvalidInput("Invalid number".to_string()))?;

    if budget <= 0.0 {
        return Err(DiningError::InvalidInput(
            "Budget must be positive".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
