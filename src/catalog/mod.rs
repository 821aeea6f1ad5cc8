use std::path::Path;

use crate::error::{DiningError, Result};
use crate::models::Meal;

/// Columns a menu CSV must carry, matching the `Meal` field set.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Restaurant",
    "Meal",
    "price",
    "calories_kcal",
    "protein_g",
    "fat_g",
    "sugar_g",
    "contains_gluten",
    "contains_lactose",
    "diabetic_friendly",
    "vegan",
    "vegetarian",
    "pescatarian",
    "kosher",
    "halal",
    "contains_nuts",
    "carbs_g",
    "calcium_mg",
    "fiber_mg",
    "cholesterol_mg",
    "potassium_mg",
    "iron_mg",
    "sodium_mg",
    "contains_grains",
    "contains_legumes",
    "contains_bread",
    "contains_dairy",
    "keto_friendly",
    "gaining_weight_diet",
    "loose_weight_diet",
    "gaining_muscle_diet",
    "spicy",
    "fried",
    "grilled",
    "baked",
    "boiled",
];

/// Load a menu from a CSV file.
///
/// Validates the header against [`REQUIRED_COLUMNS`] before deserializing,
/// then rejects rows with negative or non-finite price/nutrition values.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let mut reader = csv::Reader::from_path(path)?;
    validate_headers(reader.headers()?)?;

    let mut meals = Vec::new();
    for record in reader.deserialize() {
        let meal: Meal = record?;
        if !meal.is_valid() {
            return Err(DiningError::InvalidMeal(meal.debug_string()));
        }
        meals.push(meal);
    }

    Ok(meals)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DiningError::MissingColumns(missing.join(", ")))
    }
}
