use serde::{Deserialize, Deserializer};

/// One menu row: a dish offered by a restaurant, with price, nutrition
/// figures, and the 0/1 eligibility flags used by the preference filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "Restaurant")]
    pub restaurant: String,

    #[serde(rename = "Meal")]
    pub dish: String,

    pub price: f64,

    #[serde(rename = "calories_kcal")]
    pub calories: f64,

    #[serde(rename = "protein_g")]
    pub protein: f64,

    pub fat_g: f64,
    pub sugar_g: f64,
    pub carbs_g: f64,
    pub calcium_mg: f64,
    pub fiber_mg: f64,
    pub cholesterol_mg: f64,
    pub potassium_mg: f64,
    pub iron_mg: f64,
    pub sodium_mg: f64,

    #[serde(deserialize_with = "bit")]
    pub contains_gluten: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_lactose: bool,
    #[serde(deserialize_with = "bit")]
    pub diabetic_friendly: bool,
    #[serde(deserialize_with = "bit")]
    pub vegan: bool,
    #[serde(deserialize_with = "bit")]
    pub vegetarian: bool,
    #[serde(deserialize_with = "bit")]
    pub pescatarian: bool,
    #[serde(deserialize_with = "bit")]
    pub kosher: bool,
    #[serde(deserialize_with = "bit")]
    pub halal: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_nuts: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_grains: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_legumes: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_bread: bool,
    #[serde(deserialize_with = "bit")]
    pub contains_dairy: bool,
    #[serde(deserialize_with = "bit")]
    pub keto_friendly: bool,
    #[serde(deserialize_with = "bit")]
    pub gaining_weight_diet: bool,
    #[serde(deserialize_with = "bit")]
    pub loose_weight_diet: bool,
    #[serde(deserialize_with = "bit")]
    pub gaining_muscle_diet: bool,
    #[serde(deserialize_with = "bit")]
    pub spicy: bool,
    #[serde(deserialize_with = "bit")]
    pub fried: bool,
    #[serde(deserialize_with = "bit")]
    pub grilled: bool,
    #[serde(deserialize_with = "bit")]
    pub baked: bool,
    #[serde(deserialize_with = "bit")]
    pub boiled: bool,
}

/// Deserialize a 0/1 column into a bool, rejecting anything else.
fn bit<'de, D>(de: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(de)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a 0/1 flag, got {other}"
        ))),
    }
}

impl Meal {
    /// Basic validation: price and nutrition figures must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.price, self.calories, self.protein]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for diagnostics.
    pub fn debug_string(&self) -> String {
        format!(
            "{} @ {}: ${:.2}, {:.0} kcal, {:.1}g protein",
            self.dish, self.restaurant, self.price, self.calories, self.protein
        )
    }
}
