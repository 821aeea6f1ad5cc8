/// One user's dietary toggles and settings for a single optimization request.
///
/// Every toggle narrows the eligible menu; unset toggles impose nothing.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    // Health & allergies
    pub diabetic: bool,
    pub celiac: bool,
    pub lactose_intolerant: bool,
    pub nut_allergy: bool,

    // Diet type
    pub vegan: bool,
    pub vegetarian: bool,
    pub pescatarian: bool,
    pub keto: bool,

    // Religious/cultural
    pub kosher: bool,
    pub halal: bool,

    // Health goals
    pub gain_weight: bool,
    pub lose_weight: bool,
    pub gain_muscle: bool,

    // Food preferences
    pub avoid_grains: bool,
    pub avoid_legumes: bool,
    pub avoid_bread: bool,
    pub avoid_dairy: bool,
    pub avoid_spicy: bool,
    pub avoid_fried: bool,

    pub gender: Gender,
    pub weekly_budget: f64,
}

/// Gender category selecting reference nutrition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Reference daily intake for this category.
    ///
    /// Reported alongside the plan for context; not enforced by the model.
    pub fn targets(self) -> NutritionTargets {
        match self {
            Gender::Male => NutritionTargets {
                calories_min: 1100.0,
                calories_max: 1600.0,
                protein_min: 50.0,
            },
            Gender::Female => NutritionTargets {
                calories_min: 900.0,
                calories_max: 1400.0,
                protein_min: 45.0,
            },
            Gender::Other => NutritionTargets {
                calories_min: 1000.0,
                calories_max: 1500.0,
                protein_min: 45.0,
            },
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// Daily calorie window and protein floor for one gender category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionTargets {
    pub calories_min: f64,
    pub calories_max: f64,
    pub protein_min: f64,
}
