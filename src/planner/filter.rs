use crate::models::{Meal, Preferences};

/// One preference toggle expressed as a row predicate.
///
/// `wants` reads the toggle off the preference set; `keeps` decides whether a
/// menu row survives when that toggle is active. Rules are independent and
/// conjunctive, so application order never matters.
pub struct FilterRule {
    pub name: &'static str,
    pub wants: fn(&Preferences) -> bool,
    pub keeps: fn(&Meal) -> bool,
}

/// Every supported preference toggle, one rule each.
pub const FILTER_RULES: &[FilterRule] = &[
    FilterRule {
        name: "diabetic",
        wants: |p| p.diabetic,
        keeps: |m| m.diabetic_friendly,
    },
    FilterRule {
        name: "celiac",
        wants: |p| p.celiac,
        keeps: |m| !m.contains_gluten,
    },
    FilterRule {
        name: "lactose intolerant",
        wants: |p| p.lactose_intolerant,
        keeps: |m| !m.contains_lactose,
    },
    FilterRule {
        name: "nut allergy",
        wants: |p| p.nut_allergy,
        keeps: |m| !m.contains_nuts,
    },
    FilterRule {
        name: "vegan",
        wants: |p| p.vegan,
        keeps: |m| m.vegan,
    },
    FilterRule {
        name: "vegetarian",
        wants: |p| p.vegetarian,
        keeps: |m| m.vegetarian,
    },
    FilterRule {
        name: "pescatarian",
        wants: |p| p.pescatarian,
        keeps: |m| m.pescatarian,
    },
    FilterRule {
        name: "keto",
        wants: |p| p.keto,
        keeps: |m| m.keto_friendly,
    },
    FilterRule {
        name: "kosher",
        wants: |p| p.kosher,
        keeps: |m| m.kosher,
    },
    FilterRule {
        name: "halal",
        wants: |p| p.halal,
        keeps: |m| m.halal,
    },
    FilterRule {
        name: "gain weight",
        wants: |p| p.gain_weight,
        keeps: |m| m.gaining_weight_diet,
    },
    FilterRule {
        name: "lose weight",
        wants: |p| p.lose_weight,
        keeps: |m| m.loose_weight_diet,
    },
    FilterRule {
        name: "gain muscle",
        wants: |p| p.gain_muscle,
        keeps: |m| m.gaining_muscle_diet,
    },
    FilterRule {
        name: "avoid grains",
        wants: |p| p.avoid_grains,
        keeps: |m| !m.contains_grains,
    },
    FilterRule {
        name: "avoid legumes",
        wants: |p| p.avoid_legumes,
        keeps: |m| !m.contains_legumes,
    },
    FilterRule {
        name: "avoid bread",
        wants: |p| p.avoid_bread,
        keeps: |m| !m.contains_bread,
    },
    FilterRule {
        name: "avoid dairy",
        wants: |p| p.avoid_dairy,
        keeps: |m| !m.contains_dairy,
    },
    FilterRule {
        name: "avoid spicy",
        wants: |p| p.avoid_spicy,
        keeps: |m| !m.spicy,
    },
    FilterRule {
        name: "avoid fried",
        wants: |p| p.avoid_fried,
        keeps: |m| !m.fried,
    },
];

/// Rules activated by this preference set.
pub fn active_rules(prefs: &Preferences) -> Vec<&'static FilterRule> {
    FILTER_RULES.iter().filter(|r| (r.wants)(prefs)).collect()
}

/// Menu rows that satisfy every active rule.
pub fn eligible_meals<'a>(catalog: &'a [Meal], prefs: &Preferences) -> Vec<&'a Meal> {
    let rules = active_rules(prefs);
    catalog
        .iter()
        .filter(|meal| rules.iter().all(|r| (r.keeps)(meal)))
        .collect()
}
