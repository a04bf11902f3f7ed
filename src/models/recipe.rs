use serde::{Deserialize, Serialize};

/// One ingredient of a recipe, by catalog food id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub food_id: String,

    /// Amount in grams; nutrient data is per 100g.
    #[serde(default = "default_amount_g")]
    pub amount_g: f64,
}

fn default_amount_g() -> f64 {
    100.0
}

/// Precomputed per-recipe totals (at minimum calories).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    #[serde(default)]
    pub calories: f64,
}

/// A recipe the meal planner can slot into a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    pub name: String,

    /// breakfast, lunch, dinner, or snack.
    #[serde(default)]
    pub meal_type: String,

    #[serde(default)]
    pub cook_time_min: u32,

    #[serde(default)]
    pub total_nutrients: NutrientTotals,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}
