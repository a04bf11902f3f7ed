use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::AgeGroup;
use crate::planner::store::PlannerState;

/// Fallback daily calorie target when age-group data is absent.
const DEFAULT_CALORIE_TARGET: f64 = 2000.0;

/// Aggregated nutrition of a planned day.
#[derive(Debug, Clone, Default)]
pub struct DailyTotals {
    /// Sum of recipe calorie totals.
    pub calories: f64,

    /// Per-nutrient amounts summed from recipe ingredients.
    pub nutrients: HashMap<String, f64>,
}

/// Sum calories and nutrient amounts over the day's planned recipes.
///
/// Nutrients are estimated from each recipe's ingredients, scaled by
/// grams used over the per-100g catalog amounts. Unknown recipe ids are
/// skipped rather than treated as errors.
pub fn daily_totals(catalog: &Catalog, state: &PlannerState) -> DailyTotals {
    let mut totals = DailyTotals::default();
    for nid in catalog.nutrient_ids() {
        totals.nutrients.insert(nid.to_string(), 0.0);
    }

    for recipe_id in state.meals.values() {
        let Some(recipe) = catalog.recipe(recipe_id) else {
            continue;
        };
        totals.calories += recipe.total_nutrients.calories;

        for ing in &recipe.ingredients {
            let Some(food) = catalog.food(&ing.food_id) else {
                continue;
            };
            let factor = ing.amount_g / 100.0;
            for (nid, amount) in totals.nutrients.iter_mut() {
                *amount += food.nutrient(nid) * factor;
            }
        }
    }

    totals
}

/// Daily calorie target for an age group: midpoint of the last
/// sub-group's range, or 2000 when no range is available.
pub fn calorie_target(catalog: &Catalog, age: AgeGroup) -> f64 {
    catalog
        .age_group(age)
        .and_then(|info| info.sub_groups.last())
        .and_then(|sub| sub.daily_calories.as_ref())
        .map(|range| ((range.min + range.max) / 2.0).round())
        .unwrap_or(DEFAULT_CALORIE_TARGET)
}

/// Percent of the RDA covered by an aggregated nutrient amount.
pub fn rda_coverage(catalog: &Catalog, totals: &DailyTotals, nutrient_id: &str, age: AgeGroup) -> i64 {
    let Some(nutrient) = catalog.nutrient(nutrient_id) else {
        return 0;
    };
    let Some(rda) = nutrient.rda_for(age) else {
        return 0;
    };
    if rda <= 0.0 {
        return 0;
    }
    let amount = totals.nutrients.get(nutrient_id).copied().unwrap_or(0.0);
    (amount / rda * 100.0).round() as i64
}
