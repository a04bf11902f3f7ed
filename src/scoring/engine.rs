use crate::catalog::Catalog;
use crate::models::{AgeGroup, Food};
use crate::scoring::constants::*;

/// Percentage of the RDA covered by 100g of a food, rounded to an integer.
///
/// Unknown nutrients, non-positive food values, and non-positive resolved
/// RDAs all yield 0. The result is unbounded above; a display cap is the
/// caller's concern, since ranking and comparison need the raw ordering.
pub fn nutrient_score(catalog: &Catalog, food: &Food, nutrient_id: &str, age: AgeGroup) -> i64 {
    let Some(nutrient) = catalog.nutrient(nutrient_id) else {
        return 0;
    };
    let value = food.nutrient(nutrient_id);
    if value <= 0.0 {
        return 0;
    }
    let Some(rda) = nutrient.rda_for(age) else {
        return 0;
    };
    if rda <= 0.0 {
        return 0;
    }
    (value / rda * 100.0).round() as i64
}

/// Average RDA coverage across the key nutrients, each capped at 100.
///
/// Returns 0 for an empty key-nutrient set.
pub fn overall_score(catalog: &Catalog, food: &Food, age: AgeGroup) -> i64 {
    let count = KEY_NUTRIENTS.len();
    if count == 0 {
        return 0;
    }
    let total: i64 = KEY_NUTRIENTS
        .iter()
        .map(|nid| nutrient_score(catalog, food, nid, age).min(OVERALL_SCORE_CAP))
        .sum();
    (total as f64 / count as f64).round() as i64
}

/// Qualitative label for an RDA coverage score.
pub fn coverage_label(score: i64) -> &'static str {
    if score >= LABEL_EXCELLENT {
        "excellent"
    } else if score >= LABEL_GOOD {
        "good"
    } else if score >= LABEL_MODERATE {
        "moderate"
    } else {
        "low"
    }
}
