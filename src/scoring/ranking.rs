use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::models::{AgeGroup, Category, Food};
use crate::scoring::engine::overall_score;

/// Foods with a strictly positive amount of a nutrient, best first.
///
/// Sorted descending by raw amount (score ordering is identical per age
/// group, so re-deriving RDAs here would buy nothing); ties keep catalog
/// order via the stable sort.
pub fn top_for_nutrient<'a>(
    foods: &'a [Food],
    nutrient_id: &str,
    limit: usize,
) -> Vec<&'a Food> {
    let mut ranked: Vec<&Food> = foods
        .iter()
        .filter(|f| f.nutrient(nutrient_id) > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        b.nutrient(nutrient_id)
            .partial_cmp(&a.nutrient(nutrient_id))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Foods ranked by adult overall score, best first, excluding the given
/// categories. Ties keep catalog order.
pub fn top_overall<'a>(
    catalog: &Catalog,
    foods: &'a [Food],
    excluded: &[Category],
    limit: usize,
) -> Vec<&'a Food> {
    let mut scored: Vec<(&Food, i64)> = foods
        .iter()
        .filter(|f| !excluded.contains(&f.category))
        .map(|f| (f, overall_score(catalog, f, AgeGroup::Adults)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(f, _)| f).collect()
}

/// Foods of one category ranked by adult overall score, best first.
pub fn top_in_category<'a>(
    catalog: &Catalog,
    foods: &'a [Food],
    category: Category,
    limit: usize,
) -> Vec<&'a Food> {
    let mut scored: Vec<(&Food, i64)> = foods
        .iter()
        .filter(|f| f.category == category)
        .map(|f| (f, overall_score(catalog, f, AgeGroup::Adults)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(f, _)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::sample_catalog;

    #[test]
    fn test_top_for_nutrient_descending_positive_only() {
        let catalog = sample_catalog();
        let top = top_for_nutrient(catalog.foods(), "iron", 10);

        assert!(top.iter().all(|f| f.nutrient("iron") > 0.0));
        for pair in top.windows(2) {
            assert!(pair[0].nutrient("iron") >= pair[1].nutrient("iron"));
        }
        assert_eq!(top[0].id, "oats");
    }

    #[test]
    fn test_top_for_nutrient_respects_limit() {
        let catalog = sample_catalog();
        let top = top_for_nutrient(catalog.foods(), "protein", 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "chicken");
    }

    #[test]
    fn test_top_for_nutrient_ties_keep_catalog_order() {
        let catalog = sample_catalog();
        let foods: Vec<_> = catalog.foods().to_vec();
        // vitamin_d: only salmon (13.0) and cheddar (0.6) qualify; equalize them
        let mut tied = foods.clone();
        for f in &mut tied {
            if f.nutrients.contains_key("vitamin_d") {
                f.nutrients.insert("vitamin_d".to_string(), 5.0);
            }
        }
        let top = top_for_nutrient(&tied, "vitamin_d", 10);
        assert_eq!(top.len(), 2);
        // salmon precedes cheddar in the catalog
        assert_eq!(top[0].id, "salmon");
        assert_eq!(top[1].id, "cheddar");
    }

    #[test]
    fn test_top_overall_excludes_categories() {
        let catalog = sample_catalog();
        let top = top_overall(
            &catalog,
            catalog.foods(),
            &[Category::Fruit, Category::Vegetable],
            10,
        );
        assert!(top
            .iter()
            .all(|f| f.category != Category::Fruit && f.category != Category::Vegetable));
        for pair in top.windows(2) {
            let a = overall_score(&catalog, pair[0], AgeGroup::Adults);
            let b = overall_score(&catalog, pair[1], AgeGroup::Adults);
            assert!(a >= b);
        }
    }

    #[test]
    fn test_top_in_category() {
        let catalog = sample_catalog();
        let top = top_in_category(&catalog, catalog.foods(), Category::Fruit, 10);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|f| f.category == Category::Fruit));
    }
}
