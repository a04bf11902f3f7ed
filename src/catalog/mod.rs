pub mod persistence;
pub mod store;

pub use persistence::load_catalog;
pub use store::{AgeGroupInfo, CalorieRange, Catalog, SubGroup};

/// Shared in-memory catalog for unit tests across the crate.
#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::collections::HashMap;

    use super::store::{AgeGroupInfo, CalorieRange, Catalog, SubGroup};
    use crate::models::{AgeGroup, Category, Food, Ingredient, Nutrient, NutrientTotals, Recipe};

    pub fn food(
        id: &str,
        category: Category,
        calories: f64,
        nutrients: &[(&str, f64)],
    ) -> Food {
        Food {
            id: id.to_string(),
            category,
            calories,
            nutrients: nutrients
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            serving_g: 100.0,
            cost_tier: 1,
            names: HashMap::from([("en".to_string(), title_case(id))]),
            tags: Vec::new(),
        }
    }

    pub fn nutrient(id: &str, name: &str, unit: &str, rda: [f64; 4]) -> Nutrient {
        Nutrient {
            id: id.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            rda: HashMap::from([
                (AgeGroup::Children, rda[0]),
                (AgeGroup::Teens, rda[1]),
                (AgeGroup::Adults, rda[2]),
                (AgeGroup::Seniors, rda[3]),
            ]),
            color: "#2E7D32".to_string(),
        }
    }

    fn title_case(id: &str) -> String {
        let mut chars = id.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// A small catalog spanning all eight categories and the key nutrients.
    pub fn sample_catalog() -> Catalog {
        let nutrients = vec![
            nutrient("protein", "Protein", "g", [19.0, 52.0, 50.0, 56.0]),
            nutrient("fiber", "Fiber", "g", [20.0, 26.0, 30.0, 28.0]),
            nutrient("vitamin_a", "Vitamin A", "µg", [400.0, 700.0, 900.0, 900.0]),
            nutrient("vitamin_c", "Vitamin C", "mg", [45.0, 65.0, 90.0, 90.0]),
            nutrient("vitamin_d", "Vitamin D", "µg", [15.0, 15.0, 15.0, 20.0]),
            nutrient("calcium", "Calcium", "mg", [1000.0, 1300.0, 1000.0, 1200.0]),
            nutrient("iron", "Iron", "mg", [10.0, 15.0, 18.0, 8.0]),
            nutrient("potassium", "Potassium", "mg", [2300.0, 3000.0, 3400.0, 3400.0]),
            nutrient("omega_3", "Omega-3", "g", [0.9, 1.2, 1.6, 1.6]),
        ];

        let foods = vec![
            food(
                "apple",
                Category::Fruit,
                52.0,
                &[("fiber", 2.4), ("vitamin_c", 4.6), ("potassium", 107.0)],
            ),
            food(
                "banana",
                Category::Fruit,
                95.0,
                &[("fiber", 2.6), ("vitamin_c", 8.7), ("potassium", 358.0)],
            ),
            food(
                "spinach",
                Category::Vegetable,
                23.0,
                &[
                    ("vitamin_a", 469.0),
                    ("vitamin_c", 28.0),
                    ("iron", 2.7),
                    ("calcium", 99.0),
                    ("fiber", 2.2),
                    ("potassium", 558.0),
                ],
            ),
            food(
                "salmon",
                Category::Fish,
                208.0,
                &[
                    ("protein", 20.0),
                    ("vitamin_d", 13.0),
                    ("omega_3", 2.3),
                    ("potassium", 363.0),
                ],
            ),
            food(
                "lentils",
                Category::Legume,
                116.0,
                &[
                    ("protein", 9.0),
                    ("fiber", 7.9),
                    ("iron", 3.3),
                    ("potassium", 369.0),
                ],
            ),
            food(
                "cheddar",
                Category::Dairy,
                402.0,
                &[
                    ("protein", 25.0),
                    ("calcium", 721.0),
                    ("vitamin_a", 330.0),
                    ("vitamin_d", 0.6),
                ],
            ),
            food(
                "oats",
                Category::Grain,
                389.0,
                &[("protein", 16.9), ("fiber", 10.6), ("iron", 4.7)],
            ),
            food(
                "almonds",
                Category::NutSeed,
                579.0,
                &[
                    ("protein", 21.0),
                    ("fiber", 12.5),
                    ("calcium", 269.0),
                    ("iron", 3.7),
                    ("potassium", 733.0),
                ],
            ),
            food(
                "chicken",
                Category::Meat,
                165.0,
                &[("protein", 31.0), ("iron", 1.0)],
            ),
        ];

        let age_groups = vec![AgeGroupInfo {
            id: AgeGroup::Adults,
            name: "Adults".to_string(),
            sub_groups: vec![
                SubGroup {
                    id: "19-30".to_string(),
                    daily_calories: Some(CalorieRange {
                        min: 2000.0,
                        max: 2400.0,
                    }),
                },
                SubGroup {
                    id: "31-59".to_string(),
                    daily_calories: Some(CalorieRange {
                        min: 1800.0,
                        max: 2200.0,
                    }),
                },
            ],
        }];

        let recipes = vec![
            Recipe {
                id: "porridge".to_string(),
                name: "Porridge".to_string(),
                meal_type: "breakfast".to_string(),
                cook_time_min: 10,
                total_nutrients: NutrientTotals { calories: 290.0 },
                ingredients: vec![
                    Ingredient {
                        food_id: "oats".to_string(),
                        amount_g: 50.0,
                    },
                    Ingredient {
                        food_id: "banana".to_string(),
                        amount_g: 100.0,
                    },
                ],
            },
            Recipe {
                id: "salmon_bowl".to_string(),
                name: "Salmon Bowl".to_string(),
                meal_type: "dinner".to_string(),
                cook_time_min: 25,
                total_nutrients: NutrientTotals { calories: 335.0 },
                ingredients: vec![
                    Ingredient {
                        food_id: "salmon".to_string(),
                        amount_g: 150.0,
                    },
                    Ingredient {
                        food_id: "spinach".to_string(),
                        amount_g: 100.0,
                    },
                ],
            },
        ];

        Catalog::new(foods, nutrients, age_groups, recipes)
    }
}
