use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One of the eight food categories in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vegetable,
    Fruit,
    Grain,
    Legume,
    NutSeed,
    Dairy,
    Meat,
    Fish,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Grain => "grain",
            Category::Legume => "legume",
            Category::NutSeed => "nut_seed",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Fish => "fish",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vegetable" => Ok(Category::Vegetable),
            "fruit" => Ok(Category::Fruit),
            "grain" => Ok(Category::Grain),
            "legume" => Ok(Category::Legume),
            "nut_seed" => Ok(Category::NutSeed),
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "fish" => Ok(Category::Fish),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A catalog food with per-100g nutrient amounts.
///
/// Immutable after catalog load. Nutrient keys absent from the map are
/// treated as a zero amount, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,

    pub category: Category,

    pub calories: f64,

    pub nutrients: HashMap<String, f64>,

    /// Typical serving size in grams.
    pub serving_g: f64,

    /// Relative cost tier: 1 (budget) to 3 (premium).
    pub cost_tier: u8,

    /// Display name per language code.
    #[serde(default)]
    pub names: HashMap<String, String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Food {
    /// Amount of a nutrient per 100g, 0.0 when the key is absent.
    #[inline]
    pub fn nutrient(&self, nutrient_id: &str) -> f64 {
        self.nutrients.get(nutrient_id).copied().unwrap_or(0.0)
    }

    /// English display name, falling back to the id.
    pub fn name(&self) -> &str {
        self.names.get("en").map(String::as_str).unwrap_or(&self.id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Basic validation: non-negative amounts, positive serving, cost tier in range.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.serving_g > 0.0
            && (1..=3).contains(&self.cost_tier)
            && self.nutrients.values().all(|v| *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: "apple".to_string(),
            category: Category::Fruit,
            calories: 52.0,
            nutrients: HashMap::from([
                ("fiber".to_string(), 2.4),
                ("vitamin_c".to_string(), 4.6),
            ]),
            serving_g: 182.0,
            cost_tier: 1,
            names: HashMap::from([("en".to_string(), "Apple".to_string())]),
            tags: vec!["snack".to_string()],
        }
    }

    #[test]
    fn test_nutrient_lookup() {
        let food = sample_food();
        assert!((food.nutrient("fiber") - 2.4).abs() < 0.001);
        assert_eq!(food.nutrient("iron"), 0.0);
    }

    #[test]
    fn test_name_fallback() {
        let mut food = sample_food();
        assert_eq!(food.name(), "Apple");
        food.names.clear();
        assert_eq!(food.name(), "apple");
    }

    #[test]
    fn test_is_valid() {
        let food = sample_food();
        assert!(food.is_valid());

        let mut bad_tier = sample_food();
        bad_tier.cost_tier = 4;
        assert!(!bad_tier.is_valid());

        let mut negative = sample_food();
        negative.nutrients.insert("iron".to_string(), -1.0);
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for cat in [
            Category::Vegetable,
            Category::Fruit,
            Category::Grain,
            Category::Legume,
            Category::NutSeed,
            Category::Dairy,
            Category::Meat,
            Category::Fish,
        ] {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
        assert!("candy".parse::<Category>().is_err());
    }
}
