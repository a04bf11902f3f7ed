use std::fs;
use std::path::Path;

use crate::catalog::store::{AgeGroupInfo, Catalog};
use crate::error::{Result, WiseError};
use crate::models::{Food, Nutrient, Recipe};

/// Load and validate the catalog from a data directory.
///
/// `foods.json` and `nutrients.json` are required; `age-groups.json` and
/// `recipes.json` are optional and default to empty when absent.
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<Catalog> {
    let dir = dir.as_ref();

    let foods: Vec<Food> = load_json(&dir.join("foods.json"))?;
    let nutrients: Vec<Nutrient> = load_json(&dir.join("nutrients.json"))?;
    let age_groups: Vec<AgeGroupInfo> = load_json_optional(&dir.join("age-groups.json"))?;
    let recipes: Vec<Recipe> = load_json_optional(&dir.join("recipes.json"))?;

    validate_foods(&foods)?;
    validate_nutrients(&nutrients)?;
    validate_recipes(&recipes, &foods)?;

    Ok(Catalog::new(foods, nutrients, age_groups, recipes))
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Missing optional files yield an empty collection; malformed content is
/// still an error.
fn load_json_optional<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    load_json(path)
}

fn validate_foods(foods: &[Food]) -> Result<()> {
    for food in foods {
        if !food.is_valid() {
            return Err(WiseError::InvalidData(format!(
                "food {} has out-of-range values",
                food.id
            )));
        }
    }
    let mut seen = std::collections::HashSet::new();
    for food in foods {
        if !seen.insert(&food.id) {
            return Err(WiseError::InvalidData(format!(
                "duplicate food id: {}",
                food.id
            )));
        }
    }
    Ok(())
}

fn validate_nutrients(nutrients: &[Nutrient]) -> Result<()> {
    for nutrient in nutrients {
        for (age, rda) in &nutrient.rda {
            if *rda <= 0.0 {
                return Err(WiseError::InvalidData(format!(
                    "nutrient {} has non-positive RDA for {}",
                    nutrient.id,
                    age.as_str()
                )));
            }
        }
        if !is_hex_color(&nutrient.color) {
            return Err(WiseError::InvalidData(format!(
                "nutrient {} has invalid color: {}",
                nutrient.id, nutrient.color
            )));
        }
    }
    Ok(())
}

fn validate_recipes(recipes: &[Recipe], foods: &[Food]) -> Result<()> {
    for recipe in recipes {
        for ing in &recipe.ingredients {
            if ing.amount_g <= 0.0 {
                return Err(WiseError::InvalidData(format!(
                    "recipe {} ingredient {} has non-positive amount",
                    recipe.id, ing.food_id
                )));
            }
            if !foods.iter().any(|f| f.id == ing.food_id) {
                return Err(WiseError::InvalidData(format!(
                    "recipe {} references unknown food {}",
                    recipe.id, ing.food_id
                )));
            }
        }
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
