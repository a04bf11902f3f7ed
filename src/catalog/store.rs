use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{AgeGroup, Category, Food, Nutrient, Recipe};

/// Daily calorie range for an age sub-group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieRange {
    pub min: f64,
    pub max: f64,
}

/// Finer-grained band within an age group (e.g. "19-30").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubGroup {
    pub id: String,

    #[serde(default)]
    pub daily_calories: Option<CalorieRange>,
}

/// Age-group metadata beyond the per-nutrient RDA tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeGroupInfo {
    pub id: AgeGroup,

    pub name: String,

    #[serde(default)]
    pub sub_groups: Vec<SubGroup>,
}

/// Read-only nutrition catalog: foods, nutrients, age groups, recipes.
///
/// Built once by `load_catalog` and never mutated afterwards. Nutrients
/// keep their file order so every iteration over them is deterministic.
pub struct Catalog {
    foods: Vec<Food>,
    nutrients: Vec<Nutrient>,
    nutrient_index: HashMap<String, usize>,
    age_groups: Vec<AgeGroupInfo>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(
        foods: Vec<Food>,
        nutrients: Vec<Nutrient>,
        age_groups: Vec<AgeGroupInfo>,
        recipes: Vec<Recipe>,
    ) -> Self {
        let nutrient_index = nutrients
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self {
            foods,
            nutrients,
            nutrient_index,
            age_groups,
            recipes,
        }
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn food(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn foods_in_category(&self, category: Category) -> Vec<&Food> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    pub fn foods_with_tag(&self, tag: &str) -> Vec<&Food> {
        self.foods.iter().filter(|f| f.has_tag(tag)).collect()
    }

    /// All nutrients in catalog (file) order.
    pub fn nutrients(&self) -> &[Nutrient] {
        &self.nutrients
    }

    pub fn nutrient(&self, id: &str) -> Option<&Nutrient> {
        self.nutrient_index.get(id).map(|&i| &self.nutrients[i])
    }

    pub fn nutrient_ids(&self) -> impl Iterator<Item = &str> {
        self.nutrients.iter().map(|n| n.id.as_str())
    }

    pub fn age_group(&self, age: AgeGroup) -> Option<&AgeGroupInfo> {
        self.age_groups.iter().find(|g| g.id == age)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
