pub mod food;
pub mod nutrient;
pub mod question;
pub mod recipe;

pub use food::{Category, Food};
pub use nutrient::{AgeGroup, Nutrient};
pub use question::{Difficulty, Question};
pub use recipe::{Ingredient, NutrientTotals, Recipe};
