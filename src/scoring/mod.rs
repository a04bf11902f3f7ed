pub mod compare;
pub mod constants;
pub mod engine;
pub mod ranking;

pub use compare::{compare, Comparison, NutrientOutcome};
pub use constants::{DEFAULT_RANKING_LIMIT, KEY_NUTRIENTS};
pub use engine::{coverage_label, nutrient_score, overall_score};
pub use ranking::{top_for_nutrient, top_in_category, top_overall};
