pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_nutrient_ranking_csv, write_overall_ranking_csv};
pub use prompts::{prompt_yes_no, resolve_food, run_quiz};
pub use render::{
    display_comparison, display_nutrient_ranking, display_overall_ranking, display_planner,
    display_quiz_results,
};
