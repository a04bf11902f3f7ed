pub mod store;
pub mod totals;

pub use store::{load_planner, save_planner, PlannerState, MEAL_SLOTS};
pub use totals::{calorie_target, daily_totals, rda_coverage, DailyTotals};
