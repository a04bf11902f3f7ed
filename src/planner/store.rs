use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::AgeGroup;

/// The four meal slots of a planned day.
pub const MEAL_SLOTS: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

/// A planned day: chosen age group plus one recipe id per filled slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    pub age_group: AgeGroup,

    #[serde(default)]
    pub meals: HashMap<String, String>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            age_group: AgeGroup::Adults,
            meals: HashMap::new(),
        }
    }
}

impl PlannerState {
    pub fn set_meal(&mut self, slot: &str, recipe_id: &str) {
        self.meals.insert(slot.to_string(), recipe_id.to_string());
    }

    pub fn remove_meal(&mut self, slot: &str) -> Option<String> {
        self.meals.remove(slot)
    }

    pub fn clear_meals(&mut self) {
        self.meals.clear();
    }

    pub fn is_valid_slot(slot: &str) -> bool {
        MEAL_SLOTS.contains(&slot)
    }
}

/// Load the planner state, substituting the default for a missing file
/// or malformed content. A broken planner file is never fatal.
pub fn load_planner<P: AsRef<Path>>(path: P) -> PlannerState {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PlannerState::default(),
    }
}

/// Persist the planner state as pretty JSON.
pub fn save_planner<P: AsRef<Path>>(path: P, state: &PlannerState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
