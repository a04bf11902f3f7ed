use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The four age groups with distinct RDA tables, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Children,
    Teens,
    Adults,
    Seniors,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Children,
        AgeGroup::Teens,
        AgeGroup::Adults,
        AgeGroup::Seniors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Children => "children",
            AgeGroup::Teens => "teens",
            AgeGroup::Adults => "adults",
            AgeGroup::Seniors => "seniors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Children => "Children",
            AgeGroup::Teens => "Teens",
            AgeGroup::Adults => "Adults",
            AgeGroup::Seniors => "Seniors",
        }
    }

    /// Parse an age group name, falling back to adults for unknown input.
    pub fn parse(s: &str) -> AgeGroup {
        match s.to_lowercase().as_str() {
            "children" => AgeGroup::Children,
            "teens" => AgeGroup::Teens,
            "seniors" => AgeGroup::Seniors,
            _ => AgeGroup::Adults,
        }
    }
}

impl Default for AgeGroup {
    fn default() -> Self {
        AgeGroup::Adults
    }
}

/// A tracked nutrient with its per-age-group RDA table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrient {
    pub id: String,

    pub name: String,

    /// Display unit, e.g. "g", "mg", "µg".
    pub unit: String,

    /// Recommended daily allowance per age group.
    pub rda: HashMap<AgeGroup, f64>,

    /// Chart color as a hex code.
    pub color: String,
}

impl Nutrient {
    /// RDA for an age group, falling back to the adults value when the
    /// specific entry is absent or non-positive.
    pub fn rda_for(&self, age: AgeGroup) -> Option<f64> {
        self.rda
            .get(&age)
            .copied()
            .filter(|v| *v > 0.0)
            .or_else(|| self.rda.get(&AgeGroup::Adults).copied())
    }

    /// Raw RDA entry for an age group, no fallback.
    pub fn rda_exact(&self, age: AgeGroup) -> Option<f64> {
        self.rda.get(&age).copied().filter(|v| *v > 0.0)
    }
}
