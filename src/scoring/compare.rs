use crate::catalog::Catalog;
use crate::error::{Result, WiseError};
use crate::models::{AgeGroup, Food};
use crate::scoring::engine::nutrient_score;

/// Per-nutrient outcome of a comparison.
#[derive(Debug, Clone)]
pub struct NutrientOutcome {
    pub nutrient_id: String,

    /// One score per compared food, in input order.
    pub scores: Vec<i64>,

    /// Index of the winning food; None when every score is zero.
    pub winner: Option<usize>,
}

/// Result of comparing 2 or 3 foods over the full nutrient set.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// One entry per catalog nutrient, in catalog order.
    pub details: Vec<NutrientOutcome>,

    /// Nutrients won per food, in input order. Sums to at most the
    /// nutrient count; all-zero nutrients credit nobody.
    pub wins: Vec<u32>,
}

impl Comparison {
    pub fn nutrient_count(&self) -> usize {
        self.details.len()
    }
}

/// Compare 2 or 3 foods nutrient by nutrient for one age group.
///
/// The winner of each nutrient is the food with the highest score; on an
/// exact tie the earliest-listed food keeps the win. Nutrients scoring
/// zero for every food stay in the detail list but tally no win.
pub fn compare(catalog: &Catalog, foods: &[&Food], age: AgeGroup) -> Result<Comparison> {
    if foods.len() < 2 || foods.len() > 3 {
        return Err(WiseError::InvalidComparison(foods.len()));
    }

    let mut wins = vec![0u32; foods.len()];
    let mut details = Vec::with_capacity(catalog.nutrients().len());

    for nutrient in catalog.nutrients() {
        let scores: Vec<i64> = foods
            .iter()
            .map(|f| nutrient_score(catalog, f, &nutrient.id, age))
            .collect();

        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }

        let winner = if scores[best] > 0 {
            wins[best] += 1;
            Some(best)
        } else {
            None
        };

        details.push(NutrientOutcome {
            nutrient_id: nutrient.id.clone(),
            scores,
            winner,
        });
    }

    Ok(Comparison { details, wins })
}
