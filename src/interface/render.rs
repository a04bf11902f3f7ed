use crate::catalog::Catalog;
use crate::models::{AgeGroup, Food, Nutrient};
use crate::planner::{calorie_target, daily_totals, rda_coverage, PlannerState, MEAL_SLOTS};
use crate::quiz::{QuizResults, Rating};
use crate::scoring::{coverage_label, nutrient_score, overall_score, Comparison};

/// Display a per-nutrient ranking with raw amounts and RDA coverage.
pub fn display_nutrient_ranking(catalog: &Catalog, nutrient: &Nutrient, foods: &[&Food]) {
    if foods.is_empty() {
        println!("No foods with {} found.", nutrient.name);
        return;
    }

    println!();
    println!("=== Top foods for {} ({}) ===", nutrient.name, nutrient.unit);
    println!();

    let max_name_len = foods.iter().map(|f| f.name().len()).max().unwrap_or(10);

    for (i, food) in foods.iter().enumerate() {
        let amount = food.nutrient(&nutrient.id);
        let score = nutrient_score(catalog, food, &nutrient.id, AgeGroup::Adults);
        println!(
            "{:>3}. {:<width$}  {}{} per 100g | {}% of RDA ({})",
            i + 1,
            food.name(),
            amount,
            nutrient.unit,
            score,
            coverage_label(score),
            width = max_name_len
        );
    }
    println!();
}

/// Display an overall-score ranking.
pub fn display_overall_ranking(catalog: &Catalog, title: &str, foods: &[&Food]) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name().len()).max().unwrap_or(10);

    for (i, food) in foods.iter().enumerate() {
        let score = overall_score(catalog, food, AgeGroup::Adults);
        println!(
            "{:>3}. {:<width$}  {:>4.0} kcal | overall score {}",
            i + 1,
            food.name(),
            food.calories,
            score,
            width = max_name_len
        );
    }
    println!();
}

/// Display a side-by-side comparison with per-nutrient winners.
pub fn display_comparison(catalog: &Catalog, foods: &[&Food], comparison: &Comparison) {
    println!();
    println!(
        "=== Comparing {} ===",
        foods
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(" vs ")
    );
    println!();

    for outcome in &comparison.details {
        let Some(nutrient) = catalog.nutrient(&outcome.nutrient_id) else {
            continue;
        };
        let scores = outcome
            .scores
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let marker = if outcome.winner == Some(i) { "*" } else { " " };
                format!("{}{:>4}%{}", marker, s, marker)
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {:<12} {}", nutrient.name, scores);
    }

    println!();
    println!("--- Wins ---");
    for (i, food) in foods.iter().enumerate() {
        println!(
            "  {}: {} / {} nutrients",
            food.name(),
            comparison.wins[i],
            comparison.nutrient_count()
        );
    }
    println!();
}

/// Display final quiz results with the rating tier.
pub fn display_quiz_results(results: &QuizResults) {
    println!();
    println!("=== Quiz Results ===");
    println!(
        "Score: {} / {} ({}%)",
        results.score, results.total, results.percent
    );
    let message = match results.rating {
        Rating::Expert => "Nutrition expert!",
        Rating::Great => "Great knowledge!",
        Rating::Good => "Good effort, keep it up!",
        Rating::Learning => "Still learning - try an easier round!",
    };
    println!("{}", message);
    println!();
}

/// Display the planned day: slots, calories against target, RDA coverage.
pub fn display_planner(catalog: &Catalog, state: &PlannerState) {
    println!();
    println!("=== Meal plan ({}) ===", state.age_group.label());
    println!();

    for slot in MEAL_SLOTS {
        match state.meals.get(slot).and_then(|id| catalog.recipe(id)) {
            Some(recipe) => println!(
                "  {:<10} {} ({:.0} kcal)",
                slot,
                recipe.name,
                recipe.total_nutrients.calories
            ),
            None => println!("  {:<10} (empty)", slot),
        }
    }

    let totals = daily_totals(catalog, state);
    let target = calorie_target(catalog, state.age_group);
    let pct = if target > 0.0 {
        (totals.calories / target * 100.0).round()
    } else {
        0.0
    };

    println!();
    println!("--- Daily total ---");
    println!("Calories: {:.0} / {:.0} kcal ({:.0}%)", totals.calories, target, pct);

    for nutrient in catalog.nutrients() {
        let amount = totals.nutrients.get(&nutrient.id).copied().unwrap_or(0.0);
        let coverage = rda_coverage(catalog, &totals, &nutrient.id, state.age_group);
        println!(
            "  {:<12} {:>7.1}{} | {}% of RDA ({})",
            nutrient.name,
            amount,
            nutrient.unit,
            coverage,
            coverage_label(coverage)
        );
    }
    println!();
}
