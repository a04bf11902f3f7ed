use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use eat_wise_rs::catalog::{load_catalog, Catalog};
use eat_wise_rs::cli::{Cli, Command};
use eat_wise_rs::error::{Result, WiseError};
use eat_wise_rs::interface::{
    display_comparison, display_nutrient_ranking, display_overall_ranking, display_planner,
    display_quiz_results, resolve_food, run_quiz, write_nutrient_ranking_csv,
    write_overall_ranking_csv,
};
use eat_wise_rs::models::{AgeGroup, Category, Difficulty, Food};
use eat_wise_rs::planner::{load_planner, save_planner, PlannerState};
use eat_wise_rs::quiz::{generate_questions, QuizSession};
use eat_wise_rs::scoring::{compare, top_for_nutrient, top_in_category, top_overall};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.data.exists() {
        eprintln!("Catalog directory not found: {}", cli.data.display());
        eprintln!("Expected foods.json and nutrients.json inside it.");
        return Ok(());
    }
    let catalog = load_catalog(&cli.data)?;

    match cli.command {
        Command::Top {
            nutrient,
            limit,
            csv,
        } => cmd_top(&catalog, &nutrient, limit, csv.as_deref()),
        Command::Best {
            category,
            exclude,
            limit,
            csv,
        } => cmd_best(&catalog, category.as_deref(), &exclude, limit, csv.as_deref()),
        Command::Compare { foods, age } => cmd_compare(&catalog, &foods, &age),
        Command::Quiz { difficulty, seed } => cmd_quiz(&catalog, difficulty, seed),
        Command::Plan {
            file,
            set_age,
            add,
            remove,
            clear,
        } => cmd_plan(&catalog, &file, set_age.as_deref(), add.as_deref(), remove.as_deref(), clear),
    }
}

/// Rank foods by the amount of one nutrient.
fn cmd_top(catalog: &Catalog, nutrient_id: &str, limit: usize, csv: Option<&Path>) -> Result<()> {
    let nutrient = catalog
        .nutrient(nutrient_id)
        .ok_or_else(|| WiseError::NutrientNotFound(nutrient_id.to_string()))?;

    let top = top_for_nutrient(catalog.foods(), nutrient_id, limit);
    display_nutrient_ranking(catalog, nutrient, &top);

    if let Some(path) = csv {
        write_nutrient_ranking_csv(path, catalog, nutrient, &top)?;
        println!("Ranking written to {}", path.display());
    }

    Ok(())
}

/// Rank foods by overall nutrition score.
fn cmd_best(
    catalog: &Catalog,
    category: Option<&str>,
    exclude: &[String],
    limit: usize,
    csv: Option<&Path>,
) -> Result<()> {
    let (title, top) = if let Some(cat) = category {
        let cat: Category = cat
            .parse()
            .map_err(WiseError::InvalidInput)?;
        (
            format!("Top {} foods", cat.as_str()),
            top_in_category(catalog, catalog.foods(), cat, limit),
        )
    } else {
        let excluded: Vec<Category> = exclude
            .iter()
            .map(|s| s.parse().map_err(WiseError::InvalidInput))
            .collect::<Result<_>>()?;
        ("Top foods overall".to_string(), top_overall(catalog, catalog.foods(), &excluded, limit))
    };

    display_overall_ranking(catalog, &title, &top);

    if let Some(path) = csv {
        write_overall_ranking_csv(path, catalog, &top)?;
        println!("Ranking written to {}", path.display());
    }

    Ok(())
}

/// Compare 2 or 3 foods side by side.
fn cmd_compare(catalog: &Catalog, queries: &[String], age: &str) -> Result<()> {
    if queries.len() < 2 || queries.len() > 3 {
        return Err(WiseError::InvalidComparison(queries.len()));
    }

    let mut foods: Vec<&Food> = Vec::with_capacity(queries.len());
    for query in queries {
        foods.push(resolve_food(catalog, query)?);
    }

    let age = AgeGroup::parse(age);
    let comparison = compare(catalog, &foods, age)?;
    display_comparison(catalog, &foods, &comparison);

    Ok(())
}

/// Generate a quiz and play it interactively.
fn cmd_quiz(catalog: &Catalog, difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    let questions = match seed {
        Some(s) => generate_questions(catalog, difficulty, &mut StdRng::seed_from_u64(s)),
        None => generate_questions(catalog, difficulty, &mut rand::thread_rng()),
    };

    if questions.is_empty() {
        println!("Not enough catalog data to build a quiz.");
        return Ok(());
    }

    println!(
        "Starting a {} quiz with {} questions.",
        difficulty.as_str(),
        questions.len()
    );

    let mut session = QuizSession::new(questions);
    run_quiz(&mut session)?;

    if let Some(results) = session.results() {
        display_quiz_results(&results);
    }

    Ok(())
}

/// Show or edit the persisted meal plan.
fn cmd_plan(
    catalog: &Catalog,
    file: &PathBuf,
    set_age: Option<&str>,
    add: Option<&str>,
    remove: Option<&str>,
    clear: bool,
) -> Result<()> {
    let mut state = load_planner(file);
    let mut changed = false;

    if let Some(age) = set_age {
        state.age_group = AgeGroup::parse(age);
        changed = true;
    }

    if let Some(assignment) = add {
        let (slot, recipe_id) = assignment.split_once('=').ok_or_else(|| {
            WiseError::InvalidInput(format!("expected slot=recipe, got: {}", assignment))
        })?;
        if !PlannerState::is_valid_slot(slot) {
            return Err(WiseError::InvalidInput(format!("unknown slot: {}", slot)));
        }
        if catalog.recipe(recipe_id).is_none() {
            return Err(WiseError::InvalidInput(format!(
                "unknown recipe: {}",
                recipe_id
            )));
        }
        state.set_meal(slot, recipe_id);
        changed = true;
    }

    if let Some(slot) = remove {
        if state.remove_meal(slot).is_none() {
            println!("Slot {} was already empty.", slot);
        } else {
            changed = true;
        }
    }

    if clear {
        state.clear_meals();
        changed = true;
    }

    if changed {
        save_planner(file, &state)?;
    }

    display_planner(catalog, &state);

    Ok(())
}
