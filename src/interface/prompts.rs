use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{Result, WiseError};
use crate::models::Food;
use crate::quiz::QuizSession;

/// Minimum similarity for a fuzzy food-name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Resolve a food by id or display name, with fuzzy suggestions.
///
/// Exact matches (case-insensitive id or name) resolve silently; close
/// matches prompt for confirmation before being accepted.
pub fn resolve_food<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a Food> {
    let needle = query.to_lowercase();

    let exact = catalog
        .foods()
        .iter()
        .find(|f| f.id.to_lowercase() == needle || f.name().to_lowercase() == needle);
    if let Some(food) = exact {
        return Ok(food);
    }

    let mut candidates: Vec<(&Food, f64)> = catalog
        .foods()
        .iter()
        .map(|f| {
            let by_id = jaro_winkler(&f.id.to_lowercase(), &needle);
            let by_name = jaro_winkler(&f.name().to_lowercase(), &needle);
            (f, by_id.max(by_name))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Err(WiseError::FoodNotFound(query.to_string()));
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name()))
            .default(true)
            .interact()?;
        if confirm {
            return Ok(food);
        }
        return Err(WiseError::FoodNotFound(query.to_string()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name().to_string())
        .collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(candidates[selection].0)
    } else {
        Err(WiseError::FoodNotFound(query.to_string()))
    }
}

/// Play a quiz session on the terminal, one question at a time.
pub fn run_quiz(session: &mut QuizSession) -> Result<()> {
    while let Some(question) = session.current_question().cloned() {
        let (index, total) = session.progress();
        println!();
        println!(
            "Question {} of {}  |  Score: {}",
            index + 1,
            total,
            session.score()
        );

        let selection = Select::new()
            .with_prompt(question.text.as_str())
            .items(&question.options)
            .default(0)
            .interact()?;

        match session.answer(selection) {
            Some(true) => println!("Correct!"),
            Some(false) => println!(
                "Not quite. The answer was: {}",
                question.options[question.correct]
            ),
            None => {}
        }
        println!("{}", question.explanation);

        session.advance();
    }
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
