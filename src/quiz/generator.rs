use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{AgeGroup, Difficulty, Food, Nutrient, Question};

/// Target quiz length; generation may fall short on a sparse catalog.
pub const QUIZ_LENGTH: usize = 10;

/// Candidate counts per pool.
const EASY_CALORIE_QUESTIONS: usize = 3;
const EASY_NUTRIENT_QUESTIONS: usize = 3;
const MEDIUM_NUTRIENT_QUESTIONS: usize = 4;
const MEDIUM_AGE_QUESTIONS: usize = 2;
const HARD_RDA_QUESTIONS: usize = 3;
const HARD_NUTRIENT_QUESTIONS: usize = 3;

/// Everyday nutrients used for easy comparisons and excluded from hard ones.
const EASY_NUTRIENTS: [&str; 3] = ["protein", "fiber", "vitamin_c"];

/// Nutrients whose RDA varies meaningfully across age groups.
const AGE_RDA_NUTRIENTS: [&str; 4] = ["calcium", "iron", "vitamin_d", "protein"];

/// Nutrients with memorable RDA figures for the hard tier.
const RDA_VALUE_NUTRIENTS: [&str; 5] = ["calcium", "iron", "vitamin_d", "protein", "vitamin_c"];

/// Wrong-answer multipliers for the literal-RDA questions.
const DISTRACTOR_FACTORS: [f64; 3] = [0.5, 1.8, 2.5];

/// Generate a quiz of up to `QUIZ_LENGTH` questions for a difficulty.
///
/// All three pools are generated, then filtered to the requested tier
/// (medium keeps everything). An under-quota filtered set is backfilled
/// with the remaining candidates in random order; candidates that cannot
/// be formed (no eligible food pair, missing RDA) are silently dropped,
/// so fewer than `QUIZ_LENGTH` questions is a valid outcome.
pub fn generate_questions(
    catalog: &Catalog,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut questions = Vec::new();

    // Easy: calorie comparisons, then everyday-nutrient comparisons.
    for _ in 0..EASY_CALORIE_QUESTIONS {
        if let Some(q) = calorie_question(catalog, rng) {
            questions.push(q);
        }
    }
    for _ in 0..EASY_NUTRIENT_QUESTIONS {
        let Some(nid) = EASY_NUTRIENTS.choose(rng) else {
            continue;
        };
        if let Some(nutrient) = catalog.nutrient(nid) {
            if let Some(q) = nutrient_question(catalog, nutrient, Difficulty::Easy, rng) {
                questions.push(q);
            }
        }
    }

    // Medium: any-nutrient comparisons, then age-group RDA ranking.
    for _ in 0..MEDIUM_NUTRIENT_QUESTIONS {
        if let Some(nutrient) = catalog.nutrients().choose(rng) {
            if let Some(q) = nutrient_question(catalog, nutrient, Difficulty::Medium, rng) {
                questions.push(q);
            }
        }
    }
    for _ in 0..MEDIUM_AGE_QUESTIONS {
        let Some(nid) = AGE_RDA_NUTRIENTS.choose(rng) else {
            continue;
        };
        if let Some(nutrient) = catalog.nutrient(nid) {
            questions.push(age_rda_question(nutrient));
        }
    }

    // Hard: literal RDA values, then less-common-nutrient comparisons.
    for _ in 0..HARD_RDA_QUESTIONS {
        let Some(nid) = RDA_VALUE_NUTRIENTS.choose(rng) else {
            continue;
        };
        let Some(age) = AgeGroup::ALL.choose(rng) else {
            continue;
        };
        if let Some(nutrient) = catalog.nutrient(nid) {
            if let Some(q) = rda_value_question(nutrient, *age, rng) {
                questions.push(q);
            }
        }
    }
    let uncommon: Vec<&Nutrient> = catalog
        .nutrients()
        .iter()
        .filter(|n| !EASY_NUTRIENTS.contains(&n.id.as_str()))
        .collect();
    for _ in 0..HARD_NUTRIENT_QUESTIONS {
        if let Some(nutrient) = uncommon.choose(rng) {
            if let Some(q) = nutrient_question(catalog, nutrient, Difficulty::Hard, rng) {
                questions.push(q);
            }
        }
    }

    // Filter to the requested tier; medium is the union of all pools.
    let (mut selected, rest): (Vec<Question>, Vec<Question>) = match difficulty {
        Difficulty::Easy => questions
            .into_iter()
            .partition(|q| q.difficulty == Difficulty::Easy),
        Difficulty::Hard => questions
            .into_iter()
            .partition(|q| q.difficulty == Difficulty::Hard),
        Difficulty::Medium => (questions, Vec::new()),
    };

    // Backfill an under-quota set with leftover candidates, randomly
    // ordered, stopping once the quota is met or the pool runs dry.
    if selected.len() < QUIZ_LENGTH {
        let deficit = QUIZ_LENGTH - selected.len();
        let mut rest = rest;
        rest.shuffle(rng);
        selected.extend(rest.into_iter().take(deficit));
    }

    selected.shuffle(rng);
    selected.truncate(QUIZ_LENGTH);
    selected
}

/// "Which is lower in calories per 100g?" over a random food pair.
fn calorie_question(catalog: &Catalog, rng: &mut impl Rng) -> Option<Question> {
    let all: Vec<&Food> = catalog.foods().iter().collect();
    let (a, b) = choose_pair(&all, rng)?;

    // Ties favor the first operand, matching the comparison service.
    let correct = if a.calories <= b.calories { 0 } else { 1 };
    let (winner, loser) = if correct == 0 { (a, b) } else { (b, a) };

    Some(Question {
        text: format!(
            "Which is lower in calories per 100g: {} or {}?",
            a.name(),
            b.name()
        ),
        options: vec![a.name().to_string(), b.name().to_string()],
        correct,
        explanation: format!(
            "{} has {} kcal/100g vs {} kcal/100g for {}.",
            winner.name(),
            format_amount(a.calories.min(b.calories)),
            format_amount(a.calories.max(b.calories)),
            loser.name()
        ),
        difficulty: Difficulty::Easy,
    })
}

/// "Which food has more X?" over a pair with positive amounts of X.
fn nutrient_question(
    catalog: &Catalog,
    nutrient: &Nutrient,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<Question> {
    let eligible: Vec<&Food> = catalog
        .foods()
        .iter()
        .filter(|f| f.nutrient(&nutrient.id) > 0.0)
        .collect();
    let (a, b) = choose_pair(&eligible, rng)?;

    let a_val = a.nutrient(&nutrient.id);
    let b_val = b.nutrient(&nutrient.id);
    let correct = if a_val >= b_val { 0 } else { 1 };
    let (winner, loser) = if correct == 0 { (a, b) } else { (b, a) };

    Some(Question {
        text: format!(
            "Which food has more {} per 100g: {} or {}?",
            nutrient.name,
            a.name(),
            b.name()
        ),
        options: vec![a.name().to_string(), b.name().to_string()],
        correct,
        explanation: format!(
            "{} has {}{} per 100g compared to {}{} for {}.",
            winner.name(),
            format_amount(a_val.max(b_val)),
            nutrient.unit,
            format_amount(a_val.min(b_val)),
            nutrient.unit,
            loser.name()
        ),
        difficulty,
    })
}

/// "At which age do you need the most X?"; options stay in canonical
/// age order, un-shuffled.
fn age_rda_question(nutrient: &Nutrient) -> Question {
    let mut ranked: Vec<(AgeGroup, f64)> = AgeGroup::ALL
        .iter()
        .map(|age| (*age, nutrient.rda.get(age).copied().unwrap_or(0.0)))
        .collect();
    // Stable sort: on equal RDAs the earlier canonical group ranks first.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let (top_age, top_rda) = ranked[0];

    let correct = AgeGroup::ALL.iter().position(|a| *a == top_age).unwrap_or(0);

    Question {
        text: format!("At which age do you need the most {}?", nutrient.name),
        options: AgeGroup::ALL.iter().map(|a| a.label().to_string()).collect(),
        correct,
        explanation: format!(
            "{} need the most {} at {}{} per day.",
            top_age.label(),
            nutrient.name,
            format_amount(top_rda),
            nutrient.unit
        ),
        difficulty: Difficulty::Medium,
    }
}

/// "What is the recommended daily X for Y?" with computed distractors.
///
/// The correct index is wherever the true value lands after the shuffle;
/// on the rare rounding collision the first matching option is credited.
fn rda_value_question(
    nutrient: &Nutrient,
    age: AgeGroup,
    rng: &mut impl Rng,
) -> Option<Question> {
    let rda = nutrient.rda_exact(age)?;

    let mut values: Vec<f64> = vec![rda];
    values.extend(DISTRACTOR_FACTORS.iter().map(|f| (rda * f).round()));
    values.shuffle(rng);

    let correct = values.iter().position(|v| *v == rda)?;

    Some(Question {
        text: format!(
            "What is the recommended daily {} for {}?",
            nutrient.name,
            age.label()
        ),
        options: values
            .iter()
            .map(|v| format!("{}{}", format_amount(*v), nutrient.unit))
            .collect(),
        correct,
        explanation: format!(
            "The recommended daily {} intake for {} is {}{}.",
            nutrient.name,
            age.label(),
            format_amount(rda),
            nutrient.unit
        ),
        difficulty: Difficulty::Hard,
    })
}

/// Print whole numbers without a trailing ".0".
fn format_amount(v: f64) -> String {
    if (v - v.round()).abs() < f64::EPSILON {
        format!("{}", v.round() as i64)
    } else {
        format!("{}", v)
    }
}

/// Sample two distinct foods; returns None when fewer than two are eligible.
fn choose_pair<'a>(foods: &[&'a Food], rng: &mut impl Rng) -> Option<(&'a Food, &'a Food)> {
    if foods.len() < 2 {
        return None;
    }
    let pair: Vec<&Food> = foods.choose_multiple(rng, 2).copied().collect();
    Some((pair[0], pair[1]))
}
