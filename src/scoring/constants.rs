/// Nutrients averaged into a food's overall score.
pub const KEY_NUTRIENTS: [&str; 8] = [
    "protein",
    "fiber",
    "vitamin_a",
    "vitamin_c",
    "vitamin_d",
    "calcium",
    "iron",
    "potassium",
];

/// Per-nutrient scores are capped here before the overall average.
pub const OVERALL_SCORE_CAP: i64 = 100;

/// Coverage label thresholds (percent of RDA per 100g).
pub const LABEL_EXCELLENT: i64 = 50;
pub const LABEL_GOOD: i64 = 25;
pub const LABEL_MODERATE: i64 = 10;

/// Default length of a ranking.
pub const DEFAULT_RANKING_LIMIT: usize = 10;
