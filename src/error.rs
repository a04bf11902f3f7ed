use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiseError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Nutrient not found: {0}")]
    NutrientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Comparison needs 2 or 3 foods, got {0}")]
    InvalidComparison(usize),

    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, WiseError>;
