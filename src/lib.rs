pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod quiz;
pub mod scoring;

pub use error::{Result, WiseError};
pub use models::{AgeGroup, Category, Difficulty, Food, Nutrient, Question};
