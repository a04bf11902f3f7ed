use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Difficulty;
use crate::scoring::DEFAULT_RANKING_LIMIT;

/// EatWise — scores foods against RDAs, ranks and compares them, and quizzes you.
#[derive(Parser, Debug)]
#[command(name = "eat_wise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the catalog JSON files.
    #[arg(short, long, default_value = "data")]
    pub data: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank foods by the amount of one nutrient.
    Top {
        /// Nutrient id, e.g. iron.
        nutrient: String,

        #[arg(short, long, default_value_t = DEFAULT_RANKING_LIMIT)]
        limit: usize,

        /// Also write the ranking to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Rank foods by overall nutrition score.
    Best {
        /// Restrict the ranking to one category.
        #[arg(long)]
        category: Option<String>,

        /// Categories to leave out.
        #[arg(long)]
        exclude: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_RANKING_LIMIT)]
        limit: usize,

        /// Also write the ranking to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Compare 2 or 3 foods nutrient by nutrient.
    Compare {
        /// Food ids or names.
        foods: Vec<String>,

        /// Age group for RDA lookups (children, teens, adults, seniors).
        #[arg(long, default_value = "adults")]
        age: String,
    },

    /// Play a nutrition quiz.
    Quiz {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Seed for reproducible question selection.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or edit the daily meal plan.
    Plan {
        /// Path to the planner state file.
        #[arg(long, default_value = "planner.json")]
        file: PathBuf,

        /// Set the age group (children, teens, adults, seniors).
        #[arg(long)]
        set_age: Option<String>,

        /// Assign a recipe to a slot, e.g. breakfast=porridge.
        #[arg(long)]
        add: Option<String>,

        /// Empty one slot.
        #[arg(long)]
        remove: Option<String>,

        /// Empty every slot.
        #[arg(long)]
        clear: bool,
    },
}
