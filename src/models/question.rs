/// Quiz difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated multiple-choice question.
///
/// Never mutated after creation; `correct` always indexes into `options`.
#[derive(Debug, Clone)]
pub struct Question {
    pub text: String,

    /// 2 to 4 answer options.
    pub options: Vec<String>,

    /// Index of the correct option.
    pub correct: usize,

    /// Shown after answering.
    pub explanation: String,

    pub difficulty: Difficulty,
}
