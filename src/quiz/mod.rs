pub mod generator;
pub mod session;

pub use generator::{generate_questions, QUIZ_LENGTH};
pub use session::{QuizResults, QuizSession, Rating};
