use crate::models::Question;

/// Rating tier thresholds as a percentage of correct answers.
const RATING_EXPERT_PCT: u32 = 80;
const RATING_GREAT_PCT: u32 = 60;
const RATING_GOOD_PCT: u32 = 40;

/// Final performance tier for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Expert,
    Great,
    Good,
    Learning,
}

impl Rating {
    pub fn for_percent(percent: u32) -> Rating {
        if percent >= RATING_EXPERT_PCT {
            Rating::Expert
        } else if percent >= RATING_GREAT_PCT {
            Rating::Great
        } else if percent >= RATING_GOOD_PCT {
            Rating::Good
        } else {
            Rating::Learning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Expert => "expert",
            Rating::Great => "great",
            Rating::Good => "good",
            Rating::Learning => "learning",
        }
    }
}

/// Final results of a finished session.
#[derive(Debug, Clone)]
pub struct QuizResults {
    pub score: u32,
    pub total: usize,
    pub percent: u32,
    pub rating: Rating,
}

/// Walks a generated question sequence, tracking score and position.
///
/// One session belongs to one caller; a new quiz means a new session.
/// The total is whatever the generator produced, which may be shorter
/// than the usual ten.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answered: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            answered: false,
        }
    }

    /// The question awaiting an answer, None once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based position and total count.
    pub fn progress(&self) -> (usize, usize) {
        (self.current, self.questions.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Submit an answer for the current question.
    ///
    /// Returns whether the selection was correct, or None when the call
    /// was a no-op (already answered, or the session is finished).
    /// Answering is idempotent per question.
    pub fn answer(&mut self, selected: usize) -> Option<bool> {
        if self.answered || self.is_finished() {
            return None;
        }
        self.answered = true;
        let correct = selected == self.questions[self.current].correct;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move past an answered question.
    ///
    /// Returns false as a no-op when the current question is still
    /// unanswered or the session already finished.
    pub fn advance(&mut self) -> bool {
        if !self.answered || self.is_finished() {
            return false;
        }
        self.current += 1;
        self.answered = false;
        true
    }

    /// Final results, available only once finished.
    pub fn results(&self) -> Option<QuizResults> {
        if !self.is_finished() {
            return None;
        }
        let total = self.questions.len();
        let percent = if total > 0 {
            (self.score as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        Some(QuizResults {
            score: self.score,
            total,
            percent,
            rating: Rating::for_percent(percent),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn question(correct: usize) -> Question {
        Question {
            text: "Which food has more Iron per 100g: Oats or Apple?".to_string(),
            options: vec!["Oats".to_string(), "Apple".to_string()],
            correct,
            explanation: "Oats has 4.7mg per 100g compared to 0mg for Apple.".to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new((0..n).map(|_| question(0)).collect())
    }

    #[test]
    fn test_all_correct_yields_expert() {
        for n in [1, 3, 10] {
            let mut s = session(n);
            while let Some(q) = s.current_question() {
                let correct = q.correct;
                assert_eq!(s.answer(correct), Some(true));
                assert!(s.advance());
            }
            let results = s.results().unwrap();
            assert_eq!(results.score, n as u32);
            assert_eq!(results.percent, 100);
            assert_eq!(results.rating, Rating::Expert);
        }
    }

    #[test]
    fn test_answer_is_idempotent() {
        let mut s = session(2);
        assert_eq!(s.answer(0), Some(true));
        // Second call before advancing has no effect
        assert_eq!(s.answer(1), None);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut s = session(2);
        assert!(!s.advance());
        assert_eq!(s.progress(), (0, 2));

        s.answer(1);
        assert!(s.advance());
        assert_eq!(s.progress(), (1, 2));
    }

    #[test]
    fn test_wrong_answers_score_zero() {
        let mut s = session(5);
        while s.current_question().is_some() {
            assert_eq!(s.answer(1), Some(false));
            s.advance();
        }
        let results = s.results().unwrap();
        assert_eq!(results.score, 0);
        assert_eq!(results.rating, Rating::Learning);
    }

    #[test]
    fn test_results_only_when_finished() {
        let mut s = session(1);
        assert!(s.results().is_none());
        s.answer(0);
        assert!(s.results().is_none());
        s.advance();
        assert!(s.results().is_some());
        // Finished session ignores further input
        assert_eq!(s.answer(0), None);
        assert!(!s.advance());
    }

    #[test]
    fn test_short_quiz_uses_actual_total() {
        // 3 of 4 correct -> 75% -> "great"
        let mut s = session(4);
        for i in 0..4 {
            s.answer(if i == 0 { 1 } else { 0 });
            s.advance();
        }
        let results = s.results().unwrap();
        assert_eq!(results.total, 4);
        assert_eq!(results.percent, 75);
        assert_eq!(results.rating, Rating::Great);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::for_percent(80), Rating::Expert);
        assert_eq!(Rating::for_percent(79), Rating::Great);
        assert_eq!(Rating::for_percent(60), Rating::Great);
        assert_eq!(Rating::for_percent(59), Rating::Good);
        assert_eq!(Rating::for_percent(40), Rating::Good);
        assert_eq!(Rating::for_percent(39), Rating::Learning);
    }

    #[test]
    fn test_empty_question_set_is_immediately_finished() {
        let s = QuizSession::new(Vec::new());
        assert!(s.is_finished());
        let results = s.results().unwrap();
        assert_eq!(results.total, 0);
        assert_eq!(results.percent, 0);
    }
}
