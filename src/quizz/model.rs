use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type QuizId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(id: QuizId, question: String, answer: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            question,
            answer,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `given` answers this quiz, ignoring surrounding whitespace and case.
    pub fn is_answered_by(&self, given: &str) -> bool {
        answers_match(given, &self.answer)
    }
}

pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
