use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Validated difficulty rating on the 1 (easiest) to 5 (hardest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a difficulty rating.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyError::OutOfRange` when the value is outside 1..=5.
    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DifficultyError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DifficultyError {
    #[error("difficulty must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question input as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl QuestionDraft {
    /// Validates the draft: text and answer must be non-empty after trimming,
    /// and the difficulty must fall on the 1..=5 scale.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyQuestion` / `EmptyAnswer` for blank text
    /// fields, or `QuestionError::Difficulty` for an out-of-range rating.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        let question = self.question.trim().to_owned();
        if question.is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        let answer = self.answer.trim().to_owned();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        let difficulty = Difficulty::new(self.difficulty)?;

        Ok(ValidatedQuestion {
            question,
            answer,
            category: self.category,
            difficulty,
        })
    }
}

/// A question that passed validation but has not been assigned an id yet.
///
/// The id is owned by the store: it is handed out on insert and never reused,
/// so domain code cannot fabricate one ahead of persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attaches the store-assigned id, producing the full entity.
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A stored trivia question.
///
/// Serializes with the payload field names a transport layer expects:
/// `id`, `question`, `answer`, `category`, `difficulty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl Question {
    /// Rehydrates a question from persisted storage, re-running validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the stored text is blank or the difficulty
    /// is out of range.
    pub fn from_persisted(
        id: QuestionId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: u8,
    ) -> Result<Self, QuestionError> {
        let draft = QuestionDraft {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        };
        Ok(draft.validate()?.assign_id(id))
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("answer text cannot be empty")]
    EmptyAnswer,

    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
