//! Domain model for the trivia catalogue: identifiers, questions,
//! categories, and ephemeral quiz session state.

pub mod category;
pub mod ids;
pub mod question;
pub mod session;

pub use category::{Category, CategoryError};
pub use ids::{CategoryId, ParseIdError, QuestionId};
pub use question::{
    Difficulty, DifficultyError, Question, QuestionDraft, QuestionError, ValidatedQuestion,
};
pub use session::{CategoryScope, QuizSession, ScopeError};
