#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Category, CategoryError, CategoryId, CategoryScope, Difficulty, DifficultyError, ParseIdError,
    Question, QuestionDraft, QuestionError, QuestionId, QuizSession, ScopeError, ValidatedQuestion,
};
