mod draw;
mod service;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use service::QuizService;
