use std::collections::HashSet;
use std::sync::Arc;

use rand::rng;

use storage::repository::QuestionRepository;
use trivia_core::model::{CategoryScope, Question, QuestionId, QuizSession};

use super::draw;
use crate::error::QuizError;

/// Draws random, non-repeating quiz questions from the catalogue.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Draw one question uniformly at random from the scope, skipping ids in
    /// `seen`.
    ///
    /// The draw records nothing; callers append the returned id to their own
    /// history before the next call. An empty `seen` set means no exclusions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Exhausted` once every question in scope has been
    /// seen (an unknown scoped category exhausts immediately), and
    /// `QuizError::Storage` on repository failures.
    pub async fn draw_question(
        &self,
        scope: CategoryScope,
        seen: &HashSet<QuestionId>,
    ) -> Result<Question, QuizError> {
        let pool = match scope {
            CategoryScope::All => self.questions.list_questions().await?,
            CategoryScope::Category(id) => self.questions.list_questions_by_category(id).await?,
        };

        let candidates = draw::unseen(pool, seen);
        let mut rng = rng();
        draw::pick(&candidates, &mut rng)
            .cloned()
            .ok_or(QuizError::Exhausted)
    }

    /// Convenience wrapper that reads scope and served ids from a session.
    ///
    /// # Errors
    ///
    /// Same as [`Self::draw_question`].
    pub async fn draw_for(&self, session: &QuizSession) -> Result<Question, QuizError> {
        self.draw_question(session.scope(), session.seen()).await
    }
}
