use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trivia_core::model::{Category, CategoryId, Question, QuestionId, ValidatedQuestion};

/// Errors surfaced by storage adapters.
///
/// Lookup misses are not errors here; fetches return `Ok(None)` and callers
/// decide what a missing row means.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted insert shape for a question that has not received its id yet.
///
/// Ids are minted by the store on insert, so the record deliberately carries
/// no id field.
#[derive(Debug, Clone)]
pub struct NewQuestionRecord {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestionRecord {
    #[must_use]
    pub fn from_validated(question: &ValidatedQuestion) -> Self {
        Self {
            question: question.question().to_owned(),
            answer: question.answer().to_owned(),
            category: question.category(),
            difficulty: question.difficulty().value(),
        }
    }
}

/// Repository contract for questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question and return its freshly assigned id.
    ///
    /// Ids are monotonic and never reused, even after deletions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn insert_question(
        &self,
        record: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError>;

    /// Remove a question, returning the pre-delete value.
    ///
    /// Returns `Ok(None)` when the id does not exist, so a second delete of
    /// the same id is distinguishable from the first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn delete_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError>;

    /// Fetch every question, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Fetch the questions in one category, ordered by ascending id.
    ///
    /// An unknown or empty category yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError>;

    /// Fetch the questions whose text contains `term`, case-insensitively,
    /// ordered by ascending id.
    ///
    /// A blank term matches everything; a non-blank term is matched verbatim,
    /// surrounding whitespace included.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;
}

/// Repository contract for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist or update a category.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the category cannot be stored.
    async fn upsert_category(&self, category: &Category) -> Result<(), StorageError>;

    /// Fetch a category by id, `Ok(None)` when missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StorageError>;

    /// Fetch every category, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connectivity or decoding faults.
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;
}

#[derive(Default)]
struct QuestionTable {
    rows: HashMap<QuestionId, Question>,
    // Highest id ever assigned. Deletions leave it untouched so ids are
    // never reused, matching the SQLite AUTOINCREMENT behaviour.
    last_id: u64,
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<QuestionTable>>,
    categories: Arc<Mutex<HashMap<CategoryId, Category>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Arc::new(Mutex::new(QuestionTable::default())),
            categories: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn insert_question(
        &self,
        record: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.last_id += 1;
        let id = QuestionId::new(guard.last_id);
        let question = Question::from_persisted(
            id,
            record.question,
            record.answer,
            record.category,
            record.difficulty,
        )
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
        guard.rows.insert(id, question);
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.rows.remove(&id))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions: Vec<Question> = guard.rows.values().cloned().collect();
        questions.sort_by_key(|q| q.id());
        Ok(questions)
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions: Vec<Question> = guard
            .rows
            .values()
            .filter(|q| q.category() == category)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id());
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        if term.trim().is_empty() {
            return self.list_questions().await;
        }

        let needle = term.to_lowercase();
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut questions: Vec<Question> = guard
            .rows
            .values()
            .filter(|q| q.question().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id());
        Ok(questions)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn upsert_category(&self, category: &Category) -> Result<(), StorageError> {
        let mut guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(category.id(), category.clone());
        Ok(())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let guard = self
            .categories
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut categories: Vec<Category> = guard.values().cloned().collect();
        categories.sort_by_key(|c| c.id());
        Ok(categories)
    }
}

/// Aggregates question and category repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo);
        Self {
            questions,
            categories,
        }
    }
}
