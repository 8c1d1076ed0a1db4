use std::collections::BTreeMap;
use std::sync::Arc;

use storage::repository::{CategoryRepository, NewQuestionRecord, QuestionRepository};
use trivia_core::model::{Category, CategoryId, Question, QuestionDraft, QuestionId};

use super::page::PageRequest;
use super::queries::{CatalogPage, CatalogQueries, QuestionListing};
use crate::error::CatalogError;

/// Orchestrates question creation, deletion, and catalogue queries.
#[derive(Clone)]
pub struct CatalogService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Validate a draft and persist it, returning the stored question with
    /// its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Question` for validation failures,
    /// `CatalogError::UnknownCategory` when the referenced category does not
    /// exist, and `CatalogError::Storage` if persistence fails.
    pub async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CatalogError> {
        let validated = draft.validate()?;

        let category = validated.category();
        if self.categories.get_category(category).await?.is_none() {
            return Err(CatalogError::UnknownCategory(category));
        }

        let id = self
            .questions
            .insert_question(NewQuestionRecord::from_validated(&validated))
            .await?;
        Ok(validated.assign_id(id))
    }

    /// Delete a question, returning it as it existed before deletion.
    ///
    /// A second delete of the same id fails with `QuestionNotFound` rather
    /// than reporting success.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::QuestionNotFound` when the id does not exist.
    /// Returns `CatalogError::Storage` if persistence fails.
    pub async fn delete_question(&self, id: QuestionId) -> Result<Question, CatalogError> {
        self.questions
            .delete_question(id)
            .await?
            .ok_or(CatalogError::QuestionNotFound(id))
    }

    /// List every question, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, CatalogError> {
        let questions = self.questions.list_questions().await?;
        Ok(questions)
    }

    /// List the questions of one category.
    ///
    /// An unknown category yields an empty listing, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<QuestionListing, CatalogError> {
        let listing = CatalogQueries::in_category(self.questions.as_ref(), category).await?;
        Ok(listing)
    }

    /// Search questions by a case-insensitive substring of their text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn search_questions(&self, term: &str) -> Result<QuestionListing, CatalogError> {
        let listing = CatalogQueries::search(self.questions.as_ref(), term).await?;
        Ok(listing)
    }

    /// One page of the catalogue with the category label map attached.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_questions_page(
        &self,
        request: PageRequest,
    ) -> Result<CatalogPage, CatalogError> {
        let page = CatalogQueries::page_of_catalog(
            self.questions.as_ref(),
            self.categories.as_ref(),
            request,
        )
        .await?;
        Ok(page)
    }

    /// List every category, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self.categories.list_categories().await?;
        Ok(categories)
    }

    /// Map of category id to label.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if repository access fails.
    pub async fn category_labels(&self) -> Result<BTreeMap<CategoryId, String>, CatalogError> {
        let labels = CatalogQueries::category_labels(self.categories.as_ref()).await?;
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};
    use trivia_core::model::QuestionError;

    fn service() -> (CatalogService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        let service = CatalogService::new(repo.clone(), repo.clone());
        (service, repo)
    }

    async fn seed_category(repo: &InMemoryRepository, id: u64, label: &str) {
        repo.upsert_category(&Category::new(CategoryId::new(id), label).unwrap())
            .await
            .unwrap();
    }

    fn draft(text: &str, answer: &str, category: u64, difficulty: u8) -> QuestionDraft {
        QuestionDraft {
            question: text.to_owned(),
            answer: answer.to_owned(),
            category: CategoryId::new(category),
            difficulty,
        }
    }

    #[tokio::test]
    async fn create_question_assigns_id_and_persists() {
        let (service, repo) = service();
        seed_category(&repo, 1, "Science").await;

        let question = service
            .create_question(draft("What is H2O?", "Water", 1, 1))
            .await
            .unwrap();

        assert_eq!(question.id(), QuestionId::new(1));
        assert_eq!(service.list_questions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_question_rejects_unknown_category() {
        let (service, _repo) = service();

        let err = service
            .create_question(draft("What is H2O?", "Water", 42, 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::UnknownCategory(id) if id == CategoryId::new(42)
        ));
        assert!(service.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_question_rejects_invalid_draft() {
        let (service, repo) = service();
        seed_category(&repo, 1, "Science").await;

        let err = service
            .create_question(draft("  ", "Water", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Question(QuestionError::EmptyQuestion)
        ));

        let err = service
            .create_question(draft("What is H2O?", "Water", 1, 9))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Question(_)));
    }

    #[tokio::test]
    async fn delete_question_fails_on_second_attempt() {
        let (service, repo) = service();
        seed_category(&repo, 1, "Science").await;

        let created = service
            .create_question(draft("What is H2O?", "Water", 1, 1))
            .await
            .unwrap();

        let deleted = service.delete_question(created.id()).await.unwrap();
        assert_eq!(deleted, created);

        let err = service.delete_question(created.id()).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::QuestionNotFound(id) if id == created.id()
        ));
    }

    #[tokio::test]
    async fn delete_unknown_question_is_not_found() {
        let (service, _repo) = service();
        let err = service
            .delete_question(QuestionId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::QuestionNotFound(_)));
    }

    struct FailingRepository;

    #[async_trait]
    impl QuestionRepository for FailingRepository {
        async fn insert_question(
            &self,
            _record: NewQuestionRecord,
        ) -> Result<QuestionId, StorageError> {
            Err(StorageError::Connection("database is on fire".into()))
        }

        async fn delete_question(
            &self,
            _id: QuestionId,
        ) -> Result<Option<Question>, StorageError> {
            Err(StorageError::Connection("database is on fire".into()))
        }

        async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
            Err(StorageError::Connection("database is on fire".into()))
        }

        async fn list_questions_by_category(
            &self,
            _category: CategoryId,
        ) -> Result<Vec<Question>, StorageError> {
            Err(StorageError::Connection("database is on fire".into()))
        }

        async fn search_questions(&self, _term: &str) -> Result<Vec<Question>, StorageError> {
            Err(StorageError::Connection("database is on fire".into()))
        }
    }

    #[tokio::test]
    async fn storage_faults_pass_through_opaquely() {
        let categories = Arc::new(InMemoryRepository::new());
        seed_category(&categories, 1, "Science").await;
        let service = CatalogService::new(Arc::new(FailingRepository), categories);

        let err = service
            .create_question(draft("What is H2O?", "Water", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Storage(StorageError::Connection(_))
        ));

        let err = service.list_questions().await.unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
