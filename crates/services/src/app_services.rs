use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog::CatalogService;
use crate::error::AppServicesError;
use crate::quiz::QuizService;

/// Assembles the catalogue and quiz services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if connection or migrations fail.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    /// Build services over volatile in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory())
    }

    /// Wire services over an existing storage aggregate.
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&storage.questions),
            Arc::clone(&storage.categories),
        ));
        let quiz = Arc::new(QuizService::new(Arc::clone(&storage.questions)));
        Self { catalog, quiz }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
