use std::collections::BTreeMap;

use serde::Serialize;

use storage::repository::{CategoryRepository, QuestionRepository, StorageError};
use trivia_core::model::{CategoryId, Question};

use super::page::{PageRequest, paginate};

/// Result of a search or a category listing.
///
/// Field names match the payload shape a transport layer marshals, so the
/// struct serializes without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

/// One page of the full catalogue together with the category label map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
}

/// Storage-backed catalogue queries.
pub(crate) struct CatalogQueries;

impl CatalogQueries {
    /// Questions whose text contains `term`, case-insensitively.
    ///
    /// `total_questions` counts the matches, not the whole catalogue.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when repository access fails.
    pub async fn search(
        questions: &dyn QuestionRepository,
        term: &str,
    ) -> Result<QuestionListing, StorageError> {
        let matches = questions.search_questions(term).await?;
        Ok(QuestionListing {
            total_questions: matches.len(),
            questions: matches,
            current_category: None,
        })
    }

    /// Questions belonging to one category.
    ///
    /// An unknown category yields an empty listing; existence is not checked
    /// here.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when repository access fails.
    pub async fn in_category(
        questions: &dyn QuestionRepository,
        category: CategoryId,
    ) -> Result<QuestionListing, StorageError> {
        let matches = questions.list_questions_by_category(category).await?;
        Ok(QuestionListing {
            total_questions: matches.len(),
            questions: matches,
            current_category: Some(category),
        })
    }

    /// One page of the full catalogue with the category label map attached.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when repository access fails.
    pub async fn page_of_catalog(
        questions: &dyn QuestionRepository,
        categories: &dyn CategoryRepository,
        request: PageRequest,
    ) -> Result<CatalogPage, StorageError> {
        let all = questions.list_questions().await?;
        let page = paginate(&all, request);
        let labels = Self::category_labels(categories).await?;
        Ok(CatalogPage {
            questions: page.items,
            total_questions: page.total,
            categories: labels,
            current_category: None,
        })
    }

    /// Map of category id to label for result payloads.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when repository access fails.
    pub async fn category_labels(
        categories: &dyn CategoryRepository,
    ) -> Result<BTreeMap<CategoryId, String>, StorageError> {
        let all = categories.list_categories().await?;
        Ok(all
            .into_iter()
            .map(|category| (category.id(), category.label().to_owned()))
            .collect())
    }
}
