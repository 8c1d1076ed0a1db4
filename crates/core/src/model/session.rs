use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};

//
// ─── CATEGORY SCOPE ────────────────────────────────────────────────────────────
//

/// Which slice of the catalogue a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryScope {
    /// Draw from every category.
    All,
    /// Draw only from the given category.
    Category(CategoryId),
}

impl CategoryScope {
    /// Interprets a raw category id from a quiz request, where `0` is the
    /// conventional marker for "all categories".
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::InvalidCategory` for negative values.
    pub fn from_raw(raw: i64) -> Result<Self, ScopeError> {
        match u64::try_from(raw) {
            Ok(0) => Ok(Self::All),
            Ok(id) => Ok(Self::Category(CategoryId::new(id))),
            Err(_) => Err(ScopeError::InvalidCategory(raw)),
        }
    }

    /// Returns true when a question in `category` is eligible under this scope.
    #[must_use]
    pub fn admits(&self, category: CategoryId) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => *wanted == category,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    #[error("invalid category scope: {0}")]
    InvalidCategory(i64),
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// Ephemeral per-player quiz state: the chosen scope and the ids already
/// served. Never persisted; the caller threads it through successive draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    scope: CategoryScope,
    seen: HashSet<QuestionId>,
}

impl QuizSession {
    #[must_use]
    pub fn new(scope: CategoryScope) -> Self {
        Self {
            scope,
            seen: HashSet::new(),
        }
    }

    /// Rebuilds a session from a request that carries its history explicitly.
    #[must_use]
    pub fn with_seen(scope: CategoryScope, seen: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            scope,
            seen: seen.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> CategoryScope {
        self.scope
    }

    #[must_use]
    pub fn seen(&self) -> &HashSet<QuestionId> {
        &self.seen
    }

    /// Records a served question so later draws skip it.
    pub fn mark_seen(&mut self, id: QuestionId) {
        self.seen.insert(id);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
