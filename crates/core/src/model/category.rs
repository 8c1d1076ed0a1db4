use serde::Serialize;
use thiserror::Error;

use crate::model::ids::CategoryId;

//
// ─── CATEGORY TYPES ────────────────────────────────────────────────────────────
//

/// A topic bucket that questions belong to, such as "Science" or "History".
///
/// The label serializes under the key `type` to match the payload shape a
/// transport layer exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    #[serde(rename = "type")]
    label: String,
}

impl Category {
    /// Creates a category with a validated label.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyLabel` when the label is blank after
    /// trimming.
    pub fn new(id: CategoryId, label: impl Into<String>) -> Result<Self, CategoryError> {
        let label = label.into().trim().to_owned();
        if label.is_empty() {
            return Err(CategoryError::EmptyLabel);
        }
        Ok(Self { id, label })
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category label cannot be empty")]
    EmptyLabel,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_label() {
        let category = Category::new(CategoryId::new(1), "  Science  ").unwrap();
        assert_eq!(category.label(), "Science");
        assert_eq!(category.id(), CategoryId::new(1));
    }

    #[test]
    fn new_rejects_blank_label() {
        let err = Category::new(CategoryId::new(1), "   ").unwrap_err();
        assert_eq!(err, CategoryError::EmptyLabel);
    }

    #[test]
    fn category_serializes_label_under_type_key() {
        let category = Category::new(CategoryId::new(2), "Art").unwrap();
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "type": "Art" }));
    }
}
