use serde::Serialize;

use trivia_core::model::Question;

use crate::error::PageError;

/// Number of questions per page when the caller does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validated pagination request: a 1-based page number over a fixed page size.
///
/// Construction rejects out-of-range values, so a request that exists is
/// always safe to slice with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a request for the given 1-based page with the default size.
    ///
    /// # Errors
    ///
    /// Returns `PageError::ZeroPage` when `page` is zero.
    pub fn new(page: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::ZeroPage);
        }
        Ok(Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// The first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replaces the page size.
    ///
    /// # Errors
    ///
    /// Returns `PageError::ZeroPageSize` when `size` is zero.
    pub fn with_page_size(self, size: usize) -> Result<Self, PageError> {
        if size == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(Self {
            page: self.page,
            page_size: size,
        })
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// One page of questions plus the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub items: Vec<Question>,
    pub total: usize,
}

/// Cuts one page out of `questions`.
///
/// `total` always reports the full input length, whichever page was asked
/// for. A page past the end yields empty `items` rather than an error;
/// callers that want to treat that as a lookup failure decide so themselves.
#[must_use]
pub fn paginate(questions: &[Question], request: PageRequest) -> QuestionPage {
    let start = (request.page() - 1).saturating_mul(request.page_size());
    let items = if start >= questions.len() {
        Vec::new()
    } else {
        let end = start.saturating_add(request.page_size()).min(questions.len());
        questions[start..end].to_vec()
    };
    QuestionPage {
        items,
        total: questions.len(),
    }
}
