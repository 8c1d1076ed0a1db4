mod page;
mod queries;
mod service;

// Public API of the catalogue subsystem.
pub use crate::error::{CatalogError, PageError};
pub use page::{DEFAULT_PAGE_SIZE, PageRequest, QuestionPage, paginate};
pub use queries::{CatalogPage, QuestionListing};
pub use service::CatalogService;
