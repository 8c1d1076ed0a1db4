#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod error;
pub mod quiz;

pub use app_services::AppServices;
pub use error::{AppServicesError, CatalogError, PageError, QuizError};

pub use catalog::{
    CatalogPage, CatalogService, DEFAULT_PAGE_SIZE, PageRequest, QuestionListing, QuestionPage,
};
pub use quiz::QuizService;
