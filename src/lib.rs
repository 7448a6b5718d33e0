pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod services;
pub mod store;
pub mod table;

pub use config::AdminConfig;
pub use error::AppError;
pub use form::{CourseForm, Field, FieldError, FormError, FormMode};
pub use models::{Course, Currency, SuggestionSet};
pub use services::CourseAdmin;
pub use store::{CourseRecord, CourseStore, HttpCourseStore, InMemoryCourseStore};
