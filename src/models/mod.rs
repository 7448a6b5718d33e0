pub mod course;
pub mod suggestion;

pub use course::{Course, Currency};
pub use suggestion::SuggestionSet;
