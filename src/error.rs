use thiserror::Error;

use crate::form::FormError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Course API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode course payload: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl AppError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::Api { .. } | AppError::Decode(_) | AppError::NotFound(_)
        )
    }
}
