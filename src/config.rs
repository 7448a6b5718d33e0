use std::env;

use crate::error::AppError;
use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_url: String,
    pub page_size: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AdminConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_url = lookup("COURSES_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let page_size = match lookup("COURSES_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self { api_url, page_size })
    }
}

pub fn parse_page_size(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AppError::Config(format!(
            "COURSES_PAGE_SIZE must be a positive integer, got {:?}",
            raw
        ))),
    }
}
