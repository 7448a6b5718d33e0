pub mod dto;
pub mod memory;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::error::AppError;
use crate::models::Course;

pub use dto::CourseRecord;
pub use memory::InMemoryCourseStore;

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, AppError>;
    async fn create(&self, record: &CourseRecord) -> Result<Course, AppError>;
    async fn update(&self, id: &str, record: &CourseRecord) -> Result<Course, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

pub(crate) fn courses_from_records(records: Vec<CourseRecord>) -> Vec<Course> {
    let mut courses = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id.clone().unwrap_or_default();
        match Course::try_from(record) {
            Ok(course) => courses.push(course),
            Err(e) => {
                tracing::warn!("Skipping course record {:?}: {}", id, e);
            }
        }
    }
    courses
}

pub struct HttpCourseStore {
    client: Client,
    base_url: String,
}

impl HttpCourseStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn courses_url(&self) -> String {
        format!("{}/courses", self.base_url)
    }

    fn course_url(&self, id: &str) -> String {
        format!("{}/courses/{}", self.base_url, id)
    }

    async fn ensure_success(response: Response, id: Option<&str>) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(AppError::NotFound(id.to_string()));
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_saved(
        response: Response,
        sent: &CourseRecord,
        id: Option<&str>,
    ) -> Result<Course, AppError> {
        let body_text = response.text().await?;
        let echoed: CourseRecord = if body_text.trim().is_empty() {
            CourseRecord::default()
        } else {
            serde_json::from_str(&body_text).map_err(|e| {
                tracing::error!("Failed to parse saved course: {}", e);
                AppError::Decode(e.to_string())
            })?
        };

        let saved = if echoed.course_name.is_empty() {
            CourseRecord {
                id: echoed.id.or_else(|| id.map(str::to_string)),
                ..sent.clone()
            }
        } else if echoed.id.is_none() {
            CourseRecord {
                id: id.map(str::to_string),
                ..echoed
            }
        } else {
            echoed
        };

        Course::try_from(saved).map_err(|e| {
            tracing::warn!("Course saved but the reply could not be read: {}", e);
            e
        })
    }
}

#[async_trait]
impl CourseStore for HttpCourseStore {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let response = self.client.get(self.courses_url()).send().await?;
        let response = Self::ensure_success(response, None).await?;

        let body_text = response.text().await?;
        let records: Vec<CourseRecord> = serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!("Failed to parse course list: {}", e);
            AppError::Decode(e.to_string())
        })?;

        tracing::debug!("Fetched {} course records", records.len());
        Ok(courses_from_records(records))
    }

    async fn create(&self, record: &CourseRecord) -> Result<Course, AppError> {
        let payload = record.clone().without_id();
        let response = self
            .client
            .post(self.courses_url())
            .json(&payload)
            .send()
            .await?;
        let response = Self::ensure_success(response, None).await?;

        let course = Self::read_saved(response, &payload, None).await?;
        tracing::info!("Course created: {} ({})", course.course_name, course.id);
        Ok(course)
    }

    async fn update(&self, id: &str, record: &CourseRecord) -> Result<Course, AppError> {
        let payload = record.clone().without_id();
        let response = self
            .client
            .put(self.course_url(id))
            .json(&payload)
            .send()
            .await?;
        let response = Self::ensure_success(response, Some(id)).await?;

        let course = Self::read_saved(response, &payload, Some(id)).await?;
        tracing::info!("Course updated: {} ({})", course.course_name, course.id);
        Ok(course)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.course_url(id)).send().await?;
        Self::ensure_success(response, Some(id)).await?;
        tracing::info!("Course deleted: {}", id);
        Ok(())
    }
}
