use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Course;
use crate::store::{CourseRecord, CourseStore, courses_from_records};

#[derive(Default)]
pub struct InMemoryCourseStore {
    records: RwLock<Vec<CourseRecord>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CourseRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                if r.id.is_none() {
                    r.id = Some(new_id());
                }
                r
            })
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let records = self.records.read().await.clone();
        Ok(courses_from_records(records))
    }

    async fn create(&self, record: &CourseRecord) -> Result<Course, AppError> {
        let stored = CourseRecord {
            id: Some(new_id()),
            ..record.clone()
        };
        let course = Course::try_from(stored.clone())?;
        self.records.write().await.push(stored);
        Ok(course)
    }

    async fn update(&self, id: &str, record: &CourseRecord) -> Result<Course, AppError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id))
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let stored = CourseRecord {
            id: Some(id.to_string()),
            ..record.clone()
        };
        let course = Course::try_from(stored.clone())?;
        *slot = stored;
        Ok(course)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id.as_deref() != Some(id));
        if records.len() == before {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
