use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::AppError;
use crate::form::CourseForm;
use crate::models::{Course, SuggestionSet};
use crate::store::CourseStore;
use crate::table::CourseTable;

pub struct CourseAdmin {
    store: Arc<dyn CourseStore>,
    courses: Vec<Course>,
    table: CourseTable,
    suggestions: SuggestionSet,
}

impl CourseAdmin {
    pub fn new(store: Arc<dyn CourseStore>, page_size: usize) -> Self {
        Self {
            store,
            courses: Vec::new(),
            table: CourseTable::new(page_size),
            suggestions: SuggestionSet::default(),
        }
    }

    pub async fn refresh(&mut self) -> Result<usize, AppError> {
        let courses = self.store.list().await.map_err(|e| {
            error!("There was an error fetching the courses: {}", e);
            e
        })?;

        self.suggestions = SuggestionSet::from_courses(&courses);
        self.table.set_courses(&courses);
        self.courses = courses;
        info!("Loaded {} courses", self.courses.len());
        Ok(self.courses.len())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn table(&self) -> &CourseTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut CourseTable {
        &mut self.table
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    pub fn open_create(&self) -> CourseForm {
        CourseForm::new_create(self.suggestions.clone())
    }

    pub fn open_edit(&self, id: &str) -> Result<CourseForm, AppError> {
        let course = self
            .course(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        Ok(CourseForm::from_course(course, self.suggestions.clone()))
    }

    /// A rejected or failed save leaves the session untouched.
    pub async fn save(&mut self, form: &CourseForm) -> Result<Course, AppError> {
        let record = form.to_normalized_record()?;

        let saved = match form.id() {
            Some(id) => self.store.update(id, &record).await,
            None => self.store.create(&record).await,
        };
        let course = saved.map_err(|e| {
            error!("Error saving course: {}", e);
            e
        })?;

        if let Err(e) = self.refresh().await {
            warn!("Course {} saved but the list could not be reloaded: {}", course.id, e);
        }
        Ok(course)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.store.delete(id).await.map_err(|e| {
            error!("There was an error deleting the course {}: {}", id, e);
            e
        })?;

        self.table.remove(id);
        self.courses.retain(|c| c.id != id);
        Ok(())
    }
}
