mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use course_admin::{
    AppError, Course, CourseAdmin, CourseRecord, CourseStore, Field, FormError,
    InMemoryCourseStore,
};

/// In-memory store that can be switched into a failing mode.
struct FlakyStore {
    inner: InMemoryCourseStore,
    failing: AtomicBool,
}

impl FlakyStore {
    fn new(records: Vec<CourseRecord>) -> Self {
        Self {
            inner: InMemoryCourseStore::with_records(records),
            failing: AtomicBool::new(false),
        }
    }

    fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::Api {
                status: 503,
                body: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CourseStore for FlakyStore {
    async fn list(&self) -> Result<Vec<Course>, AppError> {
        self.check()?;
        self.inner.list().await
    }

    async fn create(&self, record: &CourseRecord) -> Result<Course, AppError> {
        self.check()?;
        self.inner.create(record).await
    }

    async fn update(&self, id: &str, record: &CourseRecord) -> Result<Course, AppError> {
        self.check()?;
        self.inner.update(id, record).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.check()?;
        self.inner.delete(id).await
    }
}

async fn loaded_admin() -> (CourseAdmin, Arc<InMemoryCourseStore>) {
    let store = Arc::new(InMemoryCourseStore::with_records(common::catalogue()));
    let mut admin = CourseAdmin::new(store.clone(), 10);
    admin.refresh().await.expect("refresh should succeed");
    (admin, store)
}

#[tokio::test]
async fn test_refresh_builds_table_and_suggestions() {
    let (admin, _store) = loaded_admin().await;

    assert_eq!(admin.courses().len(), 4);
    assert_eq!(admin.table().len(), 4);
    assert_eq!(admin.table().rows()[0].id, "c2");

    let suggestions = admin.suggestions();
    assert_eq!(
        suggestions.universities,
        vec!["Charles University", "Sorbonne", "Sparta Academy"]
    );
    assert_eq!(suggestions.cities, vec!["Prague", "Paris", "Sparta"]);
    assert_eq!(suggestions.countries, vec!["Czech Republic", "France", "Greece"]);
}

#[tokio::test]
async fn test_suggestions_skip_empty_values() {
    let mut records = common::catalogue();
    records.push(CourseRecord {
        city: String::new(),
        ..common::record(
            "c5",
            "Remote Seminar",
            "2024-06-01T00:00:00.000Z",
            "2024-06-02T00:00:00.000Z",
        )
    });
    let mut admin = CourseAdmin::new(Arc::new(InMemoryCourseStore::with_records(records)), 10);
    admin.refresh().await.unwrap();

    assert_eq!(admin.courses().len(), 5);
    assert_eq!(admin.suggestions().cities, vec!["Prague", "Paris", "Sparta"]);
}

#[tokio::test]
async fn test_create_flow() {
    let (mut admin, store) = loaded_admin().await;

    let mut form = admin.open_create();
    form.set_field(Field::CourseName, "Rust in Practice").unwrap();
    form.set_field(Field::University, "Sorb").unwrap();
    assert_eq!(form.suggestions(Field::University), vec!["Sorbonne"]);
    form.set_field(Field::University, "Sorbonne").unwrap();
    form.set_field(Field::City, "Paris").unwrap();
    form.set_field(Field::Country, "France").unwrap();
    form.input_date(Field::StartDate, "20240501").unwrap();
    form.input_date(Field::EndDate, "20240510").unwrap();
    form.set_field(Field::Description, "Ownership, traits, async").unwrap();
    form.set_field(Field::Price, "300").unwrap();
    form.set_field(Field::Currency, "EUR").unwrap();

    let created = admin.save(&form).await.expect("save should succeed");
    assert!(!created.id.is_empty());
    assert_eq!(store.len().await, 5);
    assert_eq!(admin.table().len(), 5);
    assert_eq!(admin.table().rows()[0].id, created.id);
    assert_eq!(admin.table().rows()[0].length_days, 9);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_store() {
    let (mut admin, store) = loaded_admin().await;

    let mut form = admin.open_create();
    form.set_field(Field::CourseName, "Half filled").unwrap();
    form.set_field(Field::Price, "-5").unwrap();

    let err = admin.save(&form).await.unwrap_err();
    assert!(matches!(err, AppError::Form(FormError::NotSubmittable(_))));
    assert!(!err.is_transport());
    assert_eq!(store.len().await, 4);
    assert_eq!(admin.table().len(), 4);
}

#[tokio::test]
async fn test_edit_flow_keeps_identity() {
    let (mut admin, _store) = loaded_admin().await;

    let mut form = admin.open_edit("c1").expect("c1 exists");
    assert_eq!(form.set_field(Field::CourseName, "Renamed"), Err(FormError::ReadOnly(Field::CourseName)));
    form.set_field(Field::Description, "Now with Raft").unwrap();
    form.set_field(Field::EndDate, "2024/01/20").unwrap();

    let saved = admin.save(&form).await.unwrap();
    assert_eq!(saved.id, "c1");

    let course = admin.course("c1").unwrap();
    assert_eq!(course.course_name, "Distributed Systems");
    assert_eq!(course.description, "Now with Raft");
    assert_eq!(course.length_days(), 10);
    assert_eq!(admin.courses().len(), 4);
}

#[tokio::test]
async fn test_open_edit_unknown_course() {
    let (admin, _store) = loaded_admin().await;
    assert!(matches!(admin.open_edit("nope"), Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_flow() {
    let (mut admin, store) = loaded_admin().await;

    admin.delete("c3").await.expect("delete should succeed");
    assert_eq!(store.len().await, 3);
    assert!(admin.table().get("c3").is_none());
    assert!(admin.course("c3").is_none());

    let err = admin.delete("c3").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(admin.table().len(), 3);
}

#[tokio::test]
async fn test_transport_failures_leave_state_untouched() {
    let store = Arc::new(FlakyStore::new(common::catalogue()));
    let mut admin = CourseAdmin::new(store.clone(), 10);
    admin.refresh().await.unwrap();

    let mut form = admin.open_edit("c2").unwrap();
    form.set_field(Field::Price, "1000").unwrap();

    store.fail();

    assert!(admin.refresh().await.is_err());
    assert_eq!(admin.table().len(), 4);

    let err = admin.delete("c2").await.unwrap_err();
    assert!(err.is_transport());
    assert!(admin.table().get("c2").is_some());

    assert!(admin.save(&form).await.is_err());
    assert_eq!(admin.course("c2").unwrap().price, 990.0);
    // The form is still there to retry with.
    assert_eq!(form.value(Field::Price), "1000");
}
