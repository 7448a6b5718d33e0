#![allow(dead_code)]

use course_admin::{Course, CourseRecord};

pub fn record(id: &str, name: &str, start: &str, end: &str) -> CourseRecord {
    CourseRecord {
        id: Some(id.to_string()),
        course_name: name.to_string(),
        university: "Charles University".to_string(),
        city: "Prague".to_string(),
        country: "Czech Republic".to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        course_description: format!("{} description", name),
        price: 1200.0,
        currency: "CZK".to_string(),
    }
}

pub fn course(id: &str, name: &str, start: &str, end: &str) -> Course {
    Course::try_from(record(id, name, start, end)).expect("sample record should convert")
}

/// A spread of courses across three universities in two countries.
pub fn catalogue() -> Vec<CourseRecord> {
    vec![
        record(
            "c1",
            "Distributed Systems",
            "2024-01-10T00:00:00.000Z",
            "2024-01-15T00:00:00.000Z",
        ),
        CourseRecord {
            university: "Sorbonne".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            currency: "EUR".to_string(),
            price: 990.0,
            ..record(
                "c2",
                "Compilers",
                "2024-03-01T00:00:00.000Z",
                "2024-03-20T00:00:00.000Z",
            )
        },
        CourseRecord {
            university: "Sparta Academy".to_string(),
            city: "Sparta".to_string(),
            country: "Greece".to_string(),
            currency: "EUR".to_string(),
            price: 450.0,
            ..record(
                "c3",
                "Ancient Logistics",
                "2023-09-01T00:00:00.000Z",
                "2023-09-02T00:00:00.000Z",
            )
        },
        record(
            "c4",
            "Operating Systems",
            "2024-02-01T00:00:00.000Z",
            "2024-02-01T00:00:00.000Z",
        ),
    ]
}
