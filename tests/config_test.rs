use std::collections::HashMap;

use course_admin::config::{AdminConfig, DEFAULT_API_URL};
use course_admin::AppError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = AdminConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AdminConfig::default());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.page_size, 10);
}

#[test]
fn test_values_from_environment() {
    let config = AdminConfig::from_lookup(lookup(&[
        ("COURSES_API_URL", "https://courses.example.org"),
        ("COURSES_PAGE_SIZE", " 25 "),
    ]))
    .unwrap();
    assert_eq!(config.api_url, "https://courses.example.org");
    assert_eq!(config.page_size, 25);
}

#[test]
fn test_blank_url_falls_back_to_default() {
    let config = AdminConfig::from_lookup(lookup(&[("COURSES_API_URL", "  ")])).unwrap();
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_bad_page_size_is_rejected() {
    for raw in ["0", "-3", "ten", ""] {
        let result = AdminConfig::from_lookup(lookup(&[("COURSES_PAGE_SIZE", raw)]));
        assert!(
            matches!(result, Err(AppError::Config(_))),
            "{:?} should be rejected",
            raw
        );
    }
}
