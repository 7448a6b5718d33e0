use std::collections::HashSet;

use crate::models::Course;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    pub universities: Vec<String>,
    pub cities: Vec<String>,
    pub countries: Vec<String>,
}

impl SuggestionSet {
    pub fn from_courses(courses: &[Course]) -> Self {
        Self {
            universities: distinct(courses.iter().map(|c| c.university.as_str())),
            cities: distinct(courses.iter().map(|c| c.city.as_str())),
            countries: distinct(courses.iter().map(|c| c.country.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}
