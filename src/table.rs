use crate::models::{Course, Currency};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub id: String,
    pub course_name: String,
    pub university: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub length_days: i64,
    pub price: f64,
    pub currency: Currency,
    pub description: String,
    pub city: String,
    pub country: String,
    sort_key: chrono::DateTime<chrono::Utc>,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            course_name: course.course_name.clone(),
            university: course.university.clone(),
            location: course.location(),
            start: course.start_display(),
            end: course.end_display(),
            length_days: course.length_days(),
            price: course.price,
            currency: course.currency,
            description: course.description.clone(),
            city: course.city.clone(),
            country: course.country.clone(),
            sort_key: course.starts_at,
        }
    }
}

impl CourseRow {
    // Lowercased text the filter box searches.
    fn haystack(&self) -> String {
        let length = self.length_days.to_string();
        let price = self.price.to_string();
        [
            self.id.as_str(),
            self.course_name.as_str(),
            self.university.as_str(),
            self.location.as_str(),
            self.start.as_str(),
            self.end.as_str(),
            length.as_str(),
            price.as_str(),
            self.currency.code(),
            self.description.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
        .join("\u{1f}")
        .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a CourseRow>,
    pub index: usize,
    pub page_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct CourseTable {
    rows: Vec<CourseRow>,
    filter: String,
    page_size: usize,
    page: usize,
}

impl Default for CourseTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CourseTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            filter: String::new(),
            page_size: page_size.max(1),
            page: 0,
        }
    }

    pub fn set_courses(&mut self, courses: &[Course]) {
        let mut rows: Vec<CourseRow> = courses.iter().map(CourseRow::from).collect();
        rows.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
        self.rows = rows;
        self.clamp_page();
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CourseRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
        self.page = 0;
    }

    pub fn filtered(&self) -> Vec<&CourseRow> {
        if self.filter.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|row| row.haystack().contains(&self.filter))
            .collect()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, index: usize) {
        self.page = index;
        self.clamp_page();
    }

    pub fn page(&self) -> TablePage<'_> {
        let filtered = self.filtered();
        let total = filtered.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        let index = self.page.min(page_count - 1);
        let rows = filtered
            .into_iter()
            .skip(index * self.page_size)
            .take(self.page_size)
            .collect();

        TablePage {
            rows,
            index,
            page_count,
            total,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            self.clamp_page();
        }
        removed
    }

    fn clamp_page(&mut self) {
        let total = self.filtered().len();
        let last = total.div_ceil(self.page_size).saturating_sub(1);
        self.page = self.page.min(last);
    }
}
