use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CourseRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub course_description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
}

impl CourseRecord {
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}
