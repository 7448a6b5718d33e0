use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates;
use crate::error::AppError;
use crate::store::dto::CourseRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Czk,
    Gbp,
    Aud,
    Cad,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Czk,
        Currency::Gbp,
        Currency::Aud,
        Currency::Cad,
        Currency::Jpy,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Czk => "CZK",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Jpy => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub course_name: String,
    pub university: String,
    pub city: String,
    pub country: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub description: String,
    pub price: f64,
    pub currency: Currency,
}

impl Course {
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.city, self.country, self.university)
    }

    pub fn length_days(&self) -> i64 {
        dates::duration_days(self.starts_at, self.ends_at)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.starts_at.date_naive()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.ends_at.date_naive()
    }

    pub fn start_display(&self) -> String {
        dates::format_display_date(self.start_date())
    }

    pub fn end_display(&self) -> String {
        dates::format_display_date(self.end_date())
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = AppError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::Decode("record has no _id".to_string()))?;

        let starts_at = dates::parse_timestamp(&record.start_date).ok_or_else(|| {
            AppError::Decode(format!("bad StartDate {:?} on {}", record.start_date, id))
        })?;
        let ends_at = dates::parse_timestamp(&record.end_date).ok_or_else(|| {
            AppError::Decode(format!("bad EndDate {:?} on {}", record.end_date, id))
        })?;
        if ends_at < starts_at {
            return Err(AppError::Decode(format!("EndDate before StartDate on {}", id)));
        }
        if record.price < 0.0 {
            return Err(AppError::Decode(format!("negative Price on {}", id)));
        }
        let currency = record
            .currency
            .parse::<Currency>()
            .map_err(|c| AppError::Decode(format!("unknown Currency {:?} on {}", c, id)))?;

        Ok(Course {
            id,
            course_name: record.course_name,
            university: record.university,
            city: record.city,
            country: record.country,
            starts_at,
            ends_at,
            description: record.course_description,
            price: record.price,
            currency,
        })
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        CourseRecord {
            id: Some(course.id.clone()),
            course_name: course.course_name.clone(),
            university: course.university.clone(),
            city: course.city.clone(),
            country: course.country.clone(),
            start_date: dates::to_timestamp(course.starts_at),
            end_date: dates::to_timestamp(course.ends_at),
            course_description: course.description.clone(),
            price: course.price,
            currency: course.currency.to_string(),
        }
    }
}
