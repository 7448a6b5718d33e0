pub mod field;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub use field::{Field, FieldError};

use crate::dates;
use crate::filter::filter_options;
use crate::models::{Course, Currency, SuggestionSet};
use crate::store::dto::CourseRecord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("form is not submittable: {}", describe(.0))]
    NotSubmittable(Vec<(Field, FieldError)>),

    #[error("{0} is read-only while editing")]
    ReadOnly(Field),

    #[error("{0:?} is not a real calendar date")]
    CalendarDate(String),
}

// An untouched edit-mode date goes back as the instant the store holds.
fn timestamp_for(text: &str, seeded: Option<&(String, DateTime<Utc>)>) -> Result<String, FormError> {
    match seeded {
        Some((shown, at)) if shown == text => Ok(dates::to_timestamp(*at)),
        _ => dates::date_text_to_timestamp(text)
            .ok_or_else(|| FormError::CalendarDate(text.to_string())),
    }
}

fn describe(errors: &[(Field, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("{} {}", field.label(), err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePairState {
    Empty,
    FormatInvalid,
    OrderInvalid,
    Valid,
}

#[derive(Debug, Clone)]
pub struct CourseForm {
    mode: FormMode,
    id: Option<String>,
    course_name: String,
    university: String,
    city: String,
    country: String,
    start_date: String,
    end_date: String,
    description: String,
    price: String,
    currency: String,
    start_date_invalid: bool,
    end_date_invalid: bool,
    suggestions: SuggestionSet,
    // Stored instants and the text they were shown as, edit mode only.
    seeded_start: Option<(String, DateTime<Utc>)>,
    seeded_end: Option<(String, DateTime<Utc>)>,
}

impl CourseForm {
    pub fn new_create(suggestions: SuggestionSet) -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            course_name: String::new(),
            university: String::new(),
            city: String::new(),
            country: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            price: "0".to_string(),
            currency: String::new(),
            start_date_invalid: false,
            end_date_invalid: false,
            suggestions,
            seeded_start: None,
            seeded_end: None,
        }
    }

    pub fn from_course(course: &Course, suggestions: SuggestionSet) -> Self {
        let start_text = dates::format_date_text(course.start_date());
        let end_text = dates::format_date_text(course.end_date());
        let mut form = Self {
            mode: FormMode::Edit,
            id: Some(course.id.clone()),
            course_name: course.course_name.clone(),
            university: course.university.clone(),
            city: course.city.clone(),
            country: course.country.clone(),
            start_date: start_text.clone(),
            end_date: end_text.clone(),
            description: course.description.clone(),
            price: course.price.to_string(),
            currency: course.currency.to_string(),
            start_date_invalid: false,
            end_date_invalid: false,
            suggestions,
            seeded_start: Some((start_text, course.starts_at)),
            seeded_end: Some((end_text, course.ends_at)),
        };
        form.revalidate_dates();
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CourseName => &self.course_name,
            Field::University => &self.university,
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::Currency => &self.currency,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CourseName => &mut self.course_name,
            Field::University => &mut self.university,
            Field::City => &mut self.city,
            Field::Country => &mut self.country,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
            Field::Currency => &mut self.currency,
        }
    }

    pub fn is_read_only(&self, field: Field) -> bool {
        self.mode == FormMode::Edit && field.is_identity()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if self.is_read_only(field) {
            return Err(FormError::ReadOnly(field));
        }
        *self.value_mut(field) = value.into();
        if field.is_date() {
            self.revalidate_dates();
        }
        Ok(())
    }

    pub fn input_date(&mut self, field: Field, raw: &str) -> Result<(), FormError> {
        self.set_field(field, dates::mask_date(raw))
    }

    // Either date changing can flip the other's state.
    fn revalidate_dates(&mut self) {
        self.start_date_invalid =
            !self.start_date.is_empty() && !dates::is_valid_date_format(&self.start_date);
        self.end_date_invalid = dates::is_end_before_start(&self.start_date, &self.end_date);
    }

    pub fn start_date_invalid(&self) -> bool {
        self.start_date_invalid
    }

    pub fn end_date_invalid(&self) -> bool {
        self.end_date_invalid
    }

    pub fn date_pair_state(&self) -> DatePairState {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            DatePairState::Empty
        } else if !dates::is_valid_date_format(&self.start_date)
            || !dates::is_valid_date_format(&self.end_date)
        {
            DatePairState::FormatInvalid
        } else if self.end_date_invalid {
            DatePairState::OrderInvalid
        } else {
            DatePairState::Valid
        }
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        let value = self.value(field);
        if value.is_empty() {
            return Some(FieldError::Required);
        }
        match field {
            Field::StartDate | Field::EndDate if !dates::is_valid_date_format(value) => {
                Some(FieldError::DateFormat)
            }
            Field::EndDate if self.end_date_invalid => Some(FieldError::EndBeforeStart),
            Field::Price => match value.trim().parse::<f64>() {
                Ok(price) if !price.is_finite() => Some(FieldError::InvalidPrice),
                Ok(price) if price < 0.0 => Some(FieldError::NegativePrice),
                Ok(_) => None,
                Err(_) => Some(FieldError::InvalidPrice),
            },
            Field::Currency if value.parse::<Currency>().is_err() => {
                Some(FieldError::UnknownCurrency)
            }
            _ => None,
        }
    }

    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.field_error(field).map(|err| (field, err)))
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        !self.start_date_invalid && !self.end_date_invalid && self.errors().is_empty()
    }

    pub fn suggestions(&self, field: Field) -> Vec<String> {
        let candidates = match field {
            Field::University => &self.suggestions.universities,
            Field::City => &self.suggestions.cities,
            Field::Country => &self.suggestions.countries,
            _ => return Vec::new(),
        };
        filter_options(self.value(field), candidates)
    }

    pub fn to_normalized_record(&self) -> Result<CourseRecord, FormError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(FormError::NotSubmittable(errors));
        }

        let start_date = timestamp_for(&self.start_date, self.seeded_start.as_ref())?;
        let end_date = timestamp_for(&self.end_date, self.seeded_end.as_ref())?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::NotSubmittable(vec![(Field::Price, FieldError::InvalidPrice)]))?;

        Ok(CourseRecord {
            id: None,
            course_name: self.course_name.clone(),
            university: self.university.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            start_date,
            end_date,
            course_description: self.description.clone(),
            price,
            currency: self.currency.clone(),
        })
    }
}
