use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CourseName,
    University,
    City,
    Country,
    StartDate,
    EndDate,
    Description,
    Price,
    Currency,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::CourseName,
        Field::University,
        Field::City,
        Field::Country,
        Field::StartDate,
        Field::EndDate,
        Field::Description,
        Field::Price,
        Field::Currency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::CourseName => "courseName",
            Field::University => "university",
            Field::City => "city",
            Field::Country => "country",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Description => "courseDescription",
            Field::Price => "price",
            Field::Currency => "currency",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::CourseName => "Course Name",
            Field::University => "University",
            Field::City => "City",
            Field::Country => "Country",
            Field::StartDate => "Start Date",
            Field::EndDate => "End Date",
            Field::Description => "Course Description",
            Field::Price => "Price",
            Field::Currency => "Currency",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, Field::StartDate | Field::EndDate)
    }

    pub fn is_identity(self) -> bool {
        matches!(
            self,
            Field::CourseName | Field::University | Field::City | Field::Country
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    DateFormat,
    EndBeforeStart,
    InvalidPrice,
    NegativePrice,
    UnknownCurrency,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::Required => "is required",
            FieldError::DateFormat => "must be a date in YYYY/MM/DD format",
            FieldError::EndBeforeStart => "must be after Start Date",
            FieldError::InvalidPrice => "must be a number",
            FieldError::NegativePrice => "must not be negative",
            FieldError::UnknownCurrency => "is not a supported currency",
        };
        f.write_str(msg)
    }
}
