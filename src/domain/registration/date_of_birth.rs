//! Date of birth parsing and age computation.
//!
//! The reference date is always passed in; nothing here reads the clock.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::domain::foundation::{DobError, ValidationError};

/// Default inclusive lower age bound.
pub const DEFAULT_MIN_AGE: i32 = 16;

/// Default inclusive upper age bound.
pub const DEFAULT_MAX_AGE: i32 = 70;

/// Accepted textual date layouts, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD/MM/YYYY`
    DaySlash,
    /// `DD-MM-YYYY`
    DayDash,
}

impl DateFormat {
    pub const ALL: [DateFormat; 3] = [DateFormat::Iso, DateFormat::DaySlash, DateFormat::DayDash];

    /// The chrono format string.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::DaySlash => "%d/%m/%Y",
            DateFormat::DayDash => "%d-%m-%Y",
        }
    }

    /// Human-readable layout shown in prompts and messages.
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::DaySlash => "DD/MM/YYYY",
            DateFormat::DayDash => "DD-MM-YYYY",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    /// Whether `text` is laid out like this format: a four-digit year, one
    /// or two digit day and month, and this format's separator.
    ///
    /// chrono's `%Y` alone also takes short and signed years.
    fn matches_layout(&self, text: &str) -> bool {
        let (separator, year_field) = match self {
            DateFormat::Iso => ('-', 0),
            DateFormat::DaySlash => ('/', 2),
            DateFormat::DayDash => ('-', 2),
        };
        let fields: Vec<&str> = text.split(separator).collect();
        fields.len() == 3
            && fields.iter().enumerate().all(|(i, field)| {
                let width = if i == year_field { 4..=4 } else { 1..=2 };
                width.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
            })
    }

    /// "YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY"
    pub fn accepted_labels() -> String {
        let labels: Vec<&str> = Self::ALL.iter().map(|f| f.label()).collect();
        match labels.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
            _ => labels.join(""),
        }
    }
}

/// A calendar date of birth.
///
/// Age is never stored alongside it; call [`DateOfBirth::age_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    pub fn birth_year(&self) -> i32 {
        self.0.year()
    }

    /// Age in whole years on `reference`.
    pub fn age_on(&self, reference: NaiveDate) -> i32 {
        age_at(self.0, reference)
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateFormat::Iso.format(self.0))
    }
}

/// Whole years between `dob` and `reference`.
///
/// One less than the year difference while the birthday has not yet come
/// round, comparing (month, day) pairs. A 29 February birthday therefore
/// falls on 1 March in non-leap years.
pub fn age_at(dob: NaiveDate, reference: NaiveDate) -> i32 {
    let years = reference.year() - dob.year();
    if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
        years - 1
    } else {
        years
    }
}

/// Inclusive age range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBounds {
    min: i32,
    max: i32,
}

impl AgeBounds {
    /// Creates bounds, returning error if min is negative or above max.
    pub fn try_new(min: i32, max: i32) -> Result<Self, ValidationError> {
        if min < 0 || min > max {
            return Err(ValidationError::invalid_format(
                "age_bounds",
                format!("expected 0 <= min <= max, got min {} and max {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, age: i32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

/// Parses dates of birth and checks the resulting age against bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DobValidator {
    bounds: AgeBounds,
}

impl DobValidator {
    pub fn new(bounds: AgeBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> AgeBounds {
        self.bounds
    }

    /// Parses `text` with the first accepted format that yields a real date.
    ///
    /// Impossible calendar dates such as `31/02/2020` are format errors.
    pub fn parse(text: &str) -> Result<DateOfBirth, DobError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DobError::Empty);
        }
        DateFormat::ALL
            .iter()
            .filter(|format| format.matches_layout(text))
            .find_map(|format| NaiveDate::parse_from_str(text, format.pattern()).ok())
            .map(DateOfBirth::new)
            .ok_or_else(|| DobError::Format {
                input: text.to_string(),
            })
    }

    /// Parses `text` and checks the age on `reference` is within bounds.
    pub fn validate(&self, text: &str, reference: NaiveDate) -> Result<(DateOfBirth, i32), DobError> {
        let dob = Self::parse(text)?;
        if dob.as_date() > reference {
            return Err(DobError::InFuture {
                date: dob.to_string(),
            });
        }
        let age = dob.age_on(reference);
        if !self.bounds.contains(age) {
            return Err(DobError::OutOfBounds {
                age,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        Ok((dob, age))
    }

    /// Returns `(true, "")` for an acceptable DOB, `(false, reason)` otherwise.
    pub fn check(&self, text: &str, reference: NaiveDate) -> (bool, String) {
        match self.validate(text, reference) {
            Ok(_) => (true, String::new()),
            Err(err) => (false, err.to_string()),
        }
    }
}
