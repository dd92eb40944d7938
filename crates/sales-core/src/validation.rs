//! Field constraint checking
//!
//! Mirrors the constraints a desktop form enforces before it will submit:
//! required values, calendar dates, numeric lower bounds and step granularity.
//! Each check reports at most one error per field, and `ValidationErrors`
//! keeps them in form order so the first invalid field can be surfaced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// ISO calendar date format accepted by date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies a form field in validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Report form
    ReportType,
    StartDate,
    EndDate,
    Format,
    // Order form
    Customer,
    Product,
    Quantity,
    UnitPrice,
    DueDate,
    SalesRep,
    Priority,
}

impl Field {
    /// Label shown next to the input (required fields carry a trailing `*`)
    pub fn label(&self) -> &'static str {
        match self {
            Field::ReportType => "Report Type *",
            Field::StartDate => "Start Date *",
            Field::EndDate => "End Date *",
            Field::Format => "Format *",
            Field::Customer => "Customer *",
            Field::Product => "Product *",
            Field::Quantity => "Quantity *",
            Field::UnitPrice => "Unit Price *",
            Field::DueDate => "Due Date *",
            Field::SalesRep => "Sales Representative *",
            Field::Priority => "Priority *",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end_matches(" *"))
    }
}

/// A single constraint violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please fill out this field.")]
    Missing,
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Please enter a number.")]
    NotANumber,
    #[error("Value must be greater than or equal to {min}.")]
    BelowMinimum { min: Decimal },
    #[error("Please enter a valid value. The two nearest valid values are {lower} and {upper}.")]
    StepMismatch { lower: Decimal, upper: Decimal },
    #[error("Value is too large.")]
    OutOfRange,
}

/// All constraint violations found in one submit attempt, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; a field keeps only its first error
    pub fn push(&mut self, field: Field, error: FieldError) {
        if self.get(field).is_none() {
            self.errors.push((field, error));
        }
    }

    /// Error for a specific field, if it failed
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    /// The first invalid field in form order
    pub fn first(&self) -> Option<(Field, &FieldError)> {
        self.errors.first().map(|(f, e)| (*f, e))
    }

    /// Forget the error for a field (called when the user edits it)
    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    /// Unwrap a check result, recording the error under `field`
    pub(crate) fn take<T>(&mut self, field: Field, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(field, error);
                None
            }
        }
    }
}

/// Required free-text value
///
/// Only the empty string counts as missing; any other text is kept as typed.
pub fn required_text(raw: &str) -> Result<String, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Missing);
    }
    Ok(raw.to_string())
}

/// Required calendar date in `YYYY-MM-DD` form
pub fn required_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

/// Required number with a lower bound and step granularity
///
/// The step is counted from `min`, so with `min = 0, step = 0.01` any value
/// with at most two decimal places is accepted.
pub fn required_number(raw: &str, min: Decimal, step: Decimal) -> Result<Decimal, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing);
    }

    // Plain decimal notation only: no sign prefix, digit separators or rounding
    if trimmed.starts_with('+') || trimmed.contains('_') {
        return Err(FieldError::NotANumber);
    }
    let value = Decimal::from_str_exact(trimmed).map_err(|_| FieldError::NotANumber)?;

    if value < min {
        return Err(FieldError::BelowMinimum { min });
    }

    let offset = value - min;
    if !(offset % step).is_zero() {
        let lower = min + (offset / step).floor() * step;
        return Err(FieldError::StepMismatch {
            lower: lower.normalize(),
            upper: (lower + step).normalize(),
        });
    }

    Ok(value)
}
