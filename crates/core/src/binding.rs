//! Allow-list form binding helpers.
//!
//! Submitted forms arrive as raw strings. Each binder parses only the fields
//! it names, records a message per failing field in [`FieldErrors`], and
//! hands the typed result to model validation. Missing or unparsable values
//! are field errors, never request rejections, so the caller can redisplay
//! the form with the submitted values intact.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationErrors;

/// Accepted date format for date fields (HTML `<input type="date">`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Year range accepted for date fields. PostgreSQL `DATE` cannot store
/// every year chrono can parse.
pub const MIN_DATE_YEAR: i32 = 1;
pub const MAX_DATE_YEAR: i32 = 9999;

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append every message from `other`.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Merge the field-level errors produced by a `validator` derive.
    pub fn extend_from_validation(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid ({})", error.code),
                };
                self.add(&field.to_string(), message);
            }
        }
    }

    /// `Ok(value)` when no errors were recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Bind a required text field, stored as submitted.
///
/// Whitespace-only values count as missing. NUL characters are rejected
/// because PostgreSQL text cannot hold them.
pub fn required_text(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<String> {
    match raw.filter(|v| !v.trim().is_empty()) {
        Some(value) => checked_text(errors, field, value),
        None => {
            errors.add(field, format!("The {field} field is required."));
            None
        }
    }
}

/// Bind an optional text field, defaulting to the empty string.
pub fn optional_text(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<String> {
    checked_text(errors, field, raw.unwrap_or_default())
}

fn checked_text(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    if value.contains('\0') {
        errors.add(field, format!("The {field} field contains an invalid character."));
        return None;
    }
    Some(value.to_string())
}

/// Bind a required value parsed with [`FromStr`] (integers, decimals).
pub fn required_parsed<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<&str>,
) -> Option<T> {
    let value = required_text(errors, field, raw)?;
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, format!("The value '{value}' is not valid for {field}."));
            None
        }
    }
}

/// Bind a required decimal field.
pub fn required_decimal(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<&str>,
) -> Option<Decimal> {
    required_parsed::<Decimal>(errors, field, raw)
}

/// Bind a required `YYYY-MM-DD` date field within
/// [`MIN_DATE_YEAR`]..=[`MAX_DATE_YEAR`].
pub fn required_date(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<&str>,
) -> Option<NaiveDate> {
    let value = required_text(errors, field, raw)?;
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) if (MIN_DATE_YEAR..=MAX_DATE_YEAR).contains(&date.year()) => Some(date),
        Ok(_) => {
            errors.add(
                field,
                format!("The {field} year must be between {MIN_DATE_YEAR} and {MAX_DATE_YEAR}."),
            );
            None
        }
        Err(_) => {
            errors.add(field, format!("The value '{value}' is not a valid date."));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
impl FieldErrors {
    fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
