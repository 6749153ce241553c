//! Helpers for raw `application/x-www-form-urlencoded` fields.
//!
//! Browsers submit every field as text, including foreign keys picked from a
//! `<select>`. Handlers keep them as `Option<String>` and convert here so a
//! bad value becomes an [`AppError::Validation`] instead of an extractor
//! rejection.

use crate::errors::AppError;

/// Returns the trimmed value, or `None` when the field is absent or blank.
pub fn submitted(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the trimmed text of a required field.
///
/// Form validation already rejects absent and empty fields; this also
/// rejects whitespace-only input.
pub fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    submitted(value.as_deref())
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(message))
}

/// Parses a required identifier field.
pub fn required_id(label: &str, value: Option<&str>) -> Result<i32, AppError> {
    let raw = submitted(value)
        .ok_or_else(|| AppError::validation(format!("Please select a {}", label)))?;
    parse_id(label, raw)
}

/// Parses an identifier field that may be left out (edit forms).
pub fn optional_id(label: &str, value: Option<&str>) -> Result<Option<i32>, AppError> {
    submitted(value).map(|raw| parse_id(label, raw)).transpose()
}

fn parse_id(label: &str, raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("Invalid {} identifier", label)))
}

/// Chooses the submitted text over the stored one; blank submissions keep
/// the stored value.
pub fn keep_or_replace(submitted_value: Option<String>, stored: String) -> String {
    match submitted_value {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => stored,
    }
}
