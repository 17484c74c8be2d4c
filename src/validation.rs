//! Input validation utilities for the service layer.
//!
//! Failures are returned as [`Error::Validation`] carrying the notice shown
//! to the user.

use uuid::Uuid;

use crate::error::{Error, Result};

/// Notice shown whenever a required form field is missing or blank.
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields.";

/// Notice shown for a rating outside 1..=5.
pub const RATING_NOTICE: &str = "Rating must be a whole number from 1 to 5.";

/// Returns true when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that every given field value is present and non-blank.
///
/// # Examples
/// ```
/// use telemed::validation::require_fields;
///
/// assert!(require_fields(&["Ada", "ada@example.com"]).is_ok());
/// assert!(require_fields(&["Ada", "   "]).is_err());
/// ```
pub fn require_fields(values: &[&str]) -> Result<()> {
    if values.iter().any(|value| is_blank(value)) {
        return Err(Error::Validation(REQUIRED_FIELDS_NOTICE.to_string()));
    }
    Ok(())
}

/// Like [`require_fields`] for optional inputs, where absence also fails.
pub fn require_present<'a>(values: &[Option<&'a str>]) -> Result<Vec<&'a str>> {
    values
        .iter()
        .map(|value| match value {
            Some(v) if !is_blank(v) => Ok(*v),
            _ => Err(Error::Validation(REQUIRED_FIELDS_NOTICE.to_string())),
        })
        .collect()
}

/// Parses a feedback rating: a whole number from 1 to 5, surrounding
/// whitespace allowed.
pub fn parse_rating(raw: &str) -> Result<i16> {
    match raw.trim().parse::<i16>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(rating),
        _ => Err(Error::Validation(RATING_NOTICE.to_string())),
    }
}

/// Parses a record id taken from a URL. Malformed ids name no record, so
/// they are reported as `NotFound`.
pub fn parse_id(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::NotFound(format!("{} not found", what)))
}
