pub mod availability;
pub mod booking;
pub mod contact;
pub mod feed;
pub mod health;

use crate::error::AppError;

/// Pulls a required field out of a loosely-typed form payload, trimming
/// whitespace. Missing or blank fields are a validation error.
pub(crate) fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}
