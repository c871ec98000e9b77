use thiserror::Error;

/// A record payload that breaks one of the entity invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("Invalid clock time (expected HH:MM): {0}")]
    InvalidTime(String),
}

/// Checks an inclusive 1–5 rating.
pub(crate) fn check_rating(field: &'static str, value: u8) -> Result<(), ValidationError> {
    check_range(field, value as f64, 1.0, 5.0)
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_nan() || value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max, value });
    }
    Ok(())
}

pub(crate) fn check_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
