//! Validation error types

use std::fmt;

/// Validation error for request payloads and path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent from the payload
    Missing { field: &'static str },

    /// Field is empty or whitespace only
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a required text field: present, not blank, at most `max` characters.
///
/// The value is stored as given; only the blank check looks at trimmed text.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;

    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value)
}

/// Parse a row id from a path segment. Ids are SERIAL, so only positive
/// 32-bit integers can ever match. Digits only: no sign, no whitespace.
pub fn parse_id(raw: &str) -> Result<i32, ValidationError> {
    let invalid = ValidationError::InvalidFormat {
        field: "id",
        reason: "must be a positive integer",
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid);
    }

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid),
    }
}
