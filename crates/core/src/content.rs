//! Validation rules shared by the content tables.
//!
//! Business keys (`section_key`, `config_key`) are caller-chosen and stay
//! reserved after a soft delete, so they are validated before any insert.

use crate::error::CoreError;

/// Maximum length of a business key.
pub const MAX_KEY_LEN: usize = 100;

/// Maximum length of a festival stat `year` label.
pub const MAX_YEAR_LEN: usize = 20;

/// Validate a business key: non-empty, at most [`MAX_KEY_LEN`] characters,
/// ASCII alphanumerics plus `_`, `-` and `.` only.
pub fn validate_business_key(field: &str, key: &str) -> Result<(), CoreError> {
    if key.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if key.len() > MAX_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_KEY_LEN} characters"
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(CoreError::Validation(format!(
            "{field} may only contain ASCII letters, digits, '_', '-' and '.'"
        )));
    }
    Ok(())
}

/// Validate a festival stat year label such as `2024` or `2018-2020`.
pub fn validate_year_label(year: &str) -> Result<(), CoreError> {
    if year.trim().is_empty() {
        return Err(CoreError::Validation("year must not be empty".into()));
    }
    if year.len() > MAX_YEAR_LEN {
        return Err(CoreError::Validation(format!(
            "year must be at most {MAX_YEAR_LEN} characters"
        )));
    }
    Ok(())
}

/// Participant counts are optional but never negative.
pub fn validate_participants(participants: Option<i32>) -> Result<(), CoreError> {
    match participants {
        Some(n) if n < 0 => Err(CoreError::Validation(
            "participants must not be negative".into(),
        )),
        _ => Ok(()),
    }
}
