use crate::utils::error::{IntakeError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims `value` and rejects it when nothing is left.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::validation(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(trimmed.to_string())
}

/// Accepted values are final; a second assignment is rejected.
pub fn validate_not_yet_set(field_name: &str, already_set: bool) -> Result<()> {
    if already_set {
        return Err(IntakeError::validation(field_name, "value has already been entered"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(IntakeError::validation(
            field_name,
            format!("{} is outside the allowed range {}..={}", value, min, max),
        ));
    }
    Ok(())
}

pub fn validate_not_after(field_name: &str, date: NaiveDate, limit: NaiveDate) -> Result<()> {
    if date > limit {
        return Err(IntakeError::validation(
            field_name,
            format!("{} is later than {}", date, limit),
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(IntakeError::config(format!(
            "{} must be one of {}, got '{}'",
            field_name,
            allowed.join(", "),
            value
        )));
    }
    Ok(())
}
