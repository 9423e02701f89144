use crate::utils::error::{IntakeError, Result};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const DATE_FORMAT_HINT: &str = "date (DD.MM.YYYY or YYYY-MM-DD)";

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[./\- ](\d{1,2})[./\- ](\d{4})$").expect("day-month-year pattern")
});

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("ISO date pattern"));

/// Parses a calendar date written either day-first with `.`, `/`, `-` or a
/// space between parts, or in ISO `YYYY-MM-DD` form.
pub fn parse_flexible_date(input: &str) -> Result<NaiveDate> {
    let text = input.trim();
    if text.is_empty() {
        return Err(IntakeError::format(text, DATE_FORMAT_HINT));
    }

    let (year, month, day) = if let Some(caps) = ISO_DATE.captures(text) {
        (part(&caps, 1), part(&caps, 2), part(&caps, 3))
    } else if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        (part(&caps, 3), part(&caps, 2), part(&caps, 1))
    } else {
        return Err(IntakeError::format(text, DATE_FORMAT_HINT));
    };

    let parts = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>());
    match parts {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| IntakeError::format(text, DATE_FORMAT_HINT)),
        _ => Err(IntakeError::format(text, DATE_FORMAT_HINT)),
    }
}

fn part<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}
