use crate::utils::dates::parse_flexible_date;
use crate::utils::error::{IntakeError, Result};
use chrono::{Local, NaiveDate};
use std::fmt::Debug;
use std::sync::Arc;

/// Source of "today" for every not-in-the-future check.
pub trait Clock: Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type SharedClock = Arc<dyn Clock>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Interactive value source.
///
/// Adapters supply the two primitives; the typed readers re-prompt until a
/// well-formed value arrives. A malformed value is reported through `show`
/// and never returned to the caller. The only way out of a retry loop other
/// than a valid value is the source running dry, which surfaces as
/// [`IntakeError::InputClosed`].
pub trait InputReader {
    /// Writes `prompt` and returns the next raw line without its terminator,
    /// or `None` once the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Writes a full line of output (results, section headers, diagnostics).
    fn show(&mut self, text: &str) -> Result<()>;

    fn read_string(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?.ok_or(IntakeError::InputClosed)
    }

    fn read_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        read_parsed(self, prompt, parse_flexible_date)
    }

    fn read_integer(&mut self, prompt: &str) -> Result<i64> {
        read_parsed(self, prompt, |text| {
            let text = text.trim();
            text.parse::<i64>()
                .map_err(|_| IntakeError::format(text, "whole number"))
        })
    }

    fn read_letter(&mut self, prompt: &str) -> Result<char> {
        read_parsed(self, prompt, |text| {
            text.trim()
                .chars()
                .next()
                .ok_or_else(|| IntakeError::format(text, "letter"))
        })
    }

    /// Blocks until the user acknowledges; an exhausted source counts as the
    /// acknowledgement.
    fn pause(&mut self, prompt: &str) -> Result<()> {
        self.read_line(prompt)?;
        Ok(())
    }
}

fn read_parsed<R, T, F>(reader: &mut R, prompt: &str, parse: F) -> Result<T>
where
    R: InputReader + ?Sized,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let line = reader.read_line(prompt)?.ok_or(IntakeError::InputClosed)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e @ IntakeError::FormatError { .. }) => {
                tracing::warn!("Re-prompting after malformed input: {}", e);
                reader.show(&format!("{}. Please try again.", e.user_friendly_message()))?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_not_in_the_past() {
        let before = Local::now().date_naive();
        assert!(SystemClock.today() >= before);
    }
}
