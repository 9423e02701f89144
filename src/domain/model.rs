use crate::domain::ports::{system_clock, InputReader, SharedClock};
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_not_after, validate_not_yet_set};
use chrono::{Datelike, NaiveDate};
use std::fmt::Debug;

/// Identity and birth date shared by every kind of individual.
///
/// Built empty, populated once through [`Person::fill_from_reader`] (or the
/// setters it delegates to), then only read. Each setter accepts one
/// successful value; later calls fail without touching the stored one.
#[derive(Debug, Clone)]
pub struct Person {
    first_name: String,
    surname: String,
    patronymic: String,
    birth_date: Option<NaiveDate>,
    clock: SharedClock,
}

impl Default for Person {
    fn default() -> Self {
        Self::new()
    }
}

impl Person {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            first_name: String::new(),
            surname: String::new(),
            patronymic: String::new(),
            birth_date: None,
            clock,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// First name and surname are required; a blank patronymic is stored as
    /// empty and never checked further.
    pub fn set_identity(
        &mut self,
        first_name: &str,
        surname: &str,
        patronymic: &str,
    ) -> Result<()> {
        validate_not_yet_set("identity", !self.surname.is_empty())?;
        let first_name = validate_non_empty_string("first_name", first_name)?;
        let surname = validate_non_empty_string("surname", surname)?;

        self.first_name = first_name;
        self.surname = surname;
        self.patronymic = patronymic.trim().to_string();
        tracing::debug!("Identity accepted: {}", self.full_name());
        Ok(())
    }

    pub fn set_birth_date(&mut self, date: NaiveDate) -> Result<()> {
        validate_not_yet_set("birth_date", self.birth_date.is_some())?;
        validate_not_after("birth_date", date, self.today())?;
        self.birth_date = Some(date);
        tracing::debug!("Birth date accepted: {}", date);
        Ok(())
    }

    /// Whole calendar years between the birth date and `reference`.
    pub fn age_at(&self, reference: NaiveDate) -> Result<i32> {
        let birth = self.birth_date.ok_or_else(|| {
            IntakeError::validation("birth_date", "birth date has not been entered")
        })?;

        if reference < birth {
            return Err(IntakeError::validation(
                "reference_date",
                format!("{} is earlier than the birth date {}", reference, birth),
            ));
        }

        let mut age = reference.year() - birth.year();
        if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Ok(age)
    }

    /// Case-insensitive occurrences of `letter` in the surname.
    pub fn count_letter(&self, letter: char) -> usize {
        self.surname
            .chars()
            .filter(|c| c.to_lowercase().eq(letter.to_lowercase()))
            .count()
    }

    pub fn full_name(&self) -> String {
        [&self.surname, &self.first_name, &self.patronymic]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn fill_from_reader(&mut self, reader: &mut dyn InputReader) -> Result<()> {
        let first_name = reader.read_string("First name: ")?;
        let surname = reader.read_string("Surname: ")?;
        let patronymic = reader.read_string("Patronymic (optional): ")?;
        self.set_identity(&first_name, &surname, &patronymic)?;

        let birth_date = reader.read_date("Birth date (DD.MM.YYYY): ")?;
        self.set_birth_date(birth_date)
    }
}

/// Capabilities every concrete individual offers. Variants embed a
/// [`Person`] and override what differs.
pub trait Individual: Debug {
    fn person(&self) -> &Person;

    fn person_mut(&mut self) -> &mut Person;

    fn role_info(&self) -> String;

    fn fill_from_reader(&mut self, reader: &mut dyn InputReader) -> Result<()> {
        self.person_mut().fill_from_reader(reader)
    }

    fn age(&self, reference: NaiveDate) -> Result<i32> {
        self.person().age_at(reference)
    }

    fn count_letter(&self, letter: char) -> usize {
        self.person().count_letter(letter)
    }
}
