use crate::domain::model::Individual;
use crate::domain::ports::{system_clock, InputReader, SharedClock};
use crate::domain::student::Student;
use crate::utils::error::{IntakeError, Result};
use chrono::NaiveDate;
use serde::Serialize;

pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub reference_date: NaiveDate,
    pub student_age: i32,
    pub letter: char,
    pub letter_count: usize,
    pub person_role: String,
    pub student_role: String,
}

/// One pass of the intake: two individuals, a reference date, a letter.
pub struct IntakeSession<R: InputReader> {
    reader: R,
    clock: SharedClock,
}

impl<R: InputReader> IntakeSession<R> {
    pub fn new(reader: R) -> Self {
        Self::with_clock(reader, system_clock())
    }

    pub fn with_clock(reader: R, clock: SharedClock) -> Self {
        Self { reader, clock }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn into_reader(self) -> R {
        self.reader
    }

    /// Runs the whole sequence. The first validation failure ends the run
    /// and is returned as is.
    pub fn run(&mut self) -> Result<SessionReport> {
        tracing::info!("Starting intake session (today is {})", self.clock.today());

        self.reader.show("=== Person details ===")?;
        let mut person: Box<dyn Individual> = Box::new(Student::with_clock(self.clock.clone()));
        person.fill_from_reader(&mut self.reader)?;

        self.reader.show("")?;
        self.reader.show("=== Student details ===")?;
        let mut student = Student::with_clock(self.clock.clone());
        student.fill_from_reader(&mut self.reader)?;

        self.reader.show("")?;
        self.reader.show("=== Reference date ===")?;
        let reference_date = self.reader.read_date("Date (DD.MM.YYYY): ")?;

        let student_age = age_of(&student, reference_date)?;
        self.reader.show("")?;
        self.reader
            .show(&format!("Student age on {}: {} years", reference_date, student_age))?;

        self.reader.show("")?;
        let letter = self
            .reader
            .read_letter("Letter to count in the person's surname: ")?;
        let letter_count = person.count_letter(letter);
        self.reader.show(&format!(
            "Letter '{}' occurs {} time(s) in the surname",
            letter, letter_count
        ))?;

        let person_role = person.role_info();
        let student_role = student.role_info();
        self.reader.show("")?;
        self.reader.show(&format!("Person: {}", person_role))?;
        self.reader.show(&format!("Student: {}", student_role))?;

        tracing::info!("Intake session completed");
        Ok(SessionReport {
            reference_date,
            student_age,
            letter,
            letter_count,
            person_role,
            student_role,
        })
    }

    /// Reports a failed run to the user.
    pub fn report_failure(&mut self, error: &IntakeError) -> Result<()> {
        tracing::error!("Intake session aborted: {}", error);
        self.reader.show("")?;
        self.reader
            .show(&format!("Error: {}", error.user_friendly_message()))
    }

    pub fn finish(&mut self, pause: bool) -> Result<()> {
        if pause {
            self.reader.show("")?;
            self.reader.pause(PAUSE_PROMPT)?;
        }
        Ok(())
    }
}

fn age_of(individual: &dyn Individual, reference: NaiveDate) -> Result<i32> {
    individual.age(reference)
}
