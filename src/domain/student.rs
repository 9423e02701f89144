use crate::domain::model::{Individual, Person};
use crate::domain::ports::{InputReader, SharedClock};
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_not_yet_set, validate_range};
use chrono::Datelike;

pub const EARLIEST_ADMISSION_YEAR: i32 = 1900;

#[derive(Debug, Clone, Default)]
pub struct Student {
    person: Person,
    admission_year: Option<i32>,
    specialty: String,
}

impl Student {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            person: Person::with_clock(clock),
            admission_year: None,
            specialty: String::new(),
        }
    }

    pub fn admission_year(&self) -> Option<i32> {
        self.admission_year
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    /// Accepts years from 1900 through the current year inclusive.
    pub fn set_admission_year(&mut self, year: i64) -> Result<()> {
        validate_not_yet_set("admission_year", self.admission_year.is_some())?;
        let current_year = self.person.today().year();
        validate_range(
            "admission_year",
            year,
            i64::from(EARLIEST_ADMISSION_YEAR),
            i64::from(current_year),
        )?;
        let year = i32::try_from(year).map_err(|_| {
            IntakeError::validation("admission_year", "year does not fit a calendar year")
        })?;
        self.admission_year = Some(year);
        tracing::debug!("Admission year accepted: {}", year);
        Ok(())
    }

    pub fn set_specialty(&mut self, value: &str) -> Result<()> {
        validate_not_yet_set("specialty", !self.specialty.is_empty())?;
        self.specialty = validate_non_empty_string("specialty", value)?;
        tracing::debug!("Specialty accepted: {}", self.specialty);
        Ok(())
    }
}

impl Individual for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    fn role_info(&self) -> String {
        let name = self.person.full_name();
        let who = if name.is_empty() {
            "Unnamed student"
        } else {
            name.as_str()
        };
        match self.admission_year {
            Some(year) if !self.specialty.is_empty() => {
                format!("{}: Student of {}, admitted in {}", who, self.specialty, year)
            }
            _ => format!("{}: Student (enrollment details not entered)", who),
        }
    }

    fn fill_from_reader(&mut self, reader: &mut dyn InputReader) -> Result<()> {
        self.person.fill_from_reader(reader)?;

        let year = reader.read_integer("Admission year: ")?;
        self.set_admission_year(year)?;

        let specialty = reader.read_string("Specialty: ")?;
        self.set_specialty(&specialty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn student_in(year: i32) -> Student {
        let today = NaiveDate::from_ymd_opt(year, 9, 1).unwrap();
        Student::with_clock(Arc::new(FixedClock(today)))
    }

    #[test]
    fn test_admission_year_bounds() {
        assert!(student_in(2024).set_admission_year(1899).is_err());
        assert!(student_in(2024).set_admission_year(1900).is_ok());

        let mut student = student_in(2024);
        assert!(student.set_admission_year(2024).is_ok());
        assert_eq!(student.admission_year(), Some(2024));

        let mut late = student_in(2024);
        let err = late.set_admission_year(2025).unwrap_err();
        assert_eq!(err.field(), Some("admission_year"));
        assert_eq!(late.admission_year(), None);
    }

    #[test]
    fn test_enrollment_is_set_once() {
        let mut student = student_in(2024);
        student.set_admission_year(2020).unwrap();
        student.set_specialty("History").unwrap();

        assert_eq!(student.set_admission_year(2021).unwrap_err().field(), Some("admission_year"));
        assert_eq!(student.set_specialty("Physics").unwrap_err().field(), Some("specialty"));
        assert_eq!(student.admission_year(), Some(2020));
        assert_eq!(student.specialty(), "History");
    }

    #[test]
    fn test_admission_year_far_out_of_range() {
        let mut student = student_in(2024);
        assert!(student.set_admission_year(i64::MAX).unwrap_err().is_validation());
        assert!(student.set_admission_year(i64::MIN).unwrap_err().is_validation());
    }

    #[test]
    fn test_specialty_required() {
        let mut student = student_in(2024);
        assert!(student.set_specialty("   ").unwrap_err().is_validation());
        student.set_specialty(" Computer Science ").unwrap();
        assert_eq!(student.specialty(), "Computer Science");
    }

    #[test]
    fn test_role_info_combines_specialty_and_year() {
        let mut student = student_in(2024);
        student.person_mut().set_identity("Olena", "Petrenko", "Ivanivna").unwrap();
        student.set_admission_year(2021).unwrap();
        student.set_specialty("Applied Mathematics").unwrap();
        assert_eq!(
            student.role_info(),
            "Petrenko Olena Ivanivna: Student of Applied Mathematics, admitted in 2021"
        );
    }

    #[test]
    fn test_role_info_before_filling() {
        let student = student_in(2024);
        assert_eq!(
            student.role_info(),
            "Unnamed student: Student (enrollment details not entered)"
        );
    }

    #[test]
    fn test_age_goes_through_person() {
        let mut student = student_in(2024);
        let birth = NaiveDate::from_ymd_opt(2000, 5, 15).unwrap();
        student.person_mut().set_birth_date(birth).unwrap();
        let individual: &dyn Individual = &student;
        let reference = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(individual.age(reference).unwrap(), 23);
    }
}
