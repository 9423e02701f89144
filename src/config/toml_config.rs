use crate::utils::dates::parse_flexible_date;
use crate::utils::error::{IntakeError, Result};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{validate_one_of, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub pause_on_exit: bool,
    /// Pins "today" for validation; same formats as interactive dates.
    pub today: Option<String>,
    pub output: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
            today: None,
            output: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            IntakeError::config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| IntakeError::config(format!("TOML parsing error: {}", e)))
    }

    pub fn today(&self) -> Result<Option<NaiveDate>> {
        self.session
            .today
            .as_deref()
            .map(|text| {
                parse_flexible_date(text).map_err(|_| {
                    IntakeError::config(format!("session.today is not a date: '{}'", text))
                })
            })
            .transpose()
    }

    pub fn wants_json(&self) -> bool {
        self.session.output == "json"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("session.output", &self.session.output, OUTPUT_FORMATS)?;
        validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;
        self.today()?;
        Ok(())
    }
}
