use crate::config::toml_config::AppConfig;
use crate::utils::dates::parse_flexible_date;
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "student-intake")]
#[command(
    about = "Collects person and student details, then reports age and surname letter counts"
)]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Read answers from this file, one per line, instead of stdin")]
    pub script: Option<String>,

    #[arg(long, help = "Treat this date as today (DD.MM.YYYY or YYYY-MM-DD)")]
    pub today: Option<String>,

    #[arg(long, help = "Also print the session report as JSON")]
    pub json: bool,

    #[arg(long, help = "Do not wait for Enter before exiting")]
    pub no_pause: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn today(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|text| {
                parse_flexible_date(text)
                    .map_err(|_| IntakeError::config(format!("--today is not a date: '{}'", text)))
            })
            .transpose()
    }

    /// Loads the file named by `--config` (or defaults) and lays the command
    /// line flags over it.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if self.today.is_some() {
            config.session.today = self.today.clone();
        }
        if self.json {
            config.session.output = "json".to_string();
        }
        if self.no_pause {
            config.session.pause_on_exit = false;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.today()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("intake.toml");
        std::fs::write(
            &path,
            "[session]\npause_on_exit = true\ntoday = \"01.01.2020\"\n",
        )?;

        let cli = CliConfig::parse_from([
            "student-intake",
            "--config",
            path.to_str().unwrap(),
            "--today",
            "2024-05-15",
            "--json",
            "--no-pause",
        ]);
        let config = cli.resolve()?;
        assert!(!config.session.pause_on_exit);
        assert!(config.wants_json());
        assert_eq!(config.today()?, NaiveDate::from_ymd_opt(2024, 5, 15));
        Ok(())
    }

    #[test]
    fn test_bad_today_flag() {
        let cli = CliConfig::parse_from(["student-intake", "--today", "tomorrow"]);
        assert!(cli.validate().is_err());
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["student-intake", "--config", "/nonexistent/intake.toml"]);
        assert!(matches!(cli.resolve(), Err(IntakeError::ConfigError { .. })));
    }
}
