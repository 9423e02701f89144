use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Cannot read '{input}' as {expected}")]
    FormatError { input: String, expected: String },

    #[error("Input ended before all values were entered")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IntakeError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        IntakeError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn format(input: &str, expected: &str) -> Self {
        IntakeError::FormatError {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        IntakeError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::ValidationError { .. } => ErrorCategory::Validation,
            IntakeError::FormatError { .. } | IntakeError::InputClosed => ErrorCategory::Input,
            IntakeError::ConfigError { .. } => ErrorCategory::Configuration,
            IntakeError::IoError(_) | IntakeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IntakeError::FormatError { .. } => ErrorSeverity::Low,
            IntakeError::ValidationError { .. } => ErrorSeverity::Medium,
            IntakeError::ConfigError { .. } | IntakeError::InputClosed => ErrorSeverity::High,
            IntakeError::IoError(_) | IntakeError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, IntakeError::ValidationError { .. })
    }

    /// Field a validation error is about.
    pub fn field(&self) -> Option<&str> {
        match self {
            IntakeError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::ValidationError { field, message } => {
                format!("Invalid {}: {}", field.replace('_', " "), message)
            }
            IntakeError::FormatError { input, expected } => {
                format!("'{}' is not a valid {}", input, expected)
            }
            IntakeError::InputClosed => "No more input available".to_string(),
            IntakeError::IoError(e) => format!("Console error: {}", e),
            IntakeError::ConfigError { message } => format!("Bad configuration: {}", message),
            IntakeError::SerializationError(e) => format!("Could not render report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IntakeError::ValidationError { .. } => {
                "Run the program again and enter a valid value"
            }
            IntakeError::FormatError { .. } => {
                "Use DD.MM.YYYY or YYYY-MM-DD for dates and digits for numbers"
            }
            IntakeError::InputClosed => {
                "Provide an answer for every prompt (check the script file)"
            }
            IntakeError::ConfigError { .. } => "Check the TOML file and command line flags",
            IntakeError::IoError(_) | IntakeError::SerializationError(_) => {
                "Check that the terminal is readable and writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
