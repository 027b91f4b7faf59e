use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown demo: {name}")]
    UnknownDemoError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::IoError(_) => ErrorCategory::System,
            TourError::SerializationError(_) => ErrorCategory::Output,
            TourError::TomlError(_)
            | TourError::ConfigError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::UnknownDemoError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::IoError(_) => ErrorSeverity::Critical,
            TourError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not write or read a file: {}", e),
            TourError::SerializationError(e) => format!("Could not encode demo output: {}", e),
            TourError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            TourError::ConfigError { message } => format!("Configuration problem: {}", message),
            TourError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
            TourError::UnknownDemoError { name } => format!("There is no demo called '{}'", name),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::IoError(_) => "Check that the path exists and is readable",
            TourError::SerializationError(_) => "Retry with --format text",
            TourError::TomlError(_) => "Fix the syntax of the configuration file",
            TourError::ConfigError { .. } | TourError::InvalidConfigValueError { .. } => {
                "Adjust the configuration file or command line flags"
            }
            TourError::UnknownDemoError { .. } => "Run with --list to see the available demos",
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
