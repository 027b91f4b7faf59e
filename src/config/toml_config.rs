use crate::core::memo::{DEFAULT_CACHE_SIZE, MAX_FIBONACCI_INPUT, MIN_FIBONACCI_CACHE_SIZE};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FIBONACCI_LIMIT: u32 = 20;
pub const DEFAULT_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub tour: TourSection,
    #[serde(default)]
    pub fibonacci: FibonacciSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSection {
    #[serde(default)]
    pub demos: Vec<String>,
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibonacciSection {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_FIBONACCI_LIMIT
}

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

impl Default for TourSection {
    fn default() -> Self {
        Self {
            demos: Vec::new(),
            format: default_format(),
        }
    }
}

impl Default for FibonacciSection {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            cache_size: default_cache_size(),
        }
    }
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` placeholders from the environment; unset ones stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TourError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Debug logging requested by the file.
    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .map(|level| level.eq_ignore_ascii_case("debug") || level.eq_ignore_ascii_case("trace"))
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn enabled_demos(&self) -> &[String] {
        &self.tour.demos
    }

    fn fibonacci_limit(&self) -> u32 {
        self.fibonacci.limit
    }

    fn cache_size(&self) -> usize {
        self.fibonacci.cache_size
    }

    fn output_format(&self) -> &str {
        &self.tour.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_known_names(config.enabled_demos(), &crate::core::catalog::DEMO_NAMES)?;
    validation::validate_range(
        "fibonacci.limit",
        config.fibonacci_limit(),
        0,
        MAX_FIBONACCI_INPUT,
    )?;
    validation::validate_positive_number(
        "fibonacci.cache_size",
        config.cache_size(),
        MIN_FIBONACCI_CACHE_SIZE,
    )?;
    validation::validate_one_of(
        "tour.format",
        config.output_format(),
        &crate::core::runner::OutputFormat::NAMES,
    )?;
    Ok(())
}
