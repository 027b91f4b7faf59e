use super::toml_config::{
    validate_provider, TomlConfig, DEFAULT_FIBONACCI_LIMIT, DEFAULT_FORMAT,
};
use crate::core::memo::DEFAULT_CACHE_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "idiom-tour")]
#[command(about = "A tour of collection idioms: filtering, grouping, memoization and more")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only run these demos (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Highest Fibonacci input to print
    #[arg(long)]
    pub fib_limit: Option<u32>,

    /// Capacity of the Fibonacci LRU cache
    #[arg(long)]
    pub cache_size: Option<usize>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// List the available demos and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Writes every flag that was given on the command line over `config`.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if !self.only.is_empty() {
            config.tour.demos = self.only.clone();
            tracing::info!("🔧 Demo selection overridden to: {:?}", self.only);
        }
        if let Some(limit) = self.fib_limit {
            config.fibonacci.limit = limit;
            tracing::info!("🔧 Fibonacci limit overridden to: {}", limit);
        }
        if let Some(size) = self.cache_size {
            config.fibonacci.cache_size = size;
            tracing::info!("🔧 Cache size overridden to: {}", size);
        }
        if let Some(format) = &self.format {
            config.tour.format = format.clone();
            tracing::info!("🔧 Output format overridden to: {}", format);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn enabled_demos(&self) -> &[String] {
        &self.only
    }

    fn fibonacci_limit(&self) -> u32 {
        self.fib_limit.unwrap_or(DEFAULT_FIBONACCI_LIMIT)
    }

    fn cache_size(&self) -> usize {
        self.cache_size.unwrap_or(DEFAULT_CACHE_SIZE)
    }

    fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
