pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    catalog::build_catalog,
    inventory::Inventory,
    memo::{Fibonacci, LruCache},
    runner::{DemoRunner, OutputFormat},
};
pub use utils::error::{Result, TourError};
