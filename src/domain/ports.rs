use crate::utils::error::Result;

/// A self-contained demonstration that produces printable lines.
pub trait Demo {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&mut self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    /// Demo names to run; empty means all of them.
    fn enabled_demos(&self) -> &[String];
    fn fibonacci_limit(&self) -> u32;
    fn cache_size(&self) -> usize;
    fn output_format(&self) -> &str;
}
