use crate::domain::model::DemoOutput;
use crate::domain::ports::Demo;
use crate::utils::error::{Result, TourError};
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TourError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Runs demos in order and writes what they print.
pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
    format: OutputFormat,
}

impl DemoRunner {
    pub fn new(demos: Vec<Box<dyn Demo>>) -> Self {
        Self {
            demos,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn demo_names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|demo| demo.name()).collect()
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Vec<DemoOutput>> {
        tracing::info!("Starting tour with {} demos", self.demos.len());
        let mut outputs = Vec::with_capacity(self.demos.len());

        for demo in self.demos.iter_mut() {
            tracing::debug!("Running {}: {}", demo.name(), demo.description());
            let lines = demo.run()?;
            let output = DemoOutput {
                name: demo.name().to_string(),
                lines,
            };

            match self.format {
                OutputFormat::Text => {
                    for line in &output.lines {
                        writeln!(out, "{}", line)?;
                    }
                }
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &output)?;
                    writeln!(out)?;
                }
            }

            tracing::debug!("{} printed {} lines", output.name, output.lines.len());
            outputs.push(output);
        }

        out.flush()?;
        tracing::info!("Tour finished");
        Ok(outputs)
    }
}
