//! Report generation for diff results.
//!
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly counts
//! - Changelog: one line per node and property change

mod changelog;
mod json;
mod summary;
mod types;

pub use changelog::ChangelogReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{DocumentInfo, ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::{DiffResult, MultiDiffResult};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a 1:1 diff result
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError>;

    /// Generate a report from a 1:N comparison
    fn generate_multi_report(&self, result: &MultiDiffResult, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format.resolve() {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Changelog => {
            if use_color {
                Box::new(ChangelogReporter::new())
            } else {
                Box::new(ChangelogReporter::new().no_color())
            }
        }
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}
