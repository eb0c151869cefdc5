//! JSON report generator.

use super::{DocumentInfo, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffSummary, MultiDiffResult, NodeDiff};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include summary
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata::new(config),
            summary: &result.summary,
            nodes: (!self.summary_only).then_some(result.nodes.as_slice()),
        };
        self.render(&report)
    }

    fn generate_multi_report(
        &self,
        result: &MultiDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonMultiReport {
            metadata: JsonReportMetadata::new(config),
            targets: &config.metadata.targets,
            result,
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: &'a DiffSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<&'a [NodeDiff]>,
}

#[derive(Serialize)]
struct JsonMultiReport<'a> {
    metadata: JsonReportMetadata<'a>,
    targets: &'a [(String, DocumentInfo)],
    #[serde(flatten)]
    result: &'a MultiDiffResult,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<&'a DocumentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<&'a DocumentInfo>,
}

impl<'a> JsonReportMetadata<'a> {
    fn new(config: &'a ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            title: config.title.as_deref(),
            left: config.metadata.left.as_ref(),
            right: config.metadata.right.as_ref(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}
