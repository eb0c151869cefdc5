//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary on a terminal or in a file
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
    /// One line per node and property change
    Changelog,
}

impl ReportFormat {
    /// Resolve `Auto` to a concrete format.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Auto => Self::Summary,
            other => other,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Changelog => write!(f, "changelog"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum node records listed by text reporters
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    #[must_use]
    pub fn with_metadata(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }
}

/// Facts about one input document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// File path, when the document came from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Detected format name
    pub format: String,
    /// Number of `@graph` nodes
    pub node_count: usize,
    /// xxh3 fingerprint of the raw content, hex encoded
    pub fingerprint: String,
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Left (baseline) document
    pub left: Option<DocumentInfo>,
    /// Right (candidate) document
    pub right: Option<DocumentInfo>,
    /// Targets of a 1:N comparison, keyed by label
    pub targets: Vec<(String, DocumentInfo)>,
}

impl ReportMetadata {
    #[must_use]
    pub fn for_pair(left: DocumentInfo, right: DocumentInfo) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            targets: Vec::new(),
        }
    }

    /// Display label for the left document
    #[must_use]
    pub fn left_label(&self) -> &str {
        label(self.left.as_ref(), "left")
    }

    /// Display label for the right document
    #[must_use]
    pub fn right_label(&self) -> &str {
        label(self.right.as_ref(), "right")
    }
}

fn label<'a>(info: Option<&'a DocumentInfo>, fallback: &'a str) -> &'a str {
    info.and_then(|i| i.file_path.as_deref()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_to_summary() {
        assert_eq!(ReportFormat::Auto.resolve(), ReportFormat::Summary);
        assert_eq!(ReportFormat::Json.resolve(), ReportFormat::Json);
    }

    #[test]
    fn test_format_serde_names() {
        let value = serde_json::to_value(ReportFormat::Changelog).unwrap();
        assert_eq!(value, serde_json::json!("changelog"));
        assert_eq!(ReportFormat::Changelog.to_string(), "changelog");
    }

    #[test]
    fn test_metadata_labels() {
        let metadata = ReportMetadata::for_pair(
            DocumentInfo {
                file_path: Some("v1.jsonld".to_string()),
                ..DocumentInfo::default()
            },
            DocumentInfo::default(),
        );
        assert_eq!(metadata.left_label(), "v1.jsonld");
        assert_eq!(metadata.right_label(), "right");
    }
}
