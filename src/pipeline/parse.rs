//! Document parsing stage.

use super::PipelineError;
use crate::error::LdDiffError;
use crate::model::GRAPH_KEY;
use crate::parsers::{detect_value_format, parse_document_str, DocumentFormat};
use crate::reports::DocumentInfo;
use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// A parsed input document
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The document tree
    pub document: Value,
    /// xxh3 hash of the raw file content
    pub fingerprint: u64,
    /// Number of `@graph` entries, zero when `@graph` is not an array
    pub node_count: usize,
    pub format: DocumentFormat,
    pub path: PathBuf,
}

impl ParsedDocument {
    /// Build from raw content already read from `path`.
    pub fn from_content(path: &Path, content: &str) -> crate::error::Result<Self> {
        let document = parse_document_str(content)?;
        let node_count = document
            .get(GRAPH_KEY)
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        Ok(Self {
            format: detect_value_format(&document),
            fingerprint: xxh3_64(content.as_bytes()),
            node_count,
            document,
            path: path.to_path_buf(),
        })
    }

    /// Hex rendering of [`Self::fingerprint`]
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        format!("{:016x}", self.fingerprint)
    }

    /// Report metadata for this document
    #[must_use]
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            file_path: Some(self.path.display().to_string()),
            format: self.format.to_string(),
            node_count: self.node_count,
            fingerprint: self.fingerprint_hex(),
        }
    }
}

/// Parse a document with context for error messages
pub fn parse_document_with_context(path: &Path, quiet: bool) -> Result<ParsedDocument> {
    if !quiet {
        tracing::info!("Parsing document: {}", path.display());
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| LdDiffError::io(path, e))
        .and_then(|content| ParsedDocument::from_content(path, &content))
        .map_err(|source| PipelineError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;

    if parsed.format != DocumentFormat::JsonLd {
        tracing::warn!("{} does not look like JSON-LD ({})", path.display(), parsed.format);
    }
    tracing::debug!(
        nodes = parsed.node_count,
        fingerprint = %parsed.fingerprint_hex(),
        "parsed {}",
        path.display()
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_context() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("api.jsonld");
        std::fs::write(&path, r##"{"@graph": [{"@id": "#/a"}, {"@id": "#/b"}]}"##).unwrap();

        let parsed = parse_document_with_context(&path, true).unwrap();
        assert_eq!(parsed.node_count, 2);
        assert_eq!(parsed.format, DocumentFormat::JsonLd);
        assert_eq!(parsed.fingerprint_hex().len(), 16);

        let info = parsed.info();
        assert_eq!(info.node_count, 2);
        assert!(info.file_path.unwrap().ends_with("api.jsonld"));
    }

    #[test]
    fn test_same_content_same_fingerprint() {
        let a = ParsedDocument::from_content(Path::new("a"), r#"{"@graph": []}"#).unwrap();
        let b = ParsedDocument::from_content(Path::new("b"), r#"{"@graph": []}"#).unwrap();
        let c = ParsedDocument::from_content(Path::new("c"), r#"{"@graph": [1]}"#).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
    }

    #[test]
    fn test_parse_failure_names_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.jsonld");
        std::fs::write(&path, "{").unwrap();

        let err = parse_document_with_context(&path, true).unwrap_err();
        assert!(err.to_string().contains("broken.jsonld"));
        assert!(err.downcast_ref::<PipelineError>().is_some());
    }
}
