//! Document acquisition.
//!
//! Inputs are JSON-LD serializations produced by an external model parser.
//! This module only reads them into `serde_json::Value` trees; shape checks
//! belong to [`crate::diff::validate`].
//!
//! ## Usage
//!
//! ```no_run
//! use jsonld_diff::parsers::{detect_format, parse_document};
//! use std::path::Path;
//!
//! let document = parse_document(Path::new("api.jsonld")).unwrap();
//!
//! let content = std::fs::read_to_string("api.jsonld").unwrap();
//! println!("Detected: {}", detect_format(&content));
//! ```

mod detection;

pub use detection::{detect_format, detect_value_format, DocumentFormat};

use crate::error::{ErrorContext, LdDiffError, ParseErrorKind, Result};
use serde_json::Value;
use std::path::Path;

/// Maximum document file size (512 MB).
const MAX_DOCUMENT_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Read and parse a document file.
///
/// Returns an error if the file exceeds [`MAX_DOCUMENT_FILE_SIZE`].
pub fn parse_document(path: &Path) -> Result<Value> {
    let metadata = std::fs::metadata(path).map_err(|e| LdDiffError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(LdDiffError::parse(
            path.display().to_string(),
            ParseErrorKind::InvalidJson(format!(
                "document is {} MB, exceeding the {} MB limit",
                metadata.len() / (1024 * 1024),
                MAX_DOCUMENT_FILE_SIZE / (1024 * 1024),
            )),
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| LdDiffError::io(path, e))?;
    parse_document_str(&content).with_context(|| path.display().to_string())
}

/// Parse a document from text.
pub fn parse_document_str(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Err(LdDiffError::parse("input", ParseErrorKind::EmptyInput));
    }
    serde_json::from_str(content)
        .map_err(|e| LdDiffError::parse("input", ParseErrorKind::InvalidJson(e.to_string())))
}
