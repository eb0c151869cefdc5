//! Document format detection.
//!
//! Detection is informational: it feeds logging and report metadata. The
//! diff engine validates documents on its own and never consults it.

use crate::model::{CONTEXT_KEY, GRAPH_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Number of leading bytes scanned for JSON-LD markers.
const SNIFF_WINDOW: usize = 4096;

/// Kind of document found in an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    /// JSON with a top-level `@graph` or `@context`
    JsonLd,
    /// Plain JSON without JSON-LD markers
    Json,
    Unknown,
}

impl DocumentFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JsonLd => "JSON-LD",
            Self::Json => "JSON",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guess the format of raw text without parsing it.
///
/// Only the first few kilobytes are scanned, so a JSON-LD marker placed
/// after a very large leading property is reported as plain JSON.
#[must_use]
pub fn detect_format(content: &str) -> DocumentFormat {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    match trimmed.as_bytes().first() {
        Some(b'{') => {
            let mut end = trimmed.len().min(SNIFF_WINDOW);
            while !trimmed.is_char_boundary(end) {
                end -= 1;
            }
            let head = &trimmed[..end];
            let marker = |key: &str| head.contains(&format!("\"{key}\""));
            if marker(GRAPH_KEY) || marker(CONTEXT_KEY) {
                DocumentFormat::JsonLd
            } else {
                DocumentFormat::Json
            }
        }
        Some(b'[') => DocumentFormat::Json,
        _ => DocumentFormat::Unknown,
    }
}

/// Format of an already parsed value.
#[must_use]
pub fn detect_value_format(value: &Value) -> DocumentFormat {
    match value {
        Value::Object(map) if map.contains_key(GRAPH_KEY) || map.contains_key(CONTEXT_KEY) => {
            DocumentFormat::JsonLd
        }
        Value::Object(_) | Value::Array(_) => DocumentFormat::Json,
        _ => DocumentFormat::Unknown,
    }
}
