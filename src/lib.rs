//! **Structured diffs for JSON-LD API model graphs.**
//!
//! `jsonld-diff` compares two JSON-LD documents produced by the RAML
//! toolkit's resolution pipeline. A document is a `@graph` of nodes, each
//! carrying an `@id`, plus an optional `@context`. Comparing the documents
//! textually reports noise whenever the serializer reorders the graph or an
//! array; this crate compares them by node identity instead.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Borrowed views over `serde_json::Value` documents: graph
//!   nodes, classified property values and element keys.
//! - **[`diff`]**: Home of the [`DiffEngine`]. It validates both inputs, indexes
//!   their graphs by `@id` and emits one [`NodeDiff`] per differing node.
//! - **[`parsers`]**: Reading documents from files or strings with format detection.
//! - **[`reports`]**: JSON, summary and changelog renderings of a [`DiffResult`].
//! - **[`pipeline`]** and **[`cli`]**: The stages behind the `jsonld-diff` binary.
//!
//! ## Getting Started
//!
//! ```
//! use jsonld_diff::{find_differences, NodeChangeKind};
//! use serde_json::json;
//!
//! let left = json!({"@graph": [
//!     {"@id": "#/a", "name": "x"},
//!     {"@id": "#/c", "name": "gone"}
//! ]});
//! let right = json!({"@graph": [
//!     {"@id": "#/b", "name": "new"},
//!     {"@id": "#/a", "name": "y"}
//! ]});
//!
//! let diffs = find_differences(&left, &right).unwrap();
//! let ids: Vec<_> = diffs.iter().map(|d| d.id.as_str()).collect();
//! assert_eq!(ids, vec!["#/a", "#/b", "#/c"]);
//! assert_eq!(diffs[1].kind, NodeChangeKind::Added);
//! ```
//!
//! ### Ignoring properties
//!
//! ```
//! use jsonld_diff::DiffEngine;
//! use serde_json::json;
//!
//! let left = json!({"@graph": [{"@id": "#/a", "name": "x", "sourcemaps": [1]}]});
//! let right = json!({"@graph": [{"@id": "#/a", "name": "x", "sourcemaps": [2]}]});
//!
//! let engine = DiffEngine::new().ignore_property("sourcemaps");
//! assert!(!engine.diff(&left, &right).unwrap().has_changes());
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `jsonld-diff` library crate. The binary of the
//! same name wraps it; run `jsonld-diff --help` for usage.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::unused_self,
    // `old`/`new` and `left`/`right` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, DiffOptions, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, MultiDiffConfig};
pub use diff::{
    find_differences, DiffEngine, DiffResult, DiffSummary, DiffType, MultiDiffEngine, MultiDiffResult,
    NodeChangeKind, NodeDiff, PropertyChange,
};
pub use error::{ContractScope, ContractViolation, ErrorContext, LdDiffError, OptionContext, Result};
pub use model::{GraphNode, JsonLdDocument, PropertyValue, Side};
pub use parsers::{detect_format, parse_document, parse_document_str, DocumentFormat};
pub use reports::{ReportFormat, ReportGenerator};
