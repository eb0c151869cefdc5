//! Unified error types for jsonld-diff.
//!
//! Two families of failure exist. Validation errors describe malformed input
//! documents and name the side that triggered them. Contract violations
//! describe value shapes the differ cannot classify; they abort the
//! comparison immediately and never yield a partial result.

use crate::model::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jsonld-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LdDiffError {
    /// An input document failed validation before comparison began
    #[error("Invalid {side} document: {kind}")]
    Validation {
        side: Side,
        #[source]
        kind: ValidationErrorKind,
    },

    /// A value could not be classified while diffing
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    /// Errors while reading a document into memory
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Which document invariant failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    #[error("document is missing")]
    MissingDocument,

    #[error("document is not a mapping")]
    NotAMapping,

    #[error("document is empty")]
    EmptyDocument,

    #[error("@graph is missing")]
    MissingGraph,

    #[error("@graph is not an array")]
    GraphNotArray,

    #[error("@graph is empty")]
    EmptyGraph,

    #[error("@graph element {index} is not a mapping")]
    NodeNotMapping { index: usize },

    #[error("@graph element {index} has no string @id")]
    MissingNodeId { index: usize },

    #[error("@id '{id}' appears more than once in @graph")]
    DuplicateNodeId { id: String },
}

/// Where an unclassifiable value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractScope {
    Node,
    Property,
    ArrayProperty,
    ReferenceProperty,
}

impl ContractScope {
    /// Human label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Property => "node property",
            Self::ArrayProperty => "node array property",
            Self::ReferenceProperty => "node reference property",
        }
    }
}

/// A value shape the differ refuses to interpret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid difference type for {} {id}{}", .scope.label(), property_suffix(.property))]
pub struct ContractViolation {
    pub scope: ContractScope,
    /// Node identifier being diffed
    pub id: String,
    /// Offending property, absent for node-scope violations
    pub property: Option<String>,
}

fn property_suffix(property: &Option<String>) -> String {
    property
        .as_ref()
        .map(|p| format!(" (property '{p}')"))
        .unwrap_or_default()
}

impl ContractViolation {
    #[must_use]
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            scope: ContractScope::Node,
            id: id.into(),
            property: None,
        }
    }

    #[must_use]
    pub fn property(scope: ContractScope, id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            scope,
            id: id.into(),
            property: Some(key.into()),
        }
    }
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Document is empty")]
    EmptyInput,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for jsonld-diff operations
pub type Result<T> = std::result::Result<T, LdDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LdDiffError {
    /// Create a validation error for one side
    pub const fn validation(side: Side, kind: ValidationErrorKind) -> Self {
        Self::Validation { side, kind }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The side a validation error refers to, if any.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Self::Validation { side, .. } => Some(*side),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for LdDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LdDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so an error raised deep in the parser
/// reads `outer: middle: inner` by the time it reaches the CLI.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LdDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Validation and contract errors carry structured data instead of a
/// free-form context and pass through unchanged.
fn add_context_to_error(err: LdDiffError, new_ctx: &str) -> LdDiffError {
    match err {
        LdDiffError::Parse {
            context: existing,
            source,
        } => LdDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LdDiffError::Io {
            path,
            message,
            source,
        } => LdDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LdDiffError::Config(msg) => LdDiffError::Config(chain_context(new_ctx, &msg)),
        other @ (LdDiffError::Validation { .. } | LdDiffError::Contract(_)) => other,
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a config error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| LdDiffError::Config(context.into()))
    }
}
