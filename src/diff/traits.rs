//! Trait definitions for diff computation strategies.
//!
//! Each part of a document (the node graph, the context mapping) has its own
//! change computer. The engine runs them in turn and concatenates their
//! records.

use super::NodeDiff;
use crate::error::Result;
use crate::model::JsonLdDocument;

/// Trait for computing one category of node records between two documents.
pub trait ChangeComputer: Send + Sync {
    /// Compute records for two validated documents.
    ///
    /// Any error aborts the whole comparison; implementors never return a
    /// partial list.
    fn compute(&self, left: &JsonLdDocument<'_>, right: &JsonLdDocument<'_>) -> Result<Vec<NodeDiff>>;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}
