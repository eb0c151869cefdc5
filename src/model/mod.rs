//! Borrowed views over JSON-LD documents.
//!
//! The diff engine never owns or rewrites its inputs. Documents stay as
//! `serde_json::Value` trees and this module provides typed views over them:
//! [`JsonLdDocument`] for a validated document, [`GraphNode`] for one entry
//! of `@graph`, and [`PropertyValue`] for the shape of a single property.

mod document;
mod value;

pub use document::*;
pub use value::*;

/// Key holding the node sequence of a document.
pub const GRAPH_KEY: &str = "@graph";
/// Key holding the vocabulary mapping of a document.
pub const CONTEXT_KEY: &str = "@context";
/// Key holding a node's identifier, and the only key of a reference.
pub const ID_KEY: &str = "@id";
/// Identifier reported for differences in `@context`.
pub const CONTEXT_NODE_ID: &str = "@context";
