//! Structured diff engine for JSON-LD graph documents.
//!
//! Two documents are compared node by node. Nodes are matched by `@id`,
//! never by position, so reordering `@graph` or any array property yields no
//! differences. Each differing node produces one [`NodeDiff`] whose `added`
//! and `removed` mappings carry the property values unique to each side.
//!
//! # Architecture
//!
//! - [`validate`]: input checks, run per side before any comparison
//! - [`GraphIndex`]: `@id` keyed lookup over a document's nodes
//! - [`ChangeComputer`](traits::ChangeComputer): one per change source,
//!   see the [`changes`] module
//! - [`PropertyChange`]: the tagged classification of a property difference
//! - [`NodeDiffBuilder`]: per-node accumulation
//!
//! # Example
//!
//! ```
//! use jsonld_diff::diff::DiffEngine;
//! use serde_json::json;
//!
//! let left = json!({"@graph": [{"@id": "#/a", "name": "x"}]});
//! let right = json!({"@graph": [{"@id": "#/a", "name": "y"}]});
//!
//! let result = DiffEngine::new().diff(&left, &right).unwrap();
//! let node = result.find_node("#/a").unwrap();
//! assert_eq!(node.removed["name"], "x");
//! assert_eq!(node.added["name"], "y");
//! ```

mod builder;
pub mod changes;
mod engine;
mod index;
pub mod multi;
mod property;
mod result;
pub mod traits;
pub mod validate;

pub use builder::NodeDiffBuilder;
pub use engine::{find_differences, DiffEngine};
pub use index::GraphIndex;
pub use multi::{ComparisonResult, MultiDiffEngine, MultiDiffResult, MultiDiffSummary};
pub use property::{check_shape, compare_property, DiffType, PropertyChange, PropertyFilter};
pub use result::{DiffResult, DiffSummary, NodeChangeKind, NodeDiff};
pub use traits::ChangeComputer;
pub use validate::{validate_document, validate_pair};
