//! Per-node accumulation of property changes.

use super::property::PropertyChange;
use super::result::{NodeChangeKind, NodeDiff};
use indexmap::IndexMap;
use serde_json::Value;

/// Collects the changes of one node identity.
///
/// Created when comparison of a node starts and turned into a [`NodeDiff`]
/// only if something was recorded.
#[derive(Debug, Clone)]
pub struct NodeDiffBuilder {
    id: String,
    kind: NodeChangeKind,
    added: IndexMap<String, Value>,
    removed: IndexMap<String, Value>,
}

impl NodeDiffBuilder {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: NodeChangeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            added: IndexMap::new(),
            removed: IndexMap::new(),
        }
    }

    /// Builder for a node present on both sides.
    #[must_use]
    pub fn modified(id: impl Into<String>) -> Self {
        Self::new(id, NodeChangeKind::Modified)
    }

    /// Record one property change.
    pub fn record(&mut self, key: &str, change: PropertyChange) {
        match change {
            PropertyChange::Added(value) => {
                self.added.insert(key.to_string(), value);
            }
            PropertyChange::Removed(value) => {
                self.removed.insert(key.to_string(), value);
            }
            PropertyChange::Modified { old, new } | PropertyChange::ReferenceChanged { old, new } => {
                self.removed.insert(key.to_string(), old);
                self.added.insert(key.to_string(), new);
            }
            PropertyChange::ArrayChanged { added, removed } => {
                if !added.is_empty() {
                    self.added.insert(key.to_string(), Value::Array(added));
                }
                if !removed.is_empty() {
                    self.removed.insert(key.to_string(), Value::Array(removed));
                }
            }
        }
    }

    /// Record a whole value as added without classifying it.
    pub fn add_value(&mut self, key: &str, value: Value) {
        self.added.insert(key.to_string(), value);
    }

    /// Record a whole value as removed without classifying it.
    pub fn remove_value(&mut self, key: &str, value: Value) {
        self.removed.insert(key.to_string(), value);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Finish the node. Empty builders produce nothing.
    #[must_use]
    pub fn build(self) -> Option<NodeDiff> {
        if self.is_empty() {
            return None;
        }
        Some(NodeDiff {
            id: self.id,
            kind: self.kind,
            added: self.added,
            removed: self.removed,
        })
    }
}
