//! Diff result structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::CONTEXT_NODE_ID;

/// How a node differs as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeChangeKind {
    /// The node exists only in the right document.
    Added,
    /// The node exists only in the left document.
    Removed,
    /// The node exists on both sides with differing properties.
    Modified,
}

impl NodeChangeKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        }
    }
}

impl std::fmt::Display for NodeChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated differences for one node identity.
///
/// A property key present in both `added` and `removed` was modified; the
/// removed entry holds the old value and the added entry the new one. For
/// array properties each side holds only the elements unique to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDiff {
    /// The node `@id`, or `@context` for the context pseudo-node
    pub id: String,
    pub kind: NodeChangeKind,
    pub added: IndexMap<String, Value>,
    pub removed: IndexMap<String, Value>,
}

impl NodeDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    #[must_use]
    pub fn is_context(&self) -> bool {
        self.id == CONTEXT_NODE_ID
    }

    /// Keys present on both sides of the record.
    pub fn modified_keys(&self) -> impl Iterator<Item = &str> {
        self.added
            .keys()
            .filter(move |k| self.removed.contains_key(k.as_str()))
            .map(String::as_str)
    }

    /// Keys recorded only as additions.
    pub fn added_only_keys(&self) -> impl Iterator<Item = &str> {
        self.added
            .keys()
            .filter(move |k| !self.removed.contains_key(k.as_str()))
            .map(String::as_str)
    }

    /// Keys recorded only as removals.
    pub fn removed_only_keys(&self) -> impl Iterator<Item = &str> {
        self.removed
            .keys()
            .filter(move |k| !self.added.contains_key(k.as_str()))
            .map(String::as_str)
    }
}

/// Complete result of a document comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// One record per differing node, context pseudo-node last
    pub nodes: Vec<NodeDiff>,
}

impl DiffResult {
    /// Wrap node records and compute the summary.
    pub fn from_nodes(nodes: Vec<NodeDiff>) -> Self {
        let mut result = Self {
            summary: DiffSummary::default(),
            nodes,
        };
        result.calculate_summary();
        result
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        let mut summary = DiffSummary {
            total_changes: self.nodes.len(),
            ..DiffSummary::default()
        };

        for node in &self.nodes {
            match node.kind {
                NodeChangeKind::Added => summary.nodes_added += 1,
                NodeChangeKind::Removed => summary.nodes_removed += 1,
                NodeChangeKind::Modified => {
                    summary.nodes_modified += 1;
                    summary.properties_added += node.added_only_keys().count();
                    summary.properties_removed += node.removed_only_keys().count();
                    summary.properties_modified += node.modified_keys().count();
                }
            }
            if node.is_context() {
                summary.context_changed = true;
            }
        }

        self.summary = summary;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Find the record for a node id
    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<&NodeDiff> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Records of one kind
    pub fn nodes_of_kind(&self, kind: NodeChangeKind) -> impl Iterator<Item = &NodeDiff> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeDiff> {
        self.nodes
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Number of node records, context included
    pub total_changes: usize,
    pub nodes_added: usize,
    pub nodes_removed: usize,
    pub nodes_modified: usize,
    /// Property counts cover modified nodes only
    pub properties_added: usize,
    pub properties_removed: usize,
    pub properties_modified: usize,
    pub context_changed: bool,
}
