//! Graph node change computer.

use crate::diff::builder::NodeDiffBuilder;
use crate::diff::index::GraphIndex;
use crate::diff::property::{check_shape, compare_property, PropertyFilter};
use crate::diff::traits::ChangeComputer;
use crate::diff::{NodeChangeKind, NodeDiff};
use crate::error::Result;
use crate::model::{GraphNode, JsonLdDocument, Side};
use std::collections::BTreeSet;

/// Computes per-node records for the `@graph` sequences of two documents.
///
/// Nodes are matched by `@id` only. Records come out sorted by id.
pub struct GraphChangeComputer<'f> {
    filter: &'f PropertyFilter,
}

impl<'f> GraphChangeComputer<'f> {
    #[must_use]
    pub const fn new(filter: &'f PropertyFilter) -> Self {
        Self { filter }
    }

    /// Record every property of a node that exists on one side only.
    ///
    /// A node found only on the left was removed, one found only on the
    /// right was added.
    fn whole_node(&self, node: &GraphNode<'_>, side: Side) -> Result<Option<NodeDiff>> {
        let kind = match side {
            Side::Left => NodeChangeKind::Removed,
            Side::Right => NodeChangeKind::Added,
        };
        let mut builder = NodeDiffBuilder::new(node.id(), kind);
        for (key, value) in node.properties() {
            if self.filter.is_ignored(key) {
                continue;
            }
            check_shape(node.id(), key, value)?;
            match side {
                Side::Left => builder.remove_value(key, value.clone()),
                Side::Right => builder.add_value(key, value.clone()),
            }
        }
        Ok(builder.build())
    }

    /// Compare every property of a node present on both sides.
    fn shared_node(&self, left: &GraphNode<'_>, right: &GraphNode<'_>) -> Result<Option<NodeDiff>> {
        let id = left.id();
        let keys: BTreeSet<&str> = left
            .properties()
            .keys()
            .chain(right.properties().keys())
            .map(String::as_str)
            .filter(|key| !self.filter.is_ignored(key))
            .collect();

        let mut builder = NodeDiffBuilder::modified(id);
        for key in keys {
            if let Some(change) = compare_property(id, key, left.get(key), right.get(key))? {
                tracing::trace!(node = id, property = key, kind = ?change.diff_type(), "property differs");
                builder.record(key, change);
            }
        }
        Ok(builder.build())
    }
}

impl ChangeComputer for GraphChangeComputer<'_> {
    fn compute(&self, left: &JsonLdDocument<'_>, right: &JsonLdDocument<'_>) -> Result<Vec<NodeDiff>> {
        let left_index = GraphIndex::build(left);
        let right_index = GraphIndex::build(right);

        let ids: BTreeSet<&str> = left_index.ids().chain(right_index.ids()).collect();
        let mut records = Vec::new();

        for id in ids {
            let record = match (left_index.get(id), right_index.get(id)) {
                (None, Some(node)) => self.whole_node(node, Side::Right)?,
                (Some(node), None) => self.whole_node(node, Side::Left)?,
                (Some(old), Some(new)) => self.shared_node(old, new)?,
                (None, None) => None,
            };
            records.extend(record);
        }

        tracing::debug!(
            left_nodes = left_index.len(),
            right_nodes = right_index.len(),
            records = records.len(),
            "graph nodes compared"
        );
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "GraphChangeComputer"
    }
}
