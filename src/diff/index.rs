//! Identity index over graph nodes.

use crate::model::{GraphNode, JsonLdDocument};
use std::collections::HashMap;

/// Graph nodes keyed by `@id`.
///
/// Building the index is the point where serialization order is dropped;
/// every later lookup goes through identity.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex<'a> {
    nodes: HashMap<&'a str, GraphNode<'a>>,
}

impl<'a> GraphIndex<'a> {
    /// Index a validated document. Ids are already known to be unique.
    #[must_use]
    pub fn build(document: &JsonLdDocument<'a>) -> Self {
        let nodes = document
            .nodes()
            .iter()
            .map(|node| (node.id(), *node))
            .collect();
        Self { nodes }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GraphNode<'a>> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.nodes.keys().copied()
    }
}
