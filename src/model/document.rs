//! Document and graph node views.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Property mapping of a graph node.
pub type NodeProperties = Map<String, Value>;

/// Which input of a comparison a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The baseline (old) document
    Left,
    /// The candidate (new) document
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// One addressable object of a `@graph` sequence.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode<'a> {
    id: &'a str,
    properties: &'a NodeProperties,
}

impl<'a> GraphNode<'a> {
    /// Wrap a node mapping whose `@id` has already been checked.
    #[must_use]
    pub const fn new(id: &'a str, properties: &'a NodeProperties) -> Self {
        Self { id, properties }
    }

    /// The node's `@id`.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        self.id
    }

    /// Every property of the node, `@id` included.
    #[must_use]
    pub const fn properties(&self) -> &'a NodeProperties {
        self.properties
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.properties.get(key)
    }

    /// Number of properties besides `@id`.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties
            .keys()
            .filter(|k| k.as_str() != super::ID_KEY)
            .count()
    }
}

/// A document that passed validation.
///
/// Holds the graph nodes in their serialized order; the order carries no
/// meaning and is discarded as soon as the graph is indexed.
#[derive(Debug, Clone)]
pub struct JsonLdDocument<'a> {
    side: Side,
    nodes: Vec<GraphNode<'a>>,
    context: Option<&'a Value>,
}

impl<'a> JsonLdDocument<'a> {
    pub(crate) const fn new(
        side: Side,
        nodes: Vec<GraphNode<'a>>,
        context: Option<&'a Value>,
    ) -> Self {
        Self {
            side,
            nodes,
            context,
        }
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn nodes(&self) -> &[GraphNode<'a>] {
        &self.nodes
    }

    /// Alias of [`Self::nodes`], named after the `@graph` key.
    #[must_use]
    pub fn graph(&self) -> &[GraphNode<'a>] {
        &self.nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The raw `@context` value. `None` when absent or null.
    #[must_use]
    pub const fn context(&self) -> Option<&'a Value> {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_value(Side::Right).unwrap(), json!("right"));
    }

    #[test]
    fn test_graph_node_accessors() {
        let value = json!({"@id": "#/a", "name": "x", "core:description": "d"});
        let props = value.as_object().unwrap();
        let node = GraphNode::new("#/a", props);

        assert_eq!(node.id(), "#/a");
        assert_eq!(node.get("name"), Some(&json!("x")));
        assert_eq!(node.get("missing"), None);
        assert_eq!(node.property_count(), 2);
    }
}
