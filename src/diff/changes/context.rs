//! Context change computer.

use crate::diff::builder::NodeDiffBuilder;
use crate::diff::traits::ChangeComputer;
use crate::diff::{NodeChangeKind, NodeDiff};
use crate::error::Result;
use crate::model::{JsonLdDocument, CONTEXT_KEY, CONTEXT_NODE_ID};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Compares the `@context` of two documents as a single flat mapping.
///
/// Entries are compared by plain equality: term definitions such as
/// `{"@id": "...", "@type": "@id"}` are values here, not references. A
/// context that is not a mapping (a URL or an array) is compared as one
/// entry named `@context`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextChangeComputer;

impl ContextChangeComputer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn entries(context: Option<&Value>) -> BTreeMap<&str, &Value> {
    match context {
        None => BTreeMap::new(),
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        Some(other) => BTreeMap::from([(CONTEXT_KEY, other)]),
    }
}

impl ChangeComputer for ContextChangeComputer {
    fn compute(&self, left: &JsonLdDocument<'_>, right: &JsonLdDocument<'_>) -> Result<Vec<NodeDiff>> {
        let kind = match (left.context(), right.context()) {
            (None, None) => return Ok(Vec::new()),
            (None, Some(_)) => NodeChangeKind::Added,
            (Some(_), None) => NodeChangeKind::Removed,
            (Some(_), Some(_)) => NodeChangeKind::Modified,
        };

        let old = entries(left.context());
        let new = entries(right.context());
        let keys: BTreeSet<&str> = old.keys().chain(new.keys()).copied().collect();

        let mut builder = NodeDiffBuilder::new(CONTEXT_NODE_ID, kind);
        for key in keys {
            match (old.get(key), new.get(key)) {
                (None, Some(value)) => builder.add_value(key, (*value).clone()),
                (Some(value), None) => builder.remove_value(key, (*value).clone()),
                (Some(a), Some(b)) if a != b => {
                    builder.remove_value(key, (*a).clone());
                    builder.add_value(key, (*b).clone());
                }
                _ => {}
            }
        }

        Ok(builder.build().into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "ContextChangeComputer"
    }
}
