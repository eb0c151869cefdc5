//! Diff engine implementation.

use super::changes::{ContextChangeComputer, GraphChangeComputer};
use super::property::PropertyFilter;
use super::traits::ChangeComputer;
use super::validate::validate_pair;
use super::{DiffResult, NodeDiff};
use crate::error::Result;
use serde_json::Value;

/// Structured diff engine for JSON-LD documents.
///
/// The engine holds options only. Every call to [`DiffEngine::diff`] is
/// independent, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    include_context: bool,
    filter: PropertyFilter,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_context: true,
            filter: PropertyFilter::new(),
        }
    }

    /// Compare `@context` as an extra pseudo-node (on by default)
    #[must_use]
    pub const fn include_context(mut self, include: bool) -> Self {
        self.include_context = include;
        self
    }

    /// Skip a property key in every graph node.
    ///
    /// `@id` is the node identity and is never skipped. The filter does not
    /// apply to `@context` entries.
    #[must_use]
    pub fn ignore_property(mut self, key: impl Into<String>) -> Self {
        self.filter.ignore(key);
        self
    }

    /// Skip several property keys, see [`Self::ignore_property`]
    #[must_use]
    pub fn with_ignored_properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.filter.ignore(key);
        }
        self
    }

    #[must_use]
    pub const fn context_included(&self) -> bool {
        self.include_context
    }

    #[must_use]
    pub const fn property_filter(&self) -> &PropertyFilter {
        &self.filter
    }

    /// Compare two documents and return the diff result.
    ///
    /// Both documents are validated before any comparison, left first. The
    /// first error aborts the whole comparison.
    pub fn diff(&self, left: &Value, right: &Value) -> Result<DiffResult> {
        let (left, right) = validate_pair(left, right)?;

        let graph = GraphChangeComputer::new(&self.filter);
        let mut nodes = graph.compute(&left, &right)?;

        if self.include_context {
            let context = ContextChangeComputer::new();
            nodes.extend(context.compute(&left, &right)?);
        }

        let result = DiffResult::from_nodes(nodes);
        tracing::debug!(
            records = result.summary.total_changes,
            added = result.summary.nodes_added,
            removed = result.summary.nodes_removed,
            modified = result.summary.nodes_modified,
            "diff complete"
        );
        Ok(result)
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two documents with default options.
///
/// Returns one record per differing node. Callers should treat the sequence
/// as a set keyed by node id.
pub fn find_differences(left: &Value, right: &Value) -> Result<Vec<NodeDiff>> {
    DiffEngine::new().diff(left, right).map(DiffResult::into_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::NodeChangeKind;
    use crate::error::{LdDiffError, ValidationErrorKind};
    use crate::model::Side;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "@graph": [
                {"@id": "#/a", "name": "x"},
                {"@id": "#/b", "endpoint": [{"@id": "#/e1"}, {"@id": "#/e2"}]}
            ],
            "@context": {"@base": "t.raml"}
        })
    }

    #[test]
    fn test_identical_documents() {
        let doc = sample();
        assert!(find_differences(&doc, &doc).unwrap().is_empty());
    }

    #[test]
    fn test_reordered_graph_is_identical() {
        let left = sample();
        let mut right = sample();
        right["@graph"].as_array_mut().unwrap().reverse();
        right["@graph"][0]["endpoint"].as_array_mut().unwrap().reverse();
        assert!(find_differences(&left, &right).unwrap().is_empty());
    }

    #[test]
    fn test_modified_scalar() {
        let left = json!({"@graph": [{"@id": "#/a", "name": "x"}]});
        let right = json!({"@graph": [{"@id": "#/a", "name": "y"}]});
        let diffs = find_differences(&left, &right).unwrap();

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].id, "#/a");
        assert_eq!(diffs[0].kind, NodeChangeKind::Modified);
        assert_eq!(diffs[0].removed["name"], json!("x"));
        assert_eq!(diffs[0].added["name"], json!("y"));
    }

    #[test]
    fn test_added_node_carries_full_content() {
        let left = json!({"@graph": [{"@id": "#/a"}]});
        let right = json!({"@graph": [{"@id": "#/a"}, {"@id": "#/b", "name": "b"}]});
        let diffs = find_differences(&left, &right).unwrap();

        assert_eq!(diffs.len(), 1);
        let node = &diffs[0];
        assert_eq!(node.id, "#/b");
        assert!(node.removed.is_empty());
        assert_eq!(node.added["@id"], json!("#/b"));
        assert_eq!(node.added["name"], json!("b"));
    }

    #[test]
    fn test_context_last() {
        let left = json!({"@graph": [{"@id": "#/z", "n": 1}], "@context": {"@base": "a"}});
        let right = json!({"@graph": [{"@id": "#/z", "n": 2}], "@context": {"@base": "b"}});
        let diffs = find_differences(&left, &right).unwrap();
        let ids: Vec<&str> = diffs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["#/z", "@context"]);
    }

    #[test]
    fn test_context_excluded() {
        let left = json!({"@graph": [{"@id": "#/a"}], "@context": {"@base": "a"}});
        let right = json!({"@graph": [{"@id": "#/a"}], "@context": {"@base": "b"}});
        let result = DiffEngine::new().include_context(false).diff(&left, &right).unwrap();
        assert!(!result.has_changes());
        assert!(!DiffEngine::new().include_context(false).context_included());
    }

    #[test]
    fn test_ignored_properties() {
        let left = json!({"@graph": [{"@id": "#/a", "name": "x", "lexical": "1"}]});
        let right = json!({"@graph": [{"@id": "#/a", "name": "x", "lexical": "2"}]});
        let engine = DiffEngine::new().with_ignored_properties(["lexical", "@id"]);
        assert!(!engine.diff(&left, &right).unwrap().has_changes());
        assert!(!engine.property_filter().is_ignored("@id"));
    }

    #[test]
    fn test_validation_names_side() {
        let valid = sample();
        match find_differences(&Value::Null, &valid) {
            Err(err) => {
                assert_eq!(err.side(), Some(Side::Left));
                assert!(err.to_string().contains("left"));
            }
            Ok(_) => panic!("expected left failure"),
        }
        match find_differences(&valid, &Value::Null) {
            Err(err) => assert!(err.to_string().contains("right")),
            Ok(_) => panic!("expected right failure"),
        }
        match find_differences(&valid, &json!({"@graph": "nope"})) {
            Err(LdDiffError::Validation { kind, .. }) => {
                assert_eq!(kind, ValidationErrorKind::GraphNotArray);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_engine_is_reusable() {
        let engine = DiffEngine::default();
        let left = sample();
        let right = json!({"@graph": [{"@id": "#/a", "name": "x"}]});
        let first = engine.diff(&left, &right).unwrap();
        let second = engine.diff(&left, &right).unwrap();
        assert_eq!(first.nodes, second.nodes);
    }
}
