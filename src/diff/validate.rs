//! Input validation.
//!
//! Runs once per side before any comparison work. The left document is
//! always checked first, so when both inputs are malformed the error names
//! the left side.

use crate::error::{ContractViolation, LdDiffError, Result, ValidationErrorKind};
use crate::model::{GraphNode, JsonLdDocument, Side, CONTEXT_KEY, CONTEXT_NODE_ID, GRAPH_KEY, ID_KEY};
use serde_json::Value;
use std::collections::HashSet;

/// Check a candidate document and return a typed view over it.
///
/// `Value::Null` stands for a missing document.
pub fn validate_document(side: Side, value: &Value) -> Result<JsonLdDocument<'_>> {
    let fail = |kind| LdDiffError::validation(side, kind);

    let map = match value {
        Value::Null => return Err(fail(ValidationErrorKind::MissingDocument)),
        Value::Object(map) => map,
        _ => return Err(fail(ValidationErrorKind::NotAMapping)),
    };
    if map.is_empty() {
        return Err(fail(ValidationErrorKind::EmptyDocument));
    }

    let graph = match map.get(GRAPH_KEY) {
        None | Some(Value::Null) => return Err(fail(ValidationErrorKind::MissingGraph)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(fail(ValidationErrorKind::GraphNotArray)),
    };
    if graph.is_empty() {
        return Err(fail(ValidationErrorKind::EmptyGraph));
    }

    let mut nodes = Vec::with_capacity(graph.len());
    let mut seen = HashSet::with_capacity(graph.len());
    for (index, item) in graph.iter().enumerate() {
        let Value::Object(properties) = item else {
            return Err(fail(ValidationErrorKind::NodeNotMapping { index }));
        };
        let Some(id) = properties.get(ID_KEY).and_then(Value::as_str) else {
            return Err(fail(ValidationErrorKind::MissingNodeId { index }));
        };
        // The context pseudo-node owns this id in the output.
        if id == CONTEXT_NODE_ID {
            return Err(ContractViolation::node(id).into());
        }
        if !seen.insert(id) {
            return Err(fail(ValidationErrorKind::DuplicateNodeId { id: id.to_string() }));
        }
        nodes.push(GraphNode::new(id, properties));
    }

    let context = map.get(CONTEXT_KEY).filter(|v| !v.is_null());
    Ok(JsonLdDocument::new(side, nodes, context))
}

/// Validate both sides, left first.
pub fn validate_pair<'a>(
    left: &'a Value,
    right: &'a Value,
) -> Result<(JsonLdDocument<'a>, JsonLdDocument<'a>)> {
    let left = validate_document(Side::Left, left)?;
    let right = validate_document(Side::Right, right)?;
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractScope;
    use serde_json::json;

    fn kind_of(result: Result<JsonLdDocument<'_>>) -> (Side, ValidationErrorKind) {
        match result {
            Err(LdDiffError::Validation { side, kind }) => (side, kind),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn valid() -> Value {
        json!({"@graph": [{"@id": "#/a", "name": "x"}], "@context": {"@base": "t.raml"}})
    }

    #[test]
    fn test_valid_document() {
        let value = valid();
        let doc = validate_document(Side::Left, &value).expect("valid document");
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.nodes()[0].id(), "#/a");
        assert_eq!(doc.context(), Some(&json!({"@base": "t.raml"})));
        assert_eq!(doc.side(), Side::Left);
    }

    #[test]
    fn test_missing_document() {
        let (side, kind) = kind_of(validate_document(Side::Left, &Value::Null));
        assert_eq!(side, Side::Left);
        assert_eq!(kind, ValidationErrorKind::MissingDocument);
    }

    #[test]
    fn test_not_a_mapping() {
        let value = json!([1, 2]);
        let (_, kind) = kind_of(validate_document(Side::Right, &value));
        assert_eq!(kind, ValidationErrorKind::NotAMapping);
    }

    #[test]
    fn test_empty_document() {
        let value = json!({});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::EmptyDocument);
    }

    #[test]
    fn test_graph_missing_or_null() {
        let value = json!({"@context": {}});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::MissingGraph);

        let value = json!({"@graph": null});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::MissingGraph);
    }

    #[test]
    fn test_graph_not_array() {
        let value = json!({"@graph": {"@id": "#/a"}});
        let (_, kind) = kind_of(validate_document(Side::Right, &value));
        assert_eq!(kind, ValidationErrorKind::GraphNotArray);
    }

    #[test]
    fn test_graph_empty() {
        let value = json!({"@graph": []});
        let (_, kind) = kind_of(validate_document(Side::Right, &value));
        assert_eq!(kind, ValidationErrorKind::EmptyGraph);
    }

    #[test]
    fn test_node_shape_errors() {
        let value = json!({"@graph": [{"@id": "#/a"}, "oops"]});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::NodeNotMapping { index: 1 });

        let value = json!({"@graph": [{"name": "x"}]});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::MissingNodeId { index: 0 });

        let value = json!({"@graph": [{"@id": 3}]});
        let (_, kind) = kind_of(validate_document(Side::Left, &value));
        assert_eq!(kind, ValidationErrorKind::MissingNodeId { index: 0 });
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let value = json!({"@graph": [{"@id": "#/a"}, {"@id": "#/b"}, {"@id": "#/a", "name": "y"}]});
        let (side, kind) = kind_of(validate_document(Side::Right, &value));
        assert_eq!(side, Side::Right);
        assert_eq!(
            kind,
            ValidationErrorKind::DuplicateNodeId {
                id: "#/a".to_string()
            }
        );
    }

    #[test]
    fn test_reserved_context_id() {
        let value = json!({"@graph": [{"@id": "@context"}]});
        match validate_document(Side::Left, &value) {
            Err(LdDiffError::Contract(violation)) => {
                assert_eq!(violation.scope, ContractScope::Node);
            }
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn test_null_context_is_absent() {
        let value = json!({"@graph": [{"@id": "#/a"}], "@context": null});
        let doc = validate_document(Side::Left, &value).unwrap();
        assert!(doc.context().is_none());
    }

    #[test]
    fn test_pair_checks_left_first() {
        let bad = json!({});
        match validate_pair(&bad, &bad) {
            Err(err) => assert_eq!(err.side(), Some(Side::Left)),
            Ok(_) => panic!("expected failure"),
        }

        let good = valid();
        match validate_pair(&good, &Value::Null) {
            Err(err) => assert_eq!(err.side(), Some(Side::Right)),
            Ok(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_duplicate_left_reported_before_missing_right() {
        let duplicated = json!({"@graph": [{"@id": "#/a"}, {"@id": "#/a"}]});
        match validate_pair(&duplicated, &Value::Null) {
            Err(LdDiffError::Validation { side, kind }) => {
                assert_eq!(side, Side::Left);
                assert!(matches!(kind, ValidationErrorKind::DuplicateNodeId { .. }));
            }
            other => panic!("expected left duplicate id error, got {other:?}"),
        }
    }
}
