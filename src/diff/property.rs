//! Property-level differ.
//!
//! Compares one property of two nodes that share an `@id` and produces a
//! [`PropertyChange`]. The variant is decided here, from the classified
//! shapes of both values, and never re-inferred from the recorded payload.

use crate::error::{ContractScope, ContractViolation, LdDiffError, Result};
use crate::model::{ElementKey, PropertyValue, ReferenceShapeError, ID_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// Classification of a single property difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    Added,
    Removed,
    Modified,
    ReferenceChanged,
}

/// A difference for one property of one node.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyChange {
    /// Present only on the right.
    Added(Value),
    /// Present only on the left.
    Removed(Value),
    /// Present on both sides with different values or shapes.
    Modified { old: Value, new: Value },
    /// Both sides are references and point at different nodes.
    ReferenceChanged { old: Value, new: Value },
    /// Both sides are arrays; holds only the elements unique to each side.
    /// At least one of the two is non-empty.
    ArrayChanged {
        added: Vec<Value>,
        removed: Vec<Value>,
    },
}

impl PropertyChange {
    #[must_use]
    pub fn diff_type(&self) -> DiffType {
        match self {
            Self::Added(_) => DiffType::Added,
            Self::Removed(_) => DiffType::Removed,
            Self::Modified { .. } => DiffType::Modified,
            Self::ReferenceChanged { .. } => DiffType::ReferenceChanged,
            Self::ArrayChanged { added, removed } => match (added.is_empty(), removed.is_empty()) {
                (false, true) => DiffType::Added,
                (true, false) => DiffType::Removed,
                _ => DiffType::Modified,
            },
        }
    }
}

/// Property keys excluded from comparison.
///
/// `@id` is never excluded: it is the node identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    ignored: BTreeSet<String>,
}

impl PropertyFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key != ID_KEY {
            self.ignored.insert(key);
        }
    }

    #[must_use]
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored.contains(key)
    }

    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}

/// Classify a value held directly by a property.
fn classify<'v>(id: &str, key: &str, value: &'v Value) -> Result<PropertyValue<'v>> {
    PropertyValue::classify(value).map_err(|err| {
        let scope = match err {
            ReferenceShapeError::ExtraKeys => ContractScope::ReferenceProperty,
            ReferenceShapeError::NonStringId => ContractScope::Property,
        };
        LdDiffError::from(ContractViolation::property(scope, id, key))
    })
}

/// Key every element of an array property.
fn element_keys<'v>(id: &str, key: &str, items: &'v [Value]) -> Result<Vec<(ElementKey, &'v Value)>> {
    items
        .iter()
        .map(|item| {
            ElementKey::of(item)
                .map(|k| (k, item))
                .map_err(|_| {
                    LdDiffError::from(ContractViolation::property(
                        ContractScope::ArrayProperty,
                        id,
                        key,
                    ))
                })
        })
        .collect()
}

/// Check that a value is classifiable, descending into arrays.
///
/// Used for properties of nodes that exist on one side only, so a malformed
/// reference fails the same way whether or not its node is shared.
pub fn check_shape(id: &str, key: &str, value: &Value) -> Result<()> {
    if let PropertyValue::Array(items) = classify(id, key, value)? {
        element_keys(id, key, items)?;
    }
    Ok(())
}

/// Compare one property of a shared node.
///
/// Returns `None` when both sides agree.
pub fn compare_property(
    id: &str,
    key: &str,
    left: Option<&Value>,
    right: Option<&Value>,
) -> Result<Option<PropertyChange>> {
    match (left, right) {
        (None, None) => Ok(None),
        (None, Some(new)) => {
            check_shape(id, key, new)?;
            Ok(Some(PropertyChange::Added(new.clone())))
        }
        (Some(old), None) => {
            check_shape(id, key, old)?;
            Ok(Some(PropertyChange::Removed(old.clone())))
        }
        (Some(old), Some(new)) => compare_present(id, key, old, new),
    }
}

fn compare_present(id: &str, key: &str, old: &Value, new: &Value) -> Result<Option<PropertyChange>> {
    let change = match (classify(id, key, old)?, classify(id, key, new)?) {
        (PropertyValue::Reference(a), PropertyValue::Reference(b)) => {
            (a != b).then(|| PropertyChange::ReferenceChanged {
                old: old.clone(),
                new: new.clone(),
            })
        }
        (PropertyValue::Array(a), PropertyValue::Array(b)) => diff_arrays(id, key, a, b)?,
        (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => {
            (a != b).then(|| PropertyChange::Modified {
                old: old.clone(),
                new: new.clone(),
            })
        }
        // Shape changed, e.g. a scalar became an array.
        _ => {
            if let PropertyValue::Array(items) = classify(id, key, old)? {
                element_keys(id, key, items)?;
            }
            if let PropertyValue::Array(items) = classify(id, key, new)? {
                element_keys(id, key, items)?;
            }
            Some(PropertyChange::Modified {
                old: old.clone(),
                new: new.clone(),
            })
        }
    };
    Ok(change)
}

/// Set difference of two arrays, keyed by element identity.
///
/// Duplicates collapse to one element. Each output list keeps the order of
/// the side it was taken from.
fn diff_arrays(id: &str, key: &str, old: &[Value], new: &[Value]) -> Result<Option<PropertyChange>> {
    let old_keyed = element_keys(id, key, old)?;
    let new_keyed = element_keys(id, key, new)?;

    let old_set: HashSet<&ElementKey> = old_keyed.iter().map(|(k, _)| k).collect();
    let new_set: HashSet<&ElementKey> = new_keyed.iter().map(|(k, _)| k).collect();

    let added = unique_missing(&new_keyed, &old_set);
    let removed = unique_missing(&old_keyed, &new_set);

    if added.is_empty() && removed.is_empty() {
        return Ok(None);
    }
    Ok(Some(PropertyChange::ArrayChanged { added, removed }))
}

fn unique_missing(items: &[(ElementKey, &Value)], other: &HashSet<&ElementKey>) -> Vec<Value> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|(k, _)| !other.contains(k) && seen.insert(k))
        .map(|(_, v)| (*v).clone())
        .collect()
}
