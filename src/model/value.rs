//! Property value classification.
//!
//! A graph node property holds one of three shapes: a plain value, a
//! reference to another node (`{"@id": "..."}`), or an array of either.
//! Anything that looks like a reference but is not exactly one is rejected
//! here, before the differ ever compares it.

use super::ID_KEY;
use serde_json::Value;
use std::fmt::Write as _;

/// Why a value could not be read as a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceShapeError {
    /// The mapping carries `@id` plus other keys.
    ExtraKeys,
    /// The `@id` entry is not a string.
    NonStringId,
}

/// The shape of one property value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// Any value that is neither a reference nor an array. Compared by
    /// strict structural equality.
    Scalar(&'a Value),
    /// A pointer to another node, compared by target id only.
    Reference(&'a str),
    /// A sequence compared as an unordered set.
    Array(&'a [Value]),
}

impl<'a> PropertyValue<'a> {
    /// Classify a property value.
    pub fn classify(value: &'a Value) -> Result<Self, ReferenceShapeError> {
        match value {
            Value::Array(items) => Ok(Self::Array(items)),
            other => Ok(reference_target(other)?.map_or(Self::Scalar(other), Self::Reference)),
        }
    }
}

/// Read the target of a reference-shaped value.
///
/// Returns `Ok(None)` for values that carry no `@id` at all.
pub fn reference_target(value: &Value) -> Result<Option<&str>, ReferenceShapeError> {
    let Value::Object(map) = value else {
        return Ok(None);
    };
    let Some(id) = map.get(ID_KEY) else {
        return Ok(None);
    };
    if map.len() != 1 {
        return Err(ReferenceShapeError::ExtraKeys);
    }
    id.as_str().map(Some).ok_or(ReferenceShapeError::NonStringId)
}

/// Identity of an array element for set comparison.
///
/// References are keyed by target id, so two references to the same node
/// are one element. Every other value is keyed by its canonical JSON text,
/// which keeps `"1"` and `1` apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKey {
    Reference(String),
    Value(String),
}

impl ElementKey {
    pub fn of(value: &Value) -> Result<Self, ReferenceShapeError> {
        match reference_target(value)? {
            Some(id) => Ok(Self::Reference(id.to_string())),
            None => Ok(Self::Value(canonical_json(value))),
        }
    }
}

/// Compact JSON text with object keys in sorted order.
#[must_use]
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let _ = write!(out, "{}:", Value::String(key.clone()));
                write_canonical(item, out);
            }
            out.push('}');
        }
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}
