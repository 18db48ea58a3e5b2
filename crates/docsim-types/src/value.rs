//! The document value model: a closed union over JSON shapes plus an
//! `Absent` sentinel for positions missing on one side of a comparison.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Number;

/// A parsed document tree.
///
/// Objects use a `BTreeMap` so key iteration is deterministic. `Absent` never
/// results from parsing; the comparator substitutes it for an array index
/// beyond the shorter array's length or an object key missing from one side.
/// Values are immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub enum DocValue {
    /// Mapping from string keys to child values (key order irrelevant).
    Object(BTreeMap<String, DocValue>),
    /// Ordered sequence of child values.
    Array(Vec<DocValue>),
    /// UTF-8 string leaf.
    String(String),
    /// Numeric leaf, integer or floating-point.
    Number(Number),
    /// Boolean leaf.
    Bool(bool),
    /// Explicit null leaf.
    Null,
    /// Position present in one tree but missing from the other.
    Absent,
}

impl DocValue {
    /// Returns `true` for scalars, nulls, and the absent sentinel.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, DocValue::Object(_) | DocValue::Array(_))
    }
}

impl From<serde_json::Value> for DocValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DocValue::Null,
            serde_json::Value::Bool(b) => DocValue::Bool(b),
            serde_json::Value::Number(n) => DocValue::Number(n),
            serde_json::Value::String(s) => DocValue::String(s),
            serde_json::Value::Array(items) => {
                DocValue::Array(items.into_iter().map(DocValue::from).collect())
            }
            serde_json::Value::Object(entries) => DocValue::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key, DocValue::from(child)))
                    .collect(),
            ),
        }
    }
}

/// Canonical textual rendering, used both for fuzzy scoring and for
/// difference messages.
///
/// Strings render as-is (unquoted), numbers use their JSON text, booleans
/// render `true`/`false`, null renders `null`, and the absent sentinel
/// renders as the fixed placeholder `<absent>`. Containers render as
/// bracketed/braced listings of their children. Rendering is total.
impl fmt::Display for DocValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocValue::String(s) => f.write_str(s),
            DocValue::Number(n) => write!(f, "{n}"),
            DocValue::Bool(b) => write!(f, "{b}"),
            DocValue::Null => f.write_str("null"),
            DocValue::Absent => f.write_str("<absent>"),
            DocValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            DocValue::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, child)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {child}")?;
                }
                f.write_str("}")
            }
        }
    }
}
