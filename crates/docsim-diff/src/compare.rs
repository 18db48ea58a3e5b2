//! Tree comparator: lockstep walk of two documents collecting leaf-level
//! differences.
//!
//! Traversal is directed by the shape of the first document. Positions
//! missing on the second side substitute [`DocValue::Absent`] rather than
//! faulting, so the comparison always runs to completion.

use std::fmt;

use docsim_types::{DocValue, KeyPath};
use tracing::warn;

use crate::error::{DiffError, DiffResult};
use crate::matcher;

static ABSENT: DocValue = DocValue::Absent;

/// The result of comparing two documents.
///
/// Each scalar leaf contributes at most one difference, so the difference
/// count is the length of the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Leaf-level differences, in traversal order.
    pub differences: Vec<Difference>,
}

impl Comparison {
    /// Create an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if every compared leaf matched.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of non-matching leaves.
    pub fn difference_count(&self) -> usize {
        self.differences.len()
    }

    /// Difference descriptions, in traversal order.
    pub fn descriptions(&self) -> Vec<String> {
        self.differences.iter().map(ToString::to_string).collect()
    }

    fn absorb(&mut self, child: Comparison) {
        self.differences.extend(child.differences);
    }
}

/// A single non-matching leaf pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    /// Location of the leaf in the first document.
    pub path: KeyPath,
    /// Canonical rendering of the first document's value.
    pub left: String,
    /// Canonical rendering of the second document's value.
    pub right: String,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value difference at {}: '{}' vs '{}'",
            self.path, self.left, self.right
        )
    }
}

/// Walks two documents in lockstep and scores scalar leaves against a fixed
/// threshold.
///
/// The walk follows the first document: object keys present only in the
/// second document are invisible to the comparison. Object keys visit in
/// sorted order and array elements in index order, so output is reproducible.
#[derive(Clone, Debug)]
pub struct TreeComparator {
    threshold: f64,
}

impl TreeComparator {
    /// Create a comparator with a similarity threshold in [0, 100].
    ///
    /// A leaf pair matches iff its fuzzy score is at least the threshold.
    pub fn new(threshold: f64) -> DiffResult<Self> {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(DiffError::ThresholdOutOfRange(threshold));
        }
        Ok(Self { threshold })
    }

    /// The configured similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare two documents from the root.
    pub fn compare(&self, a: &DocValue, b: &DocValue) -> Comparison {
        self.compare_at(a, b, &KeyPath::root())
    }

    fn compare_at(&self, a: &DocValue, b: &DocValue, path: &KeyPath) -> Comparison {
        match a {
            DocValue::Object(entries) => {
                let mut result = Comparison::new();
                for (key, left) in entries {
                    let right = match b {
                        DocValue::Object(other) => other.get(key).unwrap_or(&ABSENT),
                        _ => &ABSENT,
                    };
                    result.absorb(self.compare_at(left, right, &path.key(key)));
                }
                result
            }
            DocValue::Array(items) => {
                let other: &[DocValue] = match b {
                    DocValue::Array(other) => other,
                    _ => &[],
                };
                let mut result = Comparison::new();
                for index in 0..items.len().max(other.len()) {
                    let left = items.get(index).unwrap_or(&ABSENT);
                    let right = other.get(index).unwrap_or(&ABSENT);
                    result.absorb(self.compare_at(left, right, &path.index(index)));
                }
                result
            }
            leaf => self.compare_leaf(leaf, b, path),
        }
    }

    fn compare_leaf(&self, a: &DocValue, b: &DocValue, path: &KeyPath) -> Comparison {
        let score = match matcher::fuzzy_score(a, b) {
            Ok(score) => score,
            Err(err) => {
                warn!(path = %path, error = %err, "matcher degraded, leaf treated as non-matching");
                0
            }
        };

        if f64::from(score) < self.threshold {
            Comparison {
                differences: vec![Difference {
                    path: path.clone(),
                    left: a.to_string(),
                    right: b.to_string(),
                }],
            }
        } else {
            Comparison::new()
        }
    }
}
