//! Similarity session: tie the tally and the comparator together into one
//! whole-document percentage.

use docsim_types::DocValue;
use tracing::debug;

use crate::compare::{Difference, TreeComparator};
use crate::error::DiffResult;
use crate::tally::tally;

/// A comparison session with a fixed similarity threshold.
///
/// Sessions hold no per-document state and can be reused across pairs.
/// Sharing an input tree across sessions is safe; documents are never
/// mutated.
#[derive(Clone, Debug)]
pub struct DiffSession {
    comparator: TreeComparator,
}

impl DiffSession {
    /// Create a session with a similarity threshold in [0, 100].
    pub fn new(threshold: f64) -> DiffResult<Self> {
        Ok(Self {
            comparator: TreeComparator::new(threshold)?,
        })
    }

    /// Compare two documents and compute their overall similarity.
    ///
    /// The denominator is the scalar-leaf count of the first document. When
    /// that count is zero there is no ratio to compute and the result is
    /// [`Evaluation::NoComparableValues`].
    pub fn evaluate(&self, a: &DocValue, b: &DocValue) -> Evaluation {
        let total = tally(a).scalar_total();
        if total == 0 {
            debug!("first document has no scalar leaves");
            return Evaluation::NoComparableValues;
        }

        let comparison = self.comparator.compare(a, b);
        debug!(
            total,
            differences = comparison.difference_count(),
            "documents compared"
        );

        // Surplus leaves on the second side can push the raw difference
        // count past the first document's scalar total; clamp instead of
        // letting the ratio go negative.
        let matching = total.saturating_sub(comparison.difference_count());
        Evaluation::Similarity(SimilarityScore {
            percent: matching as f64 / total as f64 * 100.0,
            matching,
            total,
            differences: comparison.differences,
        })
    }
}

/// Outcome of evaluating a document pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// The first document had scalar leaves to compare against.
    Similarity(SimilarityScore),
    /// The first document contained no scalar leaves; no ratio is defined.
    NoComparableValues,
}

impl Evaluation {
    /// Human-facing one-line summary, either `"{percent:.2}% similar"` or
    /// `"no comparable values"`.
    pub fn summary(&self) -> String {
        match self {
            Evaluation::Similarity(score) => score.summary(),
            Evaluation::NoComparableValues => "no comparable values".to_string(),
        }
    }

    /// Leaf-level differences, in traversal order.
    pub fn differences(&self) -> &[Difference] {
        match self {
            Evaluation::Similarity(score) => &score.differences,
            Evaluation::NoComparableValues => &[],
        }
    }
}

/// A similarity ratio plus the differences behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityScore {
    /// Percentage of matching scalar leaves, in [0, 100].
    pub percent: f64,
    /// Number of matching leaves.
    pub matching: usize,
    /// Scalar-leaf count of the first document.
    pub total: usize,
    /// Leaf-level differences, in traversal order.
    pub differences: Vec<Difference>,
}

impl SimilarityScore {
    /// Two-decimal percentage summary.
    pub fn summary(&self) -> String {
        format!("{:.2}% similar", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> DocValue {
        value.into()
    }

    fn session(threshold: f64) -> DiffSession {
        DiffSession::new(threshold).unwrap()
    }

    #[test]
    fn case_insensitive_match_is_fully_similar() {
        let a = doc(json!({"x": "Hello"}));
        let b = doc(json!({"x": "hello"}));

        let result = session(90.0).evaluate(&a, &b);
        assert_eq!(result.summary(), "100.00% similar");
        assert!(result.differences().is_empty());
    }

    #[test]
    fn single_mismatch_over_single_leaf_is_zero_similar() {
        let a = doc(json!({"x": "Hello"}));
        let b = doc(json!({"x": "World"}));

        let result = session(90.0).evaluate(&a, &b);
        assert_eq!(result.summary(), "0.00% similar");
        assert_eq!(
            result.differences()[0].to_string(),
            "Value difference at x: 'Hello' vs 'World'"
        );
    }

    #[test]
    fn ragged_array_counts_against_first_total() {
        let a = doc(json!({"arr": [1, 2, 3]}));
        let b = doc(json!({"arr": [1, 2]}));

        let result = session(90.0).evaluate(&a, &b);
        match result {
            Evaluation::Similarity(score) => {
                assert_eq!(score.total, 3);
                assert_eq!(score.matching, 2);
                assert_eq!(score.summary(), "66.67% similar");
                assert_eq!(score.differences[0].path.as_str(), "arr[2]");
            }
            other => panic!("expected Similarity, got {:?}", other),
        }
    }

    #[test]
    fn empty_documents_are_degenerate() {
        let a = doc(json!({}));
        let b = doc(json!({}));

        let result = session(90.0).evaluate(&a, &b);
        assert_eq!(result, Evaluation::NoComparableValues);
        assert_eq!(result.summary(), "no comparable values");
        assert!(result.differences().is_empty());
    }

    #[test]
    fn surplus_second_side_leaves_clamp_to_zero() {
        // b has more array elements than a has scalars; the raw difference
        // count exceeds the denominator and the ratio clamps at 0.
        let a = doc(json!({"arr": []}));
        let b = doc(json!({"arr": [1, 2, 3]}));
        let a2 = doc(json!({"arr": [9]}));

        let result = session(90.0).evaluate(&a2, &b);
        match result {
            Evaluation::Similarity(score) => {
                assert_eq!(score.total, 1);
                assert_eq!(score.matching, 0);
                assert_eq!(score.summary(), "0.00% similar");
            }
            other => panic!("expected Similarity, got {:?}", other),
        }

        // Zero scalars on the first side stays degenerate even though b has
        // leaves of its own.
        assert_eq!(session(90.0).evaluate(&a, &b), Evaluation::NoComparableValues);
    }

    #[test]
    fn partial_similarity_two_decimals() {
        let a = doc(json!({"a": 1, "b": 2, "c": 3}));
        let b = doc(json!({"a": 1, "b": 2, "c": 999}));

        let result = session(90.0).evaluate(&a, &b);
        assert_eq!(result.summary(), "66.67% similar");
    }

    #[test]
    fn session_is_reusable_across_pairs() {
        let session = session(90.0);
        let a = doc(json!({"x": 1}));
        let b = doc(json!({"x": 2}));

        let first = session.evaluate(&a, &a);
        let second = session.evaluate(&a, &b);
        assert_eq!(first.summary(), "100.00% similar");
        assert_eq!(second.summary(), "0.00% similar");
    }
}
