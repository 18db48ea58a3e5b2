//! Approximate scalar matcher: case-insensitive edit-distance similarity
//! over canonical textual renderings.

use docsim_types::DocValue;
use strsim::normalized_levenshtein;

use crate::error::MatchError;

/// Score two leaf values for approximate equality, in [0, 100].
///
/// Both operands are rendered to their canonical text, lowercased, and
/// compared with a normalized Levenshtein ratio scaled to a whole-number
/// percentage. Identical lowercased renderings score 100; entirely
/// dissimilar text scores near 0. The score is symmetric in its arguments.
pub fn fuzzy_score(a: &DocValue, b: &DocValue) -> Result<u8, MatchError> {
    let left = a.to_string().to_lowercase();
    let right = b.to_string().to_lowercase();

    let ratio = normalized_levenshtein(&left, &right);
    if !(0.0..=1.0).contains(&ratio) {
        return Err(MatchError::RatioOutOfRange(ratio));
    }

    Ok((ratio * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> DocValue {
        value.into()
    }

    #[test]
    fn identical_strings_score_100() {
        let v = doc(json!("Hello"));
        assert_eq!(fuzzy_score(&v, &v).unwrap(), 100);
    }

    #[test]
    fn case_differences_are_ignored() {
        let a = doc(json!("Hello"));
        let b = doc(json!("hello"));
        assert_eq!(fuzzy_score(&a, &b).unwrap(), 100);
    }

    #[test]
    fn dissimilar_strings_score_low() {
        let a = doc(json!("Hello"));
        let b = doc(json!("World"));
        let score = fuzzy_score(&a, &b).unwrap();
        assert!(score < 50, "got {}", score);
    }

    #[test]
    fn mixed_scalar_kinds_compare_textually() {
        // The number 1 and the string "1" render identically.
        assert_eq!(fuzzy_score(&doc(json!(1)), &doc(json!("1"))).unwrap(), 100);
        assert_eq!(
            fuzzy_score(&doc(json!(true)), &doc(json!("TRUE"))).unwrap(),
            100
        );
    }

    #[test]
    fn absent_scores_against_placeholder() {
        let score = fuzzy_score(&doc(json!(3)), &DocValue::Absent).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn empty_strings_match() {
        let v = doc(json!(""));
        assert_eq!(fuzzy_score(&v, &v).unwrap(), 100);
    }

    proptest! {
        #[test]
        fn score_is_symmetric(a in ".{0,16}", b in ".{0,16}") {
            let left = DocValue::String(a);
            let right = DocValue::String(b);
            prop_assert_eq!(
                fuzzy_score(&left, &right).unwrap(),
                fuzzy_score(&right, &left).unwrap()
            );
        }

        #[test]
        fn self_score_is_100(s in ".{0,16}") {
            let v = DocValue::String(s);
            prop_assert_eq!(fuzzy_score(&v, &v).unwrap(), 100);
        }
    }
}
