//! Value tally: per-kind leaf counts over a single document.
//!
//! The scalar total is the denominator of the similarity ratio. Array
//! membership is tracked separately and excluded from that total, so an
//! array of 3 numbers contributes 3 to `array_members` and 3 to `numbers`.

use docsim_types::DocValue;

/// Counts of leaf values by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueTally {
    /// Number of string leaves.
    pub strings: usize,
    /// Number of numeric leaves.
    pub numbers: usize,
    /// Number of boolean leaves.
    pub booleans: usize,
    /// Number of null leaves.
    pub nulls: usize,
    /// Sum of the lengths of every array in the document.
    pub array_members: usize,
}

impl ValueTally {
    /// Total scalar leaves: strings + numbers + booleans + nulls.
    ///
    /// `array_members` is excluded; it counts positions, not values.
    pub fn scalar_total(&self) -> usize {
        self.strings + self.numbers + self.booleans + self.nulls
    }
}

/// Count leaf values in a document by kind.
///
/// Objects contribute their values only (keys are never counted); arrays add
/// their length to `array_members` and recurse into every element. The
/// absent sentinel contributes nothing.
pub fn tally(value: &DocValue) -> ValueTally {
    let mut counts = ValueTally::default();
    recurse(value, &mut counts);
    counts
}

fn recurse(value: &DocValue, counts: &mut ValueTally) {
    match value {
        DocValue::Object(entries) => {
            for child in entries.values() {
                recurse(child, counts);
            }
        }
        DocValue::Array(items) => {
            counts.array_members += items.len();
            for item in items {
                recurse(item, counts);
            }
        }
        DocValue::String(_) => counts.strings += 1,
        DocValue::Number(_) => counts.numbers += 1,
        DocValue::Bool(_) => counts.booleans += 1,
        DocValue::Null => counts.nulls += 1,
        DocValue::Absent => {}
    }
}
