//! Diff engine for docsim.
//!
//! Walks two document trees in lockstep, scores scalar leaves with an
//! approximate (edit-distance) matcher, and aggregates leaf differences into
//! a whole-document similarity percentage.
//!
//! # Key Types
//!
//! - [`DiffSession`] / [`Evaluation`] — Threshold-fixed session producing a
//!   similarity score or a degenerate no-comparable-values result
//! - [`TreeComparator`] / [`Comparison`] / [`Difference`] — Lockstep tree walk
//!   collecting leaf-level differences
//! - [`ValueTally`] — Per-kind leaf counts, the similarity denominator
//! - [`fuzzy_score`] — Normalized edit-distance score in [0, 100]

pub mod compare;
pub mod error;
pub mod matcher;
pub mod session;
pub mod tally;

pub use compare::{Comparison, Difference, TreeComparator};
pub use error::{DiffError, DiffResult, MatchError};
pub use matcher::fuzzy_score;
pub use session::{DiffSession, Evaluation, SimilarityScore};
pub use tally::{tally, ValueTally};
