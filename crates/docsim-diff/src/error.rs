//! Error types for the diff crate.

/// Errors that can occur configuring a diff session.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DiffError {
    /// The similarity threshold must lie in [0, 100].
    #[error("similarity threshold out of range: {0} (expected 0..=100)")]
    ThresholdOutOfRange(f64),
}

/// Errors produced by the approximate scalar matcher.
///
/// Matcher failures are caught at the comparison site and degraded to a
/// non-matching score, so a running comparison never aborts.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MatchError {
    /// The underlying similarity ratio fell outside [0, 1].
    #[error("similarity ratio out of range: {0}")]
    RatioOutOfRange(f64),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
