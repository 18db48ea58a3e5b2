//! Key paths: textual locators of a leaf's position within a document.
//!
//! Paths are built incrementally during traversal and only affect reporting,
//! never comparison outcomes. Object keys join with dots (no leading dot at
//! the root); array indices append `[i]` at any depth, including the root.

use std::fmt;

/// A dotted/bracketed locator such as `a.b[2].c`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// The empty root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` if no segment has been appended yet.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path extended with an object key segment.
    pub fn key(&self, key: &str) -> KeyPath {
        if self.0.is_empty() {
            KeyPath(key.to_string())
        } else {
            KeyPath(format!("{}.{}", self.0, key))
        }
    }

    /// Path extended with an array index segment.
    pub fn index(&self, index: usize) -> KeyPath {
        KeyPath(format!("{}[{}]", self.0, index))
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
