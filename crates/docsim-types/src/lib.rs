//! Foundation types for docsim.
//!
//! This crate provides the document value model shared by the diff engine,
//! plus the key-path locator used in difference reports and entry points for
//! loading documents from JSON text.
//!
//! # Key Types
//!
//! - [`DocValue`] — Parsed document tree (object/array/string/number/bool/null)
//!   with a [`DocValue::Absent`] sentinel used during paired traversal
//! - [`KeyPath`] — Dotted/bracketed locator of a leaf within a document
//! - [`DocumentError`] — Loading and parsing failures

pub mod error;
pub mod path;
pub mod source;
pub mod value;

pub use error::DocumentError;
pub use path::KeyPath;
pub use source::{from_json_str, from_reader, read_document};
pub use value::DocValue;
