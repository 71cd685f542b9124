//! Error types and result types for document reads.
//!
//! Absence of a property is never an error; it is reported as `None`. The errors in
//! this module cover the cases where a stored value cannot be interpreted the way the
//! caller asked, and the construction of documents from untyped input.
//! Use [`DocumentResult<T>`] as the return type for fallible operations.

use thiserror::Error;

use crate::value::ValueKind;

/// Represents all possible errors that can occur when reading or building a document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The value stored under a key does not have the shape the reader expected.
    #[error("Type mismatch for property `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// The property that was read.
        key: String,
        /// The shape the reader asked for.
        expected: ValueKind,
        /// The shape actually stored.
        found: ValueKind,
    },
    /// A document was built from input that is not a mapping.
    #[error("Not a record: expected an object, found {0}")]
    NotARecord(String),
    /// Untyped input contains a value that has no [`Value`](crate::value::Value) representation.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

/// A specialized `Result` type for document operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`DocumentError`].
pub type DocumentResult<T> = Result<T, DocumentError>;

impl DocumentError {
    /// Creates a [`DocumentError::TypeMismatch`] for `key`.
    pub fn type_mismatch(key: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        DocumentError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }
}
