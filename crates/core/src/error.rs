//! Error types for option-variable operations.
//!
//! One error enum covers the typed store, the backends and the environment.
//! The three store-level failures a caller is expected to match on are
//! [`Error::KeyNotFound`], [`Error::UnsupportedType`] and
//! [`Error::HeterogeneousList`]. None of them is retried or coerced.

use crate::value::ScalarKind;
use thiserror::Error;

/// All optionvars errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No value is stored under the key
    #[error("option variable not found: {key}")]
    KeyNotFound {
        /// The missing key
        key: String,
    },

    /// The value's runtime type cannot be stored
    #[error(
        "unsupported datatype {type_name}{}: strings, ints, floats and lists of them are supported",
        expected_suffix(.expected)
    )]
    UnsupportedType {
        /// Type name of the rejected value
        type_name: &'static str,
        /// Element kind of the list being appended to, if any
        expected: Option<ScalarKind>,
    },

    /// A list mixes scalar kinds
    #[error(
        "all elements in list must be of the same datatype: expected {expected}, found {found} at index {index}"
    )]
    HeterogeneousList {
        /// Kind fixed by the first element
        expected: ScalarKind,
        /// Type name of the offending element
        found: &'static str,
        /// Position of the offending element
        index: usize,
    },

    /// A backend append does not match the kind already stored
    #[error("wrong type for {key}: stored {stored}, got {actual}")]
    WrongType {
        /// The key being appended to
        key: String,
        /// Kind already stored
        stored: ScalarKind,
        /// Kind offered
        actual: ScalarKind,
    },

    /// Up axis other than "y" or "z"
    #[error("invalid up axis: {0} (expected \"y\" or \"z\")")]
    InvalidUpAxis(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Failure reported by a host binding or a custom preference backend.
    ///
    /// The shipped backends fail with `Io` or `Serialization` instead.
    #[error("backend error: {0}")]
    Backend(String),
}

fn expected_suffix(expected: &Option<ScalarKind>) -> String {
    match expected {
        Some(kind) => format!(" for a list of {}", kind),
        None => String::new(),
    }
}

/// Result type for optionvars operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a [`Error::KeyNotFound`] for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound { key: key.into() }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Check if this error rejects a value because of its type.
    ///
    /// Covers unsupported values, mixed lists and mismatched appends.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedType { .. } | Error::HeterogeneousList { .. } | Error::WrongType { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
