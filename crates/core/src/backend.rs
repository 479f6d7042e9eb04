//! Preference backend capability
//!
//! Defines the interface the typed store requires from the host's preference
//! system. The store performs all type inference and validation itself; a
//! backend only persists scalars and homogeneous arrays of scalars.
//!
//! Implementations: `MemoryBackend` (in-process) and `FileBackend` (durable
//! preference file) in `optionvars-storage`, or any host binding.

use crate::error::Result;
use crate::value::{Scalar, ScalarKind};
use serde::{Deserialize, Serialize};

/// The shape a backend stores under a key.
///
/// An `Array` is homogeneous and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stored {
    /// A single scalar
    Scalar(Scalar),
    /// A homogeneous array of scalars
    Array(Vec<Scalar>),
}

impl Stored {
    /// Kind of the scalar, or of the array elements.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            Stored::Scalar(s) => Some(s.kind()),
            Stored::Array(items) => items.first().map(Scalar::kind),
        }
    }

    /// Whether this is an array value
    pub fn is_array(&self) -> bool {
        matches!(self, Stored::Array(_))
    }

    /// Apply the append rule shared by all backends.
    ///
    /// A missing value starts a new array; a scalar of the same kind is
    /// promoted to a two-element array; a kind mismatch is rejected.
    pub fn appended(current: Option<Stored>, key: &str, element: Scalar) -> Result<Stored> {
        let stored = match current {
            None => return Ok(Stored::Array(vec![element])),
            Some(stored) => stored,
        };
        if let Some(kind) = stored.kind() {
            if kind != element.kind() {
                return Err(crate::Error::WrongType {
                    key: key.to_string(),
                    stored: kind,
                    actual: element.kind(),
                });
            }
        }
        Ok(match stored {
            Stored::Scalar(first) => Stored::Array(vec![first, element]),
            Stored::Array(mut items) => {
                items.push(element);
                Stored::Array(items)
            }
        })
    }
}

/// Untyped key/value capability of a host preference system.
///
/// Every method is a single synchronous round trip. Implementations guard
/// their own state; callers get no isolation across calls.
pub trait KeyValueBackend: Send + Sync {
    /// Whether any value is stored under `key`
    fn exists(&self, key: &str) -> Result<bool>;

    /// Read the value stored under `key`
    fn query(&self, key: &str) -> Result<Option<Stored>>;

    /// Store a scalar, replacing whatever was there
    fn write_scalar(&self, key: &str, value: Scalar) -> Result<()>;

    /// (Re)initialize an array with a single element, discarding prior contents
    fn write_array_first(&self, key: &str, first: Scalar) -> Result<()>;

    /// Append one element to the array under `key`
    ///
    /// A missing key starts a new array. The element must match the kind
    /// already stored, otherwise [`crate::Error::WrongType`].
    fn append_array(&self, key: &str, element: Scalar) -> Result<()>;

    /// Remove the array value under `key`
    fn clear_array(&self, key: &str) -> Result<()>;

    /// Remove any value under `key`
    fn remove(&self, key: &str) -> Result<()>;

    /// All stored keys, in backend-defined order
    fn list_keys(&self) -> Result<Vec<String>>;

    /// Write a whole, already validated, non-empty array.
    ///
    /// The default issues `write_array_first` followed by one
    /// `append_array` per remaining element. Backends that can store the
    /// array in one write should override it.
    fn write_array(&self, key: &str, items: &[Scalar]) -> Result<()> {
        let Some((first, rest)) = items.split_first() else {
            return self.clear_array(key);
        };
        self.write_array_first(key, first.clone())?;
        for item in rest {
            self.append_array(key, item.clone())?;
        }
        Ok(())
    }
}
