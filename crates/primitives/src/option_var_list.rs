//! Appendable list view over an array option variable
//!
//! An [`OptionVarList`] is what a read of an array value returns: a fresh,
//! owned copy of the elements tagged with the key they came from.
//!
//! ## Two kinds of append
//!
//! - [`OptionVarList::append_and_persist`] validates the element against the
//!   list's kind, appends it to the stored array, then to the local copy.
//! - Everything reached through `DerefMut` (`push`, `truncate`, `clear`, ...)
//!   edits the local copy only. The stored value is untouched.
//!
//! Retrieving a list and editing it locally therefore never changes the
//! option variable by accident.

use optionvars_core::{Error, KeyValueBackend, Result, Scalar, ScalarKind, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// List value read from the store, tagged with its key.
#[derive(Clone)]
pub struct OptionVarList {
    key: String,
    kind: Option<ScalarKind>,
    items: Vec<Scalar>,
    backend: Arc<dyn KeyValueBackend>,
}

impl OptionVarList {
    pub(crate) fn new(key: &str, items: Vec<Scalar>, backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            key: key.to_string(),
            kind: items.first().map(Scalar::kind),
            items,
            backend,
        }
    }

    /// Key this list was read from
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Element kind, fixed by the first element at read time
    pub fn kind(&self) -> Option<ScalarKind> {
        self.kind
    }

    /// Append `value` to the stored option variable and to this copy.
    ///
    /// `value` must be a scalar of the list's kind; anything else fails with
    /// [`Error::UnsupportedType`] before the backend is called.
    pub fn append_and_persist(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let type_name = value.type_name();
        let scalar = match value.into_scalar() {
            Some(scalar) if self.kind.map_or(true, |kind| kind == scalar.kind()) => scalar,
            _ => {
                return Err(Error::UnsupportedType {
                    type_name,
                    expected: self.kind,
                })
            }
        };

        self.backend.append_array(&self.key, scalar.clone())?;
        self.kind.get_or_insert(scalar.kind());
        self.items.push(scalar);
        Ok(())
    }

    /// The local elements
    pub fn as_slice(&self) -> &[Scalar] {
        &self.items
    }

    /// Take the local elements, dropping the key tag
    pub fn into_inner(self) -> Vec<Scalar> {
        self.items
    }

    /// The local elements as a [`Value::Array`]
    pub fn to_value(&self) -> Value {
        Value::Array(self.items.iter().cloned().map(Value::from).collect())
    }
}

impl Deref for OptionVarList {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for OptionVarList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<'a> IntoIterator for &'a OptionVarList {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for OptionVarList {
    type Item = Scalar;
    type IntoIter = std::vec::IntoIter<Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Debug for OptionVarList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionVarList")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish()
    }
}

/// Lists compare by their elements; the key tag is ignored.
impl PartialEq for OptionVarList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl PartialEq<Vec<Scalar>> for OptionVarList {
    fn eq(&self, other: &Vec<Scalar>) -> bool {
        &self.items == other
    }
}

impl PartialEq<[Scalar]> for OptionVarList {
    fn eq(&self, other: &[Scalar]) -> bool {
        self.items.as_slice() == other
    }
}
