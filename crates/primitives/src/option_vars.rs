//! Typed option-variable store
//!
//! Dictionary-like access to named option variables. Values are strings,
//! integers, floats, or homogeneous lists of one of those kinds.
//!
//! ## Design
//!
//! `OptionVars` is a stateless facade over a [`KeyValueBackend`]. It holds no
//! cached copy of anything: every call is one or two direct backend round
//! trips, and every write goes through synchronously.
//!
//! ## Type inference
//!
//! [`OptionVars::set`] inspects the runtime [`Value`] in a fixed order:
//!
//! | Value | Stored as |
//! |-------|-----------|
//! | `String` | string scalar (checked before any numeric kind) |
//! | `Int` | integer scalar |
//! | `Float` | float scalar |
//! | empty `Array` | clears the key |
//! | non-empty `Array` | array of the first element's kind; every element must match |
//! | anything else | [`Error::UnsupportedType`] |
//!
//! Validation finishes before the first backend write, so a rejected `set`
//! leaves the stored value as it was.

use crate::option_var::OptionVar;
use crate::option_var_list::OptionVarList;
use optionvars_core::{Error, KeyValueBackend, Result, Scalar, Stored, Value};
use std::fmt;
use std::sync::Arc;

/// What a validated `set` writes.
#[derive(Debug, Clone, PartialEq)]
enum Write {
    Scalar(Scalar),
    Array(Vec<Scalar>),
    Clear,
}

/// Validate `value` and decide how it is stored.
fn classify(value: Value) -> Result<Write> {
    match value {
        Value::String(s) => Ok(Write::Scalar(Scalar::String(s))),
        Value::Int(i) => Ok(Write::Scalar(Scalar::Int(i))),
        Value::Float(f) => Ok(Write::Scalar(Scalar::Float(f))),
        Value::Array(items) if items.is_empty() => Ok(Write::Clear),
        Value::Array(items) => classify_list(items).map(Write::Array),
        other => Err(Error::UnsupportedType {
            type_name: other.type_name(),
            expected: None,
        }),
    }
}

fn classify_list(items: Vec<Value>) -> Result<Vec<Scalar>> {
    let mut items = items.into_iter();
    let first = match items.next() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };
    let first_type = first.type_name();
    let first = first.into_scalar().ok_or(Error::UnsupportedType {
        type_name: first_type,
        expected: None,
    })?;
    let kind = first.kind();

    let mut scalars = Vec::with_capacity(items.len() + 1);
    scalars.push(first);
    for (offset, item) in items.enumerate() {
        let found = item.type_name();
        match item.into_scalar() {
            Some(scalar) if scalar.kind() == kind => scalars.push(scalar),
            _ => {
                return Err(Error::HeterogeneousList {
                    expected: kind,
                    found,
                    index: offset + 1,
                })
            }
        }
    }
    Ok(scalars)
}

/// Dictionary-like store of typed option variables.
///
/// Cloning is cheap and yields a handle onto the same backend.
#[derive(Clone)]
pub struct OptionVars {
    backend: Arc<dyn KeyValueBackend>,
}

impl OptionVars {
    /// Create a store over `backend`
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// The backend this store writes through to
    pub fn backend(&self) -> &Arc<dyn KeyValueBackend> {
        &self.backend
    }

    /// Check if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> Result<bool> {
        self.backend.exists(key)
    }

    /// Read the value under `key`.
    ///
    /// Lists come back as an [`OptionVarList`] tagged with `key`.
    /// Fails with [`Error::KeyNotFound`] if nothing is stored.
    pub fn get(&self, key: &str) -> Result<OptionVar> {
        self.get_opt(key)?.ok_or_else(|| Error::not_found(key))
    }

    /// Read the value under `key`, or `None` if nothing is stored.
    pub fn get_opt(&self, key: &str) -> Result<Option<OptionVar>> {
        Ok(self.backend.query(key)?.map(|stored| self.wrap(key, stored)))
    }

    /// Read the value under `key`, substituting `default` if nothing is stored.
    pub fn get_or(&self, key: &str, default: impl Into<OptionVar>) -> Result<OptionVar> {
        Ok(self.get_opt(key)?.unwrap_or_else(|| default.into()))
    }

    /// Store `value` under `key`, inferring its datatype.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] for `Null`, `Bool`, `Bytes`, `Object`, or
    ///   a list whose first element is not a scalar
    /// - [`Error::HeterogeneousList`] for a list mixing scalar kinds
    ///
    /// # Example
    ///
    /// ```ignore
    /// vars.set("gridSpacing", 5)?;
    /// vars.set("recentFiles", vec!["a.ma", "b.ma"])?;
    /// vars.set("recentFiles", Vec::<String>::new())?; // clears
    /// ```
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        match classify(value.into())? {
            Write::Scalar(scalar) => self.backend.write_scalar(key, scalar),
            Write::Array(items) => self.backend.write_array(key, &items),
            Write::Clear => self.backend.clear_array(key),
        }
    }

    /// All stored keys, in backend order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.backend.list_keys()
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize> {
        Ok(self.keys()?.len())
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove `key` and return the value it held.
    ///
    /// Read and removal are two backend calls; a concurrent writer can
    /// interleave between them. Fails with [`Error::KeyNotFound`] if nothing
    /// is stored.
    pub fn pop(&self, key: &str) -> Result<OptionVar> {
        let value = self.get(key)?;
        self.backend.remove(key)?;
        Ok(value)
    }

    /// Remove `key`. Returns `true` if it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        if !self.backend.exists(key)? {
            return Ok(false);
        }
        self.backend.remove(key)?;
        Ok(true)
    }

    fn wrap(&self, key: &str, stored: Stored) -> OptionVar {
        match stored {
            Stored::Scalar(scalar) => OptionVar::from(scalar),
            Stored::Array(items) => {
                OptionVar::List(OptionVarList::new(key, items, Arc::clone(&self.backend)))
            }
        }
    }
}

impl fmt::Debug for OptionVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionVars").finish_non_exhaustive()
    }
}
