//! Value read back from the option-variable store

use crate::option_var_list::OptionVarList;
use optionvars_core::{Scalar, ScalarKind, Value};

/// Result of reading an option variable.
///
/// Scalars come back as plain values; arrays come back as an
/// [`OptionVarList`] tagged with the key they were read from.
#[derive(Debug, Clone)]
pub enum OptionVar {
    /// String scalar
    String(String),
    /// Integer scalar
    Int(i64),
    /// Float scalar
    Float(f64),
    /// Homogeneous list
    List(OptionVarList),
}

impl OptionVar {
    /// Scalar kind of the value, or of the list elements
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            OptionVar::String(_) => Some(ScalarKind::String),
            OptionVar::Int(_) => Some(ScalarKind::Int),
            OptionVar::Float(_) => Some(ScalarKind::Float),
            OptionVar::List(list) => list.kind(),
        }
    }

    /// Check if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, OptionVar::List(_))
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionVar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionVar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionVar::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&OptionVarList> {
        match self {
            OptionVar::List(list) => Some(list),
            _ => None,
        }
    }

    /// Take the list, if this is one
    pub fn into_list(self) -> Option<OptionVarList> {
        match self {
            OptionVar::List(list) => Some(list),
            _ => None,
        }
    }

    /// Convert to the runtime [`Value`] model
    pub fn to_value(&self) -> Value {
        match self {
            OptionVar::String(s) => Value::String(s.clone()),
            OptionVar::Int(i) => Value::Int(*i),
            OptionVar::Float(f) => Value::Float(*f),
            OptionVar::List(list) => list.to_value(),
        }
    }
}

impl From<Scalar> for OptionVar {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::String(s) => OptionVar::String(s),
            Scalar::Int(i) => OptionVar::Int(i),
            Scalar::Float(f) => OptionVar::Float(f),
        }
    }
}

impl From<&str> for OptionVar {
    fn from(s: &str) -> Self {
        OptionVar::String(s.to_string())
    }
}

impl From<String> for OptionVar {
    fn from(s: String) -> Self {
        OptionVar::String(s)
    }
}

impl From<i64> for OptionVar {
    fn from(i: i64) -> Self {
        OptionVar::Int(i)
    }
}

impl From<i32> for OptionVar {
    fn from(i: i32) -> Self {
        OptionVar::Int(i as i64)
    }
}

impl From<f64> for OptionVar {
    fn from(f: f64) -> Self {
        OptionVar::Float(f)
    }
}

impl From<OptionVarList> for OptionVar {
    fn from(list: OptionVarList) -> Self {
        OptionVar::List(list)
    }
}

impl PartialEq for OptionVar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionVar::String(a), OptionVar::String(b)) => a == b,
            (OptionVar::Int(a), OptionVar::Int(b)) => a == b,
            (OptionVar::Float(a), OptionVar::Float(b)) => a == b,
            (OptionVar::List(a), OptionVar::List(b)) => a == b,
            _ => false,
        }
    }
}

/// Compare a read with the value that was written.
impl PartialEq<Value> for OptionVar {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl PartialEq<&str> for OptionVar {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for OptionVar {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<f64> for OptionVar {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}
