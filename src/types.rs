//! Type definitions for values handed to the serializer

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value the serializer accepts, either as a whole row-like or as a field
///
/// A table to serialize is a [`Value::List`] of row-likes. Each row-like is
/// either a scalar (written as a one-field row) or a list of fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Missing value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// String value
    String(String),
    /// Sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Check if value is a scalar (string, number or boolean)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::String(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_)
        )
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Canonical field text for this value
    ///
    /// Numbers and booleans get their fixed textual form, strings are
    /// returned as-is, and anything else becomes the empty string.
    pub fn to_field(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Int(i) => {
                let mut buf = itoa::Buffer::new();
                buf.format(*i).to_string()
            }
            Value::Float(f) => format_float(*f),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::List(_) => String::new(),
        }
    }

    /// Normalize a row-like into its fields
    ///
    /// Scalars become a one-field row. Lists are kept when non-empty.
    /// Returns `None` for rows that must be skipped.
    pub fn as_row(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) if !items.is_empty() => Some(items.as_slice()),
            v if v.is_scalar() => Some(std::slice::from_ref(v)),
            _ => None,
        }
    }
}

/// Shortest round-trip decimal, never in exponent form
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        f.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
