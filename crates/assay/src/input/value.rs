//! Typed cell values.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::schema::StorageType;

/// A single cell in a [`DataTable`](super::DataTable).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Null, or a NaN float.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Storage type this value contributes to its column.
    ///
    /// A NaN float is missing and contributes nothing.
    pub fn storage_type(&self) -> StorageType {
        match self {
            Value::Null => StorageType::Empty,
            Value::Float(f) if f.is_nan() => StorageType::Empty,
            Value::Integer(_) => StorageType::Integer,
            Value::Float(_) => StorageType::Float,
            Value::Boolean(_) => StorageType::Boolean,
            Value::Text(_) => StorageType::Text,
            Value::Timestamp(_) => StorageType::Timestamp,
        }
    }

    /// Hashable identity used for equality-based grouping.
    ///
    /// `0.0` and `-0.0` share a key, matching `==` on floats.
    pub fn key(&self) -> ValueKey<'_> {
        match self {
            Value::Null => ValueKey::Null,
            Value::Integer(i) => ValueKey::Integer(*i),
            Value::Float(f) => ValueKey::Float(if *f == 0.0 { 0 } else { f.to_bits() }),
            Value::Boolean(b) => ValueKey::Boolean(*b),
            Value::Text(s) => ValueKey::Text(s),
            Value::Timestamp(t) => ValueKey::Timestamp(*t),
        }
    }

    /// Convert into the representation used by a column of `storage` type.
    pub(crate) fn coerce_to(self, storage: StorageType) -> Value {
        match (storage, self) {
            (_, Value::Null) => Value::Null,
            (_, Value::Float(f)) if f.is_nan() => Value::Null,
            (StorageType::Float, Value::Integer(i)) => Value::Float(i as f64),
            (StorageType::Text, Value::Text(s)) => Value::Text(s),
            (StorageType::Text, other) => Value::Text(other.to_string()),
            (_, other) => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(t) if t.time() == NaiveTime::MIN => {
                write!(f, "{}", t.format("%Y-%m-%d"))
            }
            Value::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Borrowed, hashable form of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey<'a> {
    Null,
    Integer(i64),
    Float(u64),
    Boolean(bool),
    Text(&'a str),
    Timestamp(NaiveDateTime),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::Null
        } else {
            Value::Float(v)
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Timestamp(v.and_time(NaiveTime::MIN))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_zero_keys_match() {
        assert_eq!(Value::Float(0.0).key(), Value::Float(-0.0).key());
        assert_ne!(Value::Float(1.0).key(), Value::Integer(1).key());
    }

    #[test]
    fn test_coerce() {
        assert_eq!(Value::Integer(3).coerce_to(StorageType::Float), Value::Float(3.0));
        assert_eq!(
            Value::Boolean(true).coerce_to(StorageType::Text),
            Value::Text("true".to_string())
        );
        assert_eq!(Value::Null.coerce_to(StorageType::Text), Value::Null);
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-01-15");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(40.0).to_string(), "40.0");
        assert_eq!(Value::Integer(40).to_string(), "40");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_nan_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::Float(f64::NAN).storage_type(), StorageType::Empty);
        assert_eq!(Value::Float(f64::NAN).coerce_to(StorageType::Float), Value::Null);
    }
}
