//! Core type definitions for schema representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating-point values.
    Numeric,
    /// Free text values.
    String,
    /// Date and/or time values.
    #[serde(rename = "datetime")]
    DateTime,
    /// Boolean values (true/false).
    Boolean,
    /// Values drawn from a small closed set.
    #[serde(alias = "category")]
    Categorical,
}

impl ColumnKind {
    /// Returns true if a column stored as `storage` satisfies this kind.
    ///
    /// An all-null column carries no evidence either way and is accepted
    /// by every kind.
    pub fn accepts(&self, storage: StorageType) -> bool {
        if storage == StorageType::Empty {
            return true;
        }
        match self {
            ColumnKind::Numeric => storage.is_numeric(),
            ColumnKind::String | ColumnKind::Categorical => storage == StorageType::Text,
            ColumnKind::DateTime => storage == StorageType::Timestamp,
            ColumnKind::Boolean => storage == StorageType::Boolean,
        }
    }

    /// Whether `min`/`max` bounds apply to this kind.
    pub fn supports_bounds(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    /// Whether an `allowed_values` set applies to this kind.
    pub fn supports_allowed_values(&self) -> bool {
        matches!(self, ColumnKind::String | ColumnKind::Categorical)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::String => "string",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage type of a table column, inferred from its non-null contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Boolean values (true/false).
    Boolean,
    /// Text/string values.
    Text,
    /// Date and/or time values.
    Timestamp,
    /// No non-null values to infer from.
    Empty,
}

impl StorageType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, StorageType::Integer | StorageType::Float)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageType::Integer => "integer",
            StorageType::Float => "float",
            StorageType::Boolean => "boolean",
            StorageType::Text => "text",
            StorageType::Timestamp => "timestamp",
            StorageType::Empty => "empty",
        }
    }

    /// Combine the storage types of two values found in the same column.
    ///
    /// Integers and floats widen to float; any other mix degrades to text.
    pub fn unify(self, other: StorageType) -> StorageType {
        match (self, other) {
            (a, b) if a == b => a,
            (StorageType::Empty, t) | (t, StorageType::Empty) => t,
            (a, b) if a.is_numeric() && b.is_numeric() => StorageType::Float,
            _ => StorageType::Text,
        }
    }
}

impl Default for StorageType {
    fn default() -> Self {
        StorageType::Empty
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
