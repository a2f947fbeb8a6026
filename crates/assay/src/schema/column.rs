//! Column schema definition.

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

use super::types::ColumnKind;

/// Expected shape of a single column.
///
/// Serializes to the mapping format used by schema files:
///
/// ```json
/// { "type": "numeric", "required": true, "min": 18, "max": 120 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Declared kind.
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    /// Whether the column must be present in the table.
    #[serde(default)]
    pub required: bool,
    /// Lower bound for numeric columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound for numeric columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Permitted values for categorical and string columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Whether non-null values must be distinct.
    #[serde(default)]
    pub unique: bool,
    /// Human-readable description. Informational only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl ColumnSchema {
    /// Create an optional column of the given kind with no constraints.
    pub fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            required: false,
            min: None,
            max: None,
            allowed_values: None,
            unique: false,
            description: String::new(),
        }
    }

    pub fn numeric() -> Self {
        Self::new(ColumnKind::Numeric)
    }

    pub fn string() -> Self {
        Self::new(ColumnKind::String)
    }

    pub fn datetime() -> Self {
        Self::new(ColumnKind::DateTime)
    }

    pub fn boolean() -> Self {
        Self::new(ColumnKind::Boolean)
    }

    /// Categorical column restricted to `values`.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ColumnKind::Categorical).allowed_values(values)
    }

    /// Mark the column as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both bounds.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Set the permitted values.
    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Require non-null values to be distinct.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Attach a description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check that the constraints make sense for the declared kind.
    pub fn check(&self, name: &str) -> Result<()> {
        if !self.kind.supports_bounds() && (self.min.is_some() || self.max.is_some()) {
            return Err(AssayError::invalid_schema(
                name,
                format!("min/max bounds do not apply to {} columns", self.kind),
            ));
        }

        for bound in [self.min, self.max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(AssayError::invalid_schema(
                    name,
                    format!("bound {} is not a finite number", bound),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(AssayError::invalid_schema(
                    name,
                    format!("min {} is greater than max {}", min, max),
                ));
            }
        }

        if self.allowed_values.is_some() && !self.kind.supports_allowed_values() {
            return Err(AssayError::invalid_schema(
                name,
                format!("allowed_values do not apply to {} columns", self.kind),
            ));
        }

        Ok(())
    }
}
