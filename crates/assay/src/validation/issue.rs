//! Schema validation findings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{ColumnKind, StorageType};

/// Category of a schema validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// One or more required columns are absent from the table.
    MissingRequiredColumn,
    /// An optional schema column is absent. Informational only.
    MissingOptionalColumn,
    /// Column storage type does not satisfy the declared kind.
    WrongType,
    /// Observed minimum or maximum falls outside a declared bound.
    OutOfRange,
    /// Values outside the declared allowed set.
    InvalidCategoricalValue,
    /// A column declared unique holds a repeated value.
    UniquenessViolation,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::MissingRequiredColumn => "Missing Required Column",
            IssueKind::MissingOptionalColumn => "Missing Optional Column",
            IssueKind::WrongType => "Wrong Type",
            IssueKind::OutOfRange => "Out of Range",
            IssueKind::InvalidCategoricalValue => "Invalid Categorical Value",
            IssueKind::UniquenessViolation => "Uniqueness Violation",
        }
    }

    /// Whether an issue of this kind makes the table invalid.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, IssueKind::MissingOptionalColumn)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload of an [`Issue`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueDetail {
    #[default]
    None,
    MissingColumns {
        columns: Vec<String>,
    },
    WrongType {
        expected: ColumnKind,
        actual: StorageType,
    },
    OutOfRange {
        /// Violated bound, e.g. `>= 18`.
        constraint: String,
        /// Observed column minimum or maximum.
        observed: f64,
    },
    InvalidValues {
        values: Vec<String>,
    },
    RepeatedValues {
        /// Non-null cells equal to an earlier cell in the column.
        count: usize,
    },
}

impl IssueDetail {
    pub fn is_none(&self) -> bool {
        matches!(self, IssueDetail::None)
    }
}

/// A single finding from schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Affected column. Absent for the batched missing-required issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "IssueDetail::is_none")]
    pub detail: IssueDetail,
}

impl Issue {
    pub fn new(kind: IssueKind, column: Option<String>, detail: IssueDetail) -> Self {
        Self {
            kind,
            column,
            detail,
        }
    }

    pub fn missing_required(columns: Vec<String>) -> Self {
        Self::new(
            IssueKind::MissingRequiredColumn,
            None,
            IssueDetail::MissingColumns { columns },
        )
    }

    pub fn missing_optional(column: &str) -> Self {
        Self::new(
            IssueKind::MissingOptionalColumn,
            Some(column.to_string()),
            IssueDetail::None,
        )
    }

    pub fn wrong_type(column: &str, expected: ColumnKind, actual: StorageType) -> Self {
        Self::new(
            IssueKind::WrongType,
            Some(column.to_string()),
            IssueDetail::WrongType { expected, actual },
        )
    }

    pub fn out_of_range(column: &str, constraint: String, observed: f64) -> Self {
        Self::new(
            IssueKind::OutOfRange,
            Some(column.to_string()),
            IssueDetail::OutOfRange {
                constraint,
                observed,
            },
        )
    }

    pub fn invalid_values(column: &str, values: Vec<String>) -> Self {
        Self::new(
            IssueKind::InvalidCategoricalValue,
            Some(column.to_string()),
            IssueDetail::InvalidValues { values },
        )
    }

    pub fn not_unique(column: &str, count: usize) -> Self {
        Self::new(
            IssueKind::UniquenessViolation,
            Some(column.to_string()),
            IssueDetail::RepeatedValues { count },
        )
    }

    pub fn is_blocking(&self) -> bool {
        self.kind.is_blocking()
    }

    /// One-line human-readable description.
    pub fn description(&self) -> String {
        let column = self.column.as_deref().unwrap_or("");
        match &self.detail {
            IssueDetail::MissingColumns { columns } => {
                format!("Missing required columns: {}", columns.join(", "))
            }
            IssueDetail::WrongType { expected, actual } => {
                format!("'{}' expected {}, found {}", column, expected, actual)
            }
            IssueDetail::OutOfRange {
                constraint,
                observed,
            } => format!(
                "'{}' violates {} (observed {})",
                column, constraint, observed
            ),
            IssueDetail::InvalidValues { values } => {
                let shown: Vec<&str> = values.iter().take(5).map(String::as_str).collect();
                let more = values.len().saturating_sub(shown.len());
                if more > 0 {
                    format!(
                        "'{}' has values outside the allowed set: {} (+{} more)",
                        column,
                        shown.join(", "),
                        more
                    )
                } else {
                    format!(
                        "'{}' has values outside the allowed set: {}",
                        column,
                        shown.join(", ")
                    )
                }
            }
            IssueDetail::RepeatedValues { count } => {
                format!("'{}' should be unique but has {} repeated values", column, count)
            }
            IssueDetail::None => format!("{}: '{}'", self.kind, column),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
