//! Preprocessing options and the record of what preprocessing changed.

use serde::{Deserialize, Serialize};

use crate::input::{DataTable, Value};

/// Which preprocessing steps to run.
///
/// Steps always run in the order duplicates, missing values, outliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Drop rows equal to an earlier row.
    pub drop_duplicates: bool,
    /// Fill nulls with the column median (numeric) or mode (text, boolean).
    pub handle_missing: bool,
    /// Clip numeric values into their column's IQR fences.
    pub handle_outliers: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            drop_duplicates: true,
            handle_missing: true,
            handle_outliers: false,
        }
    }
}

/// A single change made during preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum TransformChange {
    /// Duplicate rows removed, by position in the input table.
    DroppedDuplicates { rows: Vec<usize> },
    /// Nulls in `column` replaced with `value`.
    FilledMissing {
        column: String,
        value: Value,
        count: usize,
    },
    /// Values in `column` clipped into `[lower, upper]`.
    CappedOutliers {
        column: String,
        lower: f64,
        upper: f64,
        count: usize,
    },
}

impl TransformChange {
    /// Get a human-readable description of the change.
    pub fn description(&self) -> String {
        match self {
            TransformChange::DroppedDuplicates { rows } => {
                format!("Dropped {} duplicate rows", rows.len())
            }
            TransformChange::FilledMissing {
                column,
                value,
                count,
            } => format!("Filled {} missing values in '{}' with {}", count, column, value),
            TransformChange::CappedOutliers {
                column,
                lower,
                upper,
                count,
            } => format!(
                "Capped {} outliers in '{}' to [{}, {}]",
                count, column, lower, upper
            ),
        }
    }

    /// Number of rows removed or cells rewritten.
    pub fn values_changed(&self) -> usize {
        match self {
            TransformChange::DroppedDuplicates { rows } => rows.len(),
            TransformChange::FilledMissing { count, .. }
            | TransformChange::CappedOutliers { count, .. } => *count,
        }
    }
}

/// Result of preprocessing: the new table plus the changes that built it.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub table: DataTable,
    pub changes: Vec<TransformChange>,
}

impl TransformResult {
    /// Number of rows dropped as duplicates.
    pub fn rows_removed(&self) -> usize {
        self.changes
            .iter()
            .filter_map(|c| match c {
                TransformChange::DroppedDuplicates { rows } => Some(rows.len()),
                _ => None,
            })
            .sum()
    }

    /// Number of cells filled or clipped.
    pub fn cells_modified(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| !matches!(c, TransformChange::DroppedDuplicates { .. }))
            .map(TransformChange::values_changed)
            .sum()
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}
