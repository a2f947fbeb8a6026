//! Preprocessing engine: deduplication, imputation and outlier capping.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::Result;
use crate::input::{DataTable, Value, ValueKey};
use crate::quality::stats::median;
use crate::quality::{duplicate_positions, IqrBounds, DEFAULT_IQR_MULTIPLIER};
use crate::schema::StorageType;

use super::operations::{PreprocessOptions, TransformChange, TransformResult};

/// Produces cleaned copies of tables. Input tables are never modified.
#[derive(Debug, Clone, Copy)]
pub struct TransformEngine {
    iqr_multiplier: f64,
}

impl TransformEngine {
    /// Create a new transform engine.
    pub fn new() -> Self {
        Self::with_iqr_multiplier(DEFAULT_IQR_MULTIPLIER)
    }

    pub fn with_iqr_multiplier(iqr_multiplier: f64) -> Self {
        Self { iqr_multiplier }
    }

    /// Run the enabled steps over a copy of `table`.
    pub fn apply(&self, table: &DataTable, options: &PreprocessOptions) -> Result<TransformResult> {
        let mut changes = Vec::new();
        let mut table = table.clone();

        if options.drop_duplicates {
            table = self.drop_duplicates(table, &mut changes)?;
        }
        if options.handle_missing {
            table = self.fill_missing(table, &mut changes)?;
        }
        if options.handle_outliers {
            table = self.cap_outliers(table, &mut changes)?;
        }

        info!(
            rows = table.row_count(),
            changes = changes.len(),
            "preprocessing complete"
        );
        Ok(TransformResult { table, changes })
    }

    fn drop_duplicates(
        &self,
        table: DataTable,
        changes: &mut Vec<TransformChange>,
    ) -> Result<DataTable> {
        let positions = duplicate_positions(&table);
        if positions.is_empty() {
            return Ok(table);
        }

        let drop: HashSet<usize> = positions.iter().copied().collect();
        let (headers, rows) = table.into_parts();
        let rows = rows
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !drop.contains(idx))
            .map(|(_, row)| row)
            .collect();

        debug!(count = positions.len(), "dropped duplicate rows");
        changes.push(TransformChange::DroppedDuplicates { rows: positions });
        DataTable::new(headers, rows)
    }

    fn fill_missing(
        &self,
        table: DataTable,
        changes: &mut Vec<TransformChange>,
    ) -> Result<DataTable> {
        let fills: Vec<(usize, Value)> = (0..table.column_count())
            .filter_map(|idx| fill_value(&table, idx).map(|value| (idx, value)))
            .collect();
        if fills.is_empty() {
            return Ok(table);
        }

        let (headers, mut rows) = table.into_parts();
        for (idx, value) in fills {
            let mut count = 0;
            for row in rows.iter_mut().filter(|row| row[idx].is_null()) {
                row[idx] = value.clone();
                count += 1;
            }

            debug!(column = %headers[idx], value = %value, count, "filled missing values");
            changes.push(TransformChange::FilledMissing {
                column: headers[idx].clone(),
                value,
                count,
            });
        }
        DataTable::new(headers, rows)
    }

    fn cap_outliers(
        &self,
        table: DataTable,
        changes: &mut Vec<TransformChange>,
    ) -> Result<DataTable> {
        let caps: Vec<(usize, IqrBounds, StorageType)> = table
            .numeric_columns()
            .filter_map(|idx| {
                let values = table.numeric_values(idx);
                let bounds = IqrBounds::from_values(&values, self.iqr_multiplier)?;
                values
                    .iter()
                    .any(|&v| bounds.is_outlier(v))
                    .then(|| (idx, bounds, table.storage_type(idx)))
            })
            .collect();
        if caps.is_empty() {
            return Ok(table);
        }

        let (headers, mut rows) = table.into_parts();
        for (idx, bounds, storage) in caps {
            let mut count = 0;
            for row in rows.iter_mut() {
                let Some(v) = row[idx].as_f64() else {
                    continue;
                };
                if bounds.is_outlier(v) {
                    row[idx] = number(bounds.clip(v), storage);
                    count += 1;
                }
            }

            debug!(
                column = %headers[idx],
                lower = bounds.lower,
                upper = bounds.upper,
                count,
                "capped outliers"
            );
            changes.push(TransformChange::CappedOutliers {
                column: headers[idx].clone(),
                lower: bounds.lower,
                upper: bounds.upper,
                count,
            });
        }
        DataTable::new(headers, rows)
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Replacement for nulls in a column, if the column has nulls and a
/// fill rule applies to its storage type.
fn fill_value(table: &DataTable, idx: usize) -> Option<Value> {
    if !table.column_values(idx).any(Value::is_null) {
        return None;
    }

    match table.storage_type(idx) {
        storage @ (StorageType::Integer | StorageType::Float) => {
            median(&table.numeric_values(idx)).map(|m| number(m, storage))
        }
        StorageType::Text | StorageType::Boolean => mode(table.column_values(idx)),
        StorageType::Timestamp | StorageType::Empty => None,
    }
}

/// Most frequent non-null value; ties go to the value seen first.
fn mode<'a>(values: impl Iterator<Item = &'a Value>) -> Option<Value> {
    let mut counts: IndexMap<ValueKey<'a>, (&'a Value, usize)> = IndexMap::new();
    for value in values.filter(|v| !v.is_null()) {
        counts.entry(value.key()).or_insert((value, 0)).1 += 1;
    }

    let mut best: Option<(&Value, usize)> = None;
    for (value, count) in counts.into_values() {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.clone())
}

/// A number in the representation of an integer or float column. Fractional
/// values stay floats, which widens an integer column on rebuild.
fn number(x: f64, storage: StorageType) -> Value {
    if storage == StorageType::Integer && x.fract() == 0.0 {
        Value::Integer(x as i64)
    } else {
        Value::Float(x)
    }
}
