//! Missing value census.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

use super::ratio;

/// Null count for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub count: usize,
    /// Fraction of rows that are null in this column.
    pub percentage: f64,
}

/// Table-wide missing value statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingStats {
    pub total_missing: usize,
    pub total_cells: usize,
    /// Fraction of all cells that are null.
    pub total_missing_percentage: f64,
    /// True when any single column exceeds the critical threshold.
    pub has_critical_missing: bool,
    /// Columns with at least one null, in table order.
    pub missing_columns: IndexMap<String, ColumnMissing>,
}

/// Counts nulls per column and flags columns above a critical fraction.
#[derive(Debug, Clone, Copy)]
pub struct MissingValueCensus {
    critical_threshold: f64,
}

impl MissingValueCensus {
    pub fn new(critical_threshold: f64) -> Self {
        Self { critical_threshold }
    }

    pub fn analyze(&self, table: &DataTable) -> MissingStats {
        let rows = table.row_count();
        let mut missing_columns = IndexMap::new();
        let mut total_missing = 0;
        let mut has_critical_missing = false;

        for (idx, name) in table.headers().iter().enumerate() {
            let count = table.column_values(idx).filter(|v| v.is_null()).count();
            if count == 0 {
                continue;
            }
            let percentage = ratio(count, rows);
            has_critical_missing |= percentage > self.critical_threshold;
            total_missing += count;
            missing_columns.insert(name.clone(), ColumnMissing { count, percentage });
        }

        let total_cells = table.cell_count();
        MissingStats {
            total_missing,
            total_cells,
            total_missing_percentage: ratio(total_missing, total_cells),
            has_critical_missing,
            missing_columns,
        }
    }
}

impl Default for MissingValueCensus {
    fn default() -> Self {
        Self::new(super::DEFAULT_CRITICAL_MISSING_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;

    fn table(rows: Vec<Vec<Value>>) -> DataTable {
        DataTable::new(vec!["a".to_string(), "b".to_string()], rows).unwrap()
    }

    #[test]
    fn test_census_counts() {
        let t = table(vec![
            vec![1.into(), "x".into()],
            vec![2.into(), Value::Null],
            vec![3.into(), "y".into()],
            vec![4.into(), "z".into()],
        ]);
        let stats = MissingValueCensus::default().analyze(&t);

        assert_eq!(stats.total_missing, 1);
        assert_eq!(stats.total_cells, 8);
        assert_eq!(stats.total_missing_percentage, 0.125);
        assert_eq!(stats.missing_columns.len(), 1);
        assert_eq!(stats.missing_columns["b"].count, 1);
        assert_eq!(stats.missing_columns["b"].percentage, 0.25);
        // 25% in one column is above the 20% threshold
        assert!(stats.has_critical_missing);
    }

    #[test]
    fn test_below_threshold_not_critical() {
        let mut rows: Vec<Vec<Value>> = (0..9).map(|i| vec![i.into(), "v".into()]).collect();
        rows.push(vec![Value::Null, "v".into()]);
        let stats = MissingValueCensus::default().analyze(&table(rows));
        assert_eq!(stats.missing_columns["a"].percentage, 0.1);
        assert!(!stats.has_critical_missing);
    }

    #[test]
    fn test_exactly_at_threshold_not_critical() {
        let mut rows: Vec<Vec<Value>> = (0..4).map(|i| vec![i.into(), "v".into()]).collect();
        rows.push(vec![Value::Null, "v".into()]);
        let stats = MissingValueCensus::default().analyze(&table(rows));
        assert_eq!(stats.missing_columns["a"].percentage, 0.2);
        assert!(!stats.has_critical_missing);
    }

    #[test]
    fn test_empty_table() {
        let stats = MissingValueCensus::default().analyze(&table(Vec::new()));
        assert_eq!(stats.total_cells, 0);
        assert_eq!(stats.total_missing_percentage, 0.0);
        assert!(stats.missing_columns.is_empty());
    }
}
