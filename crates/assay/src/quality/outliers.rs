//! IQR-based outlier detection over numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

use super::ratio;
use super::stats::IqrBounds;

/// Outliers found in one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOutliers {
    pub count: usize,
    /// Fraction of rows flagged in this column.
    pub percentage: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub min_value: f64,
    pub max_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierStats {
    pub total_outliers: usize,
    /// Outliers over all numeric cells (rows x numeric columns).
    pub outlier_percentage: f64,
    /// Columns with at least one outlier, in table order.
    pub outlier_columns: IndexMap<String, ColumnOutliers>,
}

/// Flags numeric values strictly outside the IQR fences.
#[derive(Debug, Clone, Copy)]
pub struct OutlierDetector {
    iqr_multiplier: f64,
}

impl OutlierDetector {
    pub fn new(iqr_multiplier: f64) -> Self {
        Self { iqr_multiplier }
    }

    pub fn analyze(&self, table: &DataTable) -> OutlierStats {
        let rows = table.row_count();
        let mut outlier_columns = IndexMap::new();
        let mut numeric_columns = 0;

        for idx in table.numeric_columns() {
            numeric_columns += 1;
            let values = table.numeric_values(idx);
            let Some(bounds) = IqrBounds::from_values(&values, self.iqr_multiplier) else {
                continue;
            };

            let count = values.iter().filter(|&&v| bounds.is_outlier(v)).count();
            if count == 0 {
                continue;
            }

            let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            outlier_columns.insert(
                table.headers()[idx].clone(),
                ColumnOutliers {
                    count,
                    percentage: ratio(count, rows),
                    lower_bound: bounds.lower,
                    upper_bound: bounds.upper,
                    min_value,
                    max_value,
                },
            );
        }

        let total_outliers = outlier_columns.values().map(|c| c.count).sum();
        OutlierStats {
            total_outliers,
            outlier_percentage: ratio(total_outliers, rows * numeric_columns),
            outlier_columns,
        }
    }
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::new(super::DEFAULT_IQR_MULTIPLIER)
    }
}
