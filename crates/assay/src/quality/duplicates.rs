//! Exact duplicate row detection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::{DataTable, ValueKey};

use super::ratio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateStats {
    pub has_duplicates: bool,
    pub duplicate_count: usize,
    /// Fraction of rows that repeat an earlier row.
    pub duplicate_percentage: f64,
    /// Positions of repeated rows, ascending. First occurrences are excluded.
    pub duplicate_indexes: Vec<usize>,
}

/// Finds rows equal cell-for-cell to an earlier row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDetector;

impl DuplicateDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &DataTable) -> DuplicateStats {
        let duplicate_indexes = duplicate_positions(table);
        let duplicate_count = duplicate_indexes.len();

        DuplicateStats {
            has_duplicates: duplicate_count > 0,
            duplicate_count,
            duplicate_percentage: ratio(duplicate_count, table.row_count()),
            duplicate_indexes,
        }
    }
}

/// Row positions that repeat an earlier row. Nulls compare equal to nulls.
pub(crate) fn duplicate_positions(table: &DataTable) -> Vec<usize> {
    let mut seen: HashSet<Vec<ValueKey<'_>>> = HashSet::with_capacity(table.row_count());
    table
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let key: Vec<ValueKey<'_>> = row.iter().map(|v| v.key()).collect();
            (!seen.insert(key)).then_some(idx)
        })
        .collect()
}
