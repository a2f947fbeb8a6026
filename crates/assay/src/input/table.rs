//! In-memory typed table.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{AssayError, Result};
use crate::schema::StorageType;

use super::value::Value;

/// Represents typed tabular data.
///
/// Every row has exactly one cell per header, and every column holds values
/// of a single storage type (or null). Construction enforces both.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
    storage: Vec<StorageType>,
}

impl DataTable {
    /// Create a table, inferring each column's storage type.
    ///
    /// Integers in a column that also holds floats are widened to floats;
    /// any other mix of types turns the column into text.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(AssayError::DuplicateColumn(header.clone()));
            }
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(AssayError::Shape {
                    row: row_idx,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }

        let storage: Vec<StorageType> = (0..headers.len())
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].storage_type())
                    .fold(StorageType::Empty, StorageType::unify)
            })
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&storage)
                    .map(|(value, ty)| value.coerce_to(*ty))
                    .collect()
            })
            .collect();

        Ok(Self {
            headers,
            rows,
            storage,
        })
    }

    /// Create a table from records keyed by column name.
    ///
    /// Columns appear in order of first appearance; a key absent from a
    /// record is null in that row.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = IndexMap<String, Value>>,
    {
        let records: Vec<_> = records.into_iter().collect();

        let mut headers: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                headers
                    .iter()
                    .map(|h| record.swap_remove(h).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self::new(headers, rows)
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Row data (row-major order).
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Inferred storage type of the column at `index`.
    pub fn storage_type(&self, index: usize) -> StorageType {
        self.storage.get(index).copied().unwrap_or_default()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Non-null numeric values of a column, in row order.
    pub fn numeric_values(&self, index: usize) -> Vec<f64> {
        self.column_values(index).filter_map(Value::as_f64).collect()
    }

    /// Indices of columns stored as integers or floats.
    pub fn numeric_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.storage
            .iter()
            .enumerate()
            .filter(|(_, ty)| ty.is_numeric())
            .map(|(i, _)| i)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Split the table into headers and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>) {
        (self.headers, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_storage_inference() {
        let table = DataTable::new(
            headers(&["id", "score", "name", "flag", "blank"]),
            vec![
                vec![1.into(), 1.into(), "a".into(), true.into(), Value::Null],
                vec![2.into(), 2.5.into(), "b".into(), Value::Null, Value::Null],
            ],
        )
        .unwrap();

        assert_eq!(table.storage_type(0), StorageType::Integer);
        assert_eq!(table.storage_type(1), StorageType::Float);
        assert_eq!(table.storage_type(2), StorageType::Text);
        assert_eq!(table.storage_type(3), StorageType::Boolean);
        assert_eq!(table.storage_type(4), StorageType::Empty);
        assert_eq!(table.get(0, 1), Some(&Value::Float(1.0)));
        assert_eq!(table.numeric_columns().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_mixed_column_becomes_text() {
        let table = DataTable::new(
            headers(&["code"]),
            vec![vec![7.into()], vec!["x7".into()]],
        )
        .unwrap();

        assert_eq!(table.storage_type(0), StorageType::Text);
        assert_eq!(table.get(0, 0), Some(&Value::Text("7".to_string())));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = DataTable::new(
            headers(&["a", "b"]),
            vec![vec![1.into(), 2.into()], vec![3.into()]],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AssayError::Shape {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = DataTable::new(headers(&["a", "a"]), Vec::new()).unwrap_err();
        assert!(matches!(err, AssayError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_from_records_fills_absent_keys() {
        let mut first = IndexMap::new();
        first.insert("id".to_string(), Value::from(1));
        first.insert("city".to_string(), Value::from("NYC"));
        let mut second = IndexMap::new();
        second.insert("id".to_string(), Value::from(2));
        second.insert("age".to_string(), Value::from(40));

        let table = DataTable::from_records(vec![first, second]).unwrap();

        assert_eq!(table.headers(), &["id", "city", "age"]);
        assert_eq!(table.get(1, 1), Some(&Value::Null));
        assert_eq!(table.get(0, 2), Some(&Value::Null));
        assert_eq!(table.storage_type(2), StorageType::Integer);
    }
}
