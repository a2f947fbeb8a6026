//! Table-level schema definition.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

use super::column::ColumnSchema;

/// Schema for an entire table: column name to column specification, in
/// declaration order.
///
/// A `TableSchema` is checked once at construction and never changes
/// afterwards, so one instance can be shared by any number of validation
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, ColumnSchema>",
    into = "IndexMap<String, ColumnSchema>"
)]
pub struct TableSchema {
    columns: IndexMap<String, ColumnSchema>,
}

impl TableSchema {
    /// Create a schema from an ordered column map.
    pub fn new(columns: IndexMap<String, ColumnSchema>) -> Result<Self> {
        for (name, column) in &columns {
            column.check(name)?;
        }
        Ok(Self { columns })
    }

    /// Start building a schema column by column.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parse a schema from its JSON mapping form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| AssayError::io(path, e))?;
        Self::from_json_str(&contents)
    }

    /// Serialize the schema to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.columns)?)
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.get(name)
    }

    /// Iterate over `(name, column)` pairs in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnSchema)> {
        self.columns.iter().map(|(name, col)| (name.as_str(), col))
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Names of the required columns.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, col)| col.required)
            .map(|(name, _)| name.as_str())
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Build a schema restricted to `names`, in the order given.
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut columns = IndexMap::new();
        for name in names {
            let column = self.columns.get(name).ok_or_else(|| {
                AssayError::invalid_schema(name, "column is not defined in the source schema")
            })?;
            columns.insert(name.to_string(), column.clone());
        }
        Ok(Self { columns })
    }
}

impl TryFrom<IndexMap<String, ColumnSchema>> for TableSchema {
    type Error = AssayError;

    fn try_from(columns: IndexMap<String, ColumnSchema>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<TableSchema> for IndexMap<String, ColumnSchema> {
    fn from(schema: TableSchema) -> Self {
        schema.columns
    }
}

/// Incremental builder for [`TableSchema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<(String, ColumnSchema)>,
}

impl SchemaBuilder {
    /// Add a column.
    pub fn column(mut self, name: impl Into<String>, column: ColumnSchema) -> Self {
        self.columns.push((name.into(), column));
        self
    }

    /// Finish the schema, rejecting repeated names and invalid entries.
    pub fn build(self) -> Result<TableSchema> {
        let mut columns = IndexMap::with_capacity(self.columns.len());
        for (name, column) in self.columns {
            if columns.contains_key(&name) {
                return Err(AssayError::invalid_schema(name, "column defined twice"));
            }
            columns.insert(name, column);
        }
        TableSchema::new(columns)
    }
}
