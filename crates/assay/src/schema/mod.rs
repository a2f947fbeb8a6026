//! Declarative schema describing the columns a table is expected to have.

mod column;
mod table;
mod telecom;
mod types;

pub use column::ColumnSchema;
pub use table::{SchemaBuilder, TableSchema};
pub use telecom::{simplified_telecom_schema, telecom_schema, TELECOM_CRITICAL_COLUMNS};
pub use types::{ColumnKind, StorageType};
