//! CSV output for tables.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{AssayError, Result};
use crate::input::DataTable;

/// Write `table` as comma-separated text to `path`, header first.
///
/// Nulls become empty fields.
pub fn write_csv(table: &DataTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| AssayError::io(path, e))?;
    write_csv_to(table, file)
}

/// Write `table` as comma-separated text to any writer.
pub fn write_csv_to<W: Write>(table: &DataTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
