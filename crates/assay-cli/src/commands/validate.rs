//! Validate command - check a data file against a schema.

use std::path::PathBuf;

use assay::schema::TELECOM_CRITICAL_COLUMNS;
use assay::{
    simplified_telecom_schema, telecom_schema, Assay, DataTable, IssueKind, TableSchema,
    ValidationReport,
};
use colored::Colorize;

use super::display::{print_quality, print_source};
use crate::cli::BuiltinSchema;

/// Returns whether the data passed validation.
pub fn run(
    file: PathBuf,
    schema_path: Option<PathBuf>,
    builtin: BuiltinSchema,
    json_output: bool,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let schema = match &schema_path {
        Some(path) => TableSchema::load(path)?,
        None => match builtin {
            BuiltinSchema::Telecom => telecom_schema(),
            BuiltinSchema::TelecomSimple => simplified_telecom_schema(),
        },
    };

    let assay = Assay::new();
    let (table, source) = assay.load_file(&file)?;
    let report = assay.validate(&table, &schema);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    print_source("Validating", &source);
    match &schema_path {
        Some(path) => println!("Schema: {}", path.display()),
        None => println!("Schema: built-in {}", builtin),
    }
    println!();

    print_issues(&report);
    if schema_path.is_none() {
        print_critical_gaps(&table);
    }
    print_quality(&report.quality, verbose);
    println!();

    if report.valid {
        println!("{}", "✓ Data passed validation".green().bold());
    } else {
        println!("{}", "✗ Data failed validation".red().bold());
    }

    Ok(report.valid)
}

fn print_issues(report: &ValidationReport) {
    let issues = &report.schema_validation.issues;
    if issues.is_empty() {
        println!("{}", "Schema: no issues".green());
        println!();
        return;
    }

    println!("{} ({})", "Schema issues:".yellow().bold(), issues.len());
    for issue in issues {
        let marker = match issue.kind {
            IssueKind::MissingOptionalColumn => "info".blue(),
            _ => "error".red(),
        };
        println!("  [{}] {}", marker, issue.description());
    }
    println!();
}

/// Warn about null cells in columns that must always be populated.
fn print_critical_gaps(table: &DataTable) {
    for &column in TELECOM_CRITICAL_COLUMNS {
        let Some(values) = table.column_by_name(column) else {
            continue;
        };
        let nulls = values.iter().filter(|v| v.is_null()).count();
        if nulls > 0 {
            println!(
                "  {} critical column '{}' has {} missing values",
                "warning:".yellow().bold(),
                column,
                nulls
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_run_with_schema_file() {
        let dir = TempDir::new().unwrap();
        let schema = write(
            &dir,
            "schema.json",
            r#"{"id": {"type": "numeric", "required": true, "min": 1}}"#,
        );

        let clean = write(&dir, "clean.csv", "id\n1\n2\n3\n");
        let passed = run(clean, Some(schema.clone()), BuiltinSchema::Telecom, true, false).unwrap();
        assert!(passed);

        let dirty = write(&dir, "dirty.csv", "id\n0\n2\n2\n");
        let passed = run(dirty, Some(schema), BuiltinSchema::Telecom, true, false).unwrap();
        assert!(!passed);
    }

    #[test]
    fn test_builtin_schema_reports_missing_columns() {
        let dir = TempDir::new().unwrap();
        let data = write(&dir, "partial.csv", "customer_id,age\nC1,30\nC2,40\n");
        let passed = run(data, None, BuiltinSchema::TelecomSimple, false, false).unwrap();
        assert!(!passed);
    }
}
