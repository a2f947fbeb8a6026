//! Preprocess command - clean a data file and write CSV.

use std::path::{Path, PathBuf};

use assay::output::write_csv;
use assay::{Assay, PreprocessOptions, TransformChange};
use colored::Colorize;
use serde::Serialize;

use super::display::print_source;

#[derive(Serialize)]
struct PreprocessOutput<'a> {
    input: &'a Path,
    output: &'a Path,
    rows_in: usize,
    rows_out: usize,
    options: PreprocessOptions,
    changes: &'a [TransformChange],
}

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    keep_duplicates: bool,
    keep_missing: bool,
    cap_outliers: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = PreprocessOptions {
        drop_duplicates: !keep_duplicates,
        handle_missing: !keep_missing,
        handle_outliers: cap_outliers,
    };

    let assay = Assay::new();
    let (table, source) = assay.load_file(&file)?;
    let result = assay.preprocess_with_changes(&table, &options)?;

    let output_path = output.unwrap_or_else(|| default_output_path(&file));
    write_csv(&result.table, &output_path)?;

    if json_output {
        let summary = PreprocessOutput {
            input: &file,
            output: &output_path,
            rows_in: table.row_count(),
            rows_out: result.table.row_count(),
            options,
            changes: &result.changes,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_source("Preprocessing", &source);

    if result.is_unchanged() {
        println!("{}", "No changes needed".green());
    } else {
        println!("{}", "Changes:".yellow().bold());
        for change in &result.changes {
            println!("  • {}", change.description());
            if verbose {
                if let TransformChange::DroppedDuplicates { rows } = change {
                    let shown: Vec<String> = rows.iter().take(20).map(|r| r.to_string()).collect();
                    println!("    rows: {}", shown.join(", ").dimmed());
                }
            }
        }
    }
    println!();

    println!(
        "{} {} ({} → {} rows, {} cells modified)",
        "Wrote".green().bold(),
        output_path.display(),
        table.row_count(),
        result.table.row_count(),
        result.cells_modified()
    );

    Ok(())
}

/// `data.csv` → `data.processed.csv` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}.processed.csv", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/customers.tsv")),
            PathBuf::from("/data/customers.processed.csv")
        );
    }

    #[test]
    fn test_run_writes_cleaned_csv() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("customers.csv");
        fs::write(&input, "id,plan\n1,Basic\n1,Basic\n2,\n").unwrap();
        let output = dir.path().join("clean.csv");

        run(input, Some(output.clone()), false, false, false, true, false).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "id,plan\n1,Basic\n2,Basic\n");
    }

    #[test]
    fn test_run_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path().join("absent.csv"), None, false, false, false, true, false);
        assert!(result.is_err());
    }
}
