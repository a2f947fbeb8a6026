//! Example: validate, score and clean a telecom customer file.
//!
//! Usage:
//!   cargo run --example pipeline -- <file_path> [output_path]
//!
//! Example:
//!   cargo run --example pipeline -- customers.csv

use std::env;
use std::path::Path;

use assay::{telecom_schema, Assay, DataSource};

fn main() -> assay::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example pipeline -- <file_path> [output_path]");
        std::process::exit(1);
    }

    let source = DataSource::csv(&args[1]);
    let output = args.get(2).map(Path::new);

    let result = Assay::new().run_pipeline(&source, &telecom_schema(), output)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Pipeline: {}", result.source.file);
    println!("{}", separator);
    println!();

    println!("## Source");
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    let report = &result.report;
    println!("## Validation");
    println!("  Valid: {}", report.valid);
    println!("  Quality score: {:.1}", report.quality.quality_score);
    for issue in &report.schema_validation.issues {
        println!("  [{}] {}", issue.kind, issue);
    }
    println!();

    println!("## Preprocessing");
    if result.transform.is_unchanged() {
        println!("  No changes");
    }
    for change in &result.transform.changes {
        println!("  - {}", change.description());
    }
    println!();
    println!("Cleaned data written to {}", result.output_path.display());

    Ok(())
}
