//! Quality command - report quality metrics for a data file.

use std::path::PathBuf;

use assay::Assay;

use super::display::{print_quality, print_source};

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let assay = Assay::new();
    let (table, source) = assay.load_file(&file)?;
    let report = assay.assess_quality(&table);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_source("Assessing", &source);
        print_quality(&report, verbose);
    }

    Ok(())
}
