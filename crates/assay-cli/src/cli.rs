//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Assay: schema-driven validation and quality scoring for tabular data
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a data file against a schema and report quality metrics
    Validate {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// JSON schema file mapping column names to column specs
        #[arg(short, long, conflicts_with = "builtin")]
        schema: Option<PathBuf>,

        /// Built-in schema to validate against
        #[arg(short, long, default_value = "telecom")]
        builtin: BuiltinSchema,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report missing values, duplicates, outliers and the quality score
    Quality {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clean a data file and write the result as CSV
    Preprocess {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>.processed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep duplicate rows
        #[arg(long)]
        keep_duplicates: bool,

        /// Leave missing values as they are
        #[arg(long)]
        keep_missing: bool,

        /// Clip numeric values into their IQR fences
        #[arg(long)]
        cap_outliers: bool,

        /// Output the change summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Schemas shipped with the library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuiltinSchema {
    /// Full telecom customer schema
    #[default]
    Telecom,
    /// Twelve-column telecom subset
    TelecomSimple,
}

impl std::str::FromStr for BuiltinSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "telecom" => Ok(BuiltinSchema::Telecom),
            "telecom-simple" | "telecom_simple" | "simple" => Ok(BuiltinSchema::TelecomSimple),
            _ => Err(format!(
                "Unknown schema: {}. Use: telecom or telecom-simple.",
                s
            )),
        }
    }
}

impl std::fmt::Display for BuiltinSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuiltinSchema::Telecom => write!(f, "telecom"),
            BuiltinSchema::TelecomSimple => write!(f, "telecom-simple"),
        }
    }
}
