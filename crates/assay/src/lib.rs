//! Assay: schema-driven validation and quality scoring for tabular data.
//!
//! A [`TableSchema`] declares the columns a table should have: their kind,
//! whether they are required, numeric bounds, allowed values and
//! uniqueness. Validation checks a [`DataTable`] against a schema and
//! reports every mismatch as data. Independently of any schema, the
//! quality metrics count missing cells, duplicate rows and IQR outliers
//! and fold them into a 0-100 score.
//!
//! # Core Principles
//!
//! - **Findings are data**: schema mismatches never surface as errors
//! - **Non-destructive**: inputs are never modified; preprocessing returns a new table
//! - **Explicit schemas**: a schema is built once and shared by every call
//!
//! # Example
//!
//! ```no_run
//! use assay::{Assay, simplified_telecom_schema};
//!
//! let assay = Assay::new();
//! let (table, _source) = assay.load_file("customers.csv").unwrap();
//! let report = assay.validate(&table, &simplified_telecom_schema());
//!
//! println!("Valid: {}", report.valid);
//! println!("Quality score: {:.1}", report.quality.quality_score);
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod quality;
pub mod schema;
pub mod transform;
pub mod validation;

mod assay;

pub use crate::assay::{Assay, AssayConfig, PipelineOutput, ValidationReport};
pub use error::{AssayError, Result};
pub use input::{DataSource, DataTable, Parser, ParserConfig, SourceMetadata, Value};
pub use quality::{QualityConfig, QualityReport};
pub use schema::{
    simplified_telecom_schema, telecom_schema, ColumnKind, ColumnSchema, StorageType, TableSchema,
};
pub use transform::{PreprocessOptions, TransformChange, TransformResult};
pub use validation::{Issue, IssueKind, SchemaValidation};
