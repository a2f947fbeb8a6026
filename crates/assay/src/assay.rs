//! Main Assay struct and public API.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AssayError, Result};
use crate::input::{DataSource, DataTable, Parser, ParserConfig, SourceMetadata};
use crate::output::write_csv;
use crate::quality::{self, QualityConfig, QualityReport};
use crate::schema::TableSchema;
use crate::transform::{PreprocessOptions, TransformEngine, TransformResult};
use crate::validation::{ConstraintEvaluator, SchemaValidation};

/// Configuration for Assay.
#[derive(Debug, Clone)]
pub struct AssayConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Quality metric thresholds.
    pub quality: QualityConfig,
    /// Directory for pipeline output when no explicit path is given.
    pub output_dir: PathBuf,
}

impl Default for AssayConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            quality: QualityConfig::default(),
            output_dir: PathBuf::from("data/processed"),
        }
    }
}

impl AssayConfig {
    pub fn validate(&self) -> Result<()> {
        self.quality.validate()?;
        if self.parser.max_rows == Some(0) {
            return Err(AssayError::Config("max_rows must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Combined verdict of schema validation and quality assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False on any blocking schema issue, a critical missing column, or
    /// duplicate rows. Outliers alone never fail validation.
    pub valid: bool,
    pub schema_validation: SchemaValidation,
    #[serde(flatten)]
    pub quality: QualityReport,
}

/// Result of [`Assay::run_pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub source: SourceMetadata,
    /// Validation of the table as loaded, before preprocessing.
    pub report: ValidationReport,
    /// Preprocessed table and the changes that produced it.
    pub transform: TransformResult,
    /// Where the preprocessed table was written.
    pub output_path: PathBuf,
}

/// The main Assay engine.
pub struct Assay {
    config: AssayConfig,
    parser: Parser,
    evaluator: ConstraintEvaluator,
    transform: TransformEngine,
}

impl Assay {
    /// Create a new Assay instance with default configuration.
    pub fn new() -> Self {
        Self::build(AssayConfig::default())
    }

    /// Create an Assay instance with custom configuration.
    pub fn with_config(config: AssayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AssayConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            evaluator: ConstraintEvaluator::new(),
            transform: TransformEngine::with_iqr_multiplier(config.quality.iqr_multiplier),
            config,
        }
    }

    pub fn config(&self) -> &AssayConfig {
        &self.config
    }

    /// Validate `table` against `schema` and assess its quality.
    pub fn validate(&self, table: &DataTable, schema: &TableSchema) -> ValidationReport {
        let schema_validation = self.evaluator.evaluate(table, schema);
        let quality = self.assess_quality(table);

        let valid = schema_validation.valid
            && !quality.missing_values.has_critical_missing
            && !quality.duplicates.has_duplicates;

        if valid {
            info!(quality_score = quality.quality_score, "data validation passed");
        } else {
            warn!(
                schema_valid = schema_validation.valid,
                critical_missing = quality.missing_values.has_critical_missing,
                duplicates = quality.duplicates.duplicate_count,
                quality_score = quality.quality_score,
                "data validation failed"
            );
        }

        ValidationReport {
            valid,
            schema_validation,
            quality,
        }
    }

    /// Quality metrics only; no schema involved.
    pub fn assess_quality(&self, table: &DataTable) -> QualityReport {
        quality::assess(table, &self.config.quality)
    }

    /// Produce a cleaned copy of `table`.
    pub fn preprocess(&self, table: &DataTable, options: &PreprocessOptions) -> Result<DataTable> {
        Ok(self.preprocess_with_changes(table, options)?.table)
    }

    /// Produce a cleaned copy of `table` along with the list of changes.
    pub fn preprocess_with_changes(
        &self,
        table: &DataTable,
        options: &PreprocessOptions,
    ) -> Result<TransformResult> {
        self.transform.apply(table, options)
    }

    /// Load a table from a data source.
    pub fn load(&self, source: &DataSource) -> Result<(DataTable, SourceMetadata)> {
        match source {
            DataSource::Csv(path) => self.load_file(path),
            DataSource::Database { .. } => Err(AssayError::UnsupportedSource(
                "database sources are not supported by this build".to_string(),
            )),
        }
    }

    /// Load a table from a delimited text file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading data");
        let (table, metadata) = self.parser.parse_file(path)?;
        info!(
            rows = metadata.row_count,
            columns = metadata.column_count,
            "loaded data"
        );
        Ok((table, metadata))
    }

    /// Load, validate, preprocess with default options and write the result.
    ///
    /// A failing validation is logged but does not stop the pipeline. When
    /// `output` is `None` the table is written to
    /// `processed_data_<timestamp>.csv` under the configured output directory.
    pub fn run_pipeline(
        &self,
        source: &DataSource,
        schema: &TableSchema,
        output: Option<&Path>,
    ) -> Result<PipelineOutput> {
        info!(source = %source.describe(), "running ingestion pipeline");

        let (table, metadata) = self.load(source)?;
        let report = self.validate(&table, schema);
        let transform = self.preprocess_with_changes(&table, &PreprocessOptions::default())?;

        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => self.default_output_path(),
        };
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AssayError::io(parent, e))?;
        }
        write_csv(&transform.table, &output_path)?;
        info!(path = %output_path.display(), "saved processed data");

        Ok(PipelineOutput {
            source: metadata,
            report,
            transform,
            output_path,
        })
    }

    fn default_output_path(&self) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        self.config
            .output_dir
            .join(format!("processed_data_{}.csv", timestamp))
    }
}

impl Default for Assay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Value;
    use crate::schema::ColumnSchema;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn schema() -> TableSchema {
        TableSchema::builder()
            .column("customer_id", ColumnSchema::string().required().unique())
            .column("age", ColumnSchema::numeric().required().range(18.0, 120.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_validate_clean_table() {
        let table = DataTable::new(
            vec!["customer_id".to_string(), "age".to_string()],
            vec![
                vec!["C1".into(), 30.into()],
                vec!["C2".into(), 45.into()],
            ],
        )
        .unwrap();

        let report = Assay::new().validate(&table, &schema());
        assert!(report.valid);
        assert_eq!(report.quality.quality_score, 100.0);
    }

    #[test]
    fn test_duplicates_fail_validation() {
        let table = DataTable::new(
            vec!["customer_id".to_string(), "age".to_string()],
            vec![
                vec!["C1".into(), 30.into()],
                vec!["C1".into(), 30.into()],
            ],
        )
        .unwrap();

        let report = Assay::new().validate(&table, &schema());
        assert!(!report.valid);
        assert!(report.quality.duplicates.has_duplicates);
    }

    #[test]
    fn test_critical_missing_fails_validation() {
        let table = DataTable::new(
            vec!["customer_id".to_string(), "age".to_string()],
            vec![
                vec!["C1".into(), 30.into()],
                vec!["C2".into(), Value::Null],
                vec!["C3".into(), 50.into()],
            ],
        )
        .unwrap();

        let report = Assay::new().validate(&table, &schema());
        assert!(report.schema_validation.valid);
        assert!(!report.valid);
    }

    #[test]
    fn test_report_json_is_flat() {
        let table = DataTable::new(vec!["customer_id".to_string()], vec![vec!["C1".into()]])
            .unwrap();
        let report = Assay::new().validate(&table, &schema());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["schema_validation"]["valid"], false);
        assert!(json.get("quality_score").is_some());
        assert!(json.get("missing_values").is_some());
    }

    #[test]
    fn test_database_source_unsupported() {
        let source = DataSource::database("sqlite://telecom.db", "SELECT * FROM customers");
        assert!(matches!(
            Assay::new().load(&source),
            Err(AssayError::UnsupportedSource(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AssayConfig {
            quality: QualityConfig {
                iqr_multiplier: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            Assay::with_config(config),
            Err(AssayError::Config(_))
        ));
    }

    #[test]
    fn test_run_pipeline_writes_output() {
        let file = create_test_file("customer_id,age\nC1,30\nC2,\nC1,30\nC3,50\n");
        let dir = TempDir::new().unwrap();
        let config = AssayConfig {
            output_dir: dir.path().join("processed"),
            ..Default::default()
        };
        let assay = Assay::with_config(config).unwrap();

        let output = assay
            .run_pipeline(&DataSource::csv(file.path()), &schema(), None)
            .unwrap();

        assert!(!output.report.valid);
        assert_eq!(output.transform.table.row_count(), 3);
        assert!(output.output_path.starts_with(dir.path().join("processed")));
        assert!(output
            .output_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("processed_data_"));

        let written = fs::read_to_string(&output.output_path).unwrap();
        assert_eq!(written, "customer_id,age\nC1,30\nC2,40\nC3,50\n");
    }
}
