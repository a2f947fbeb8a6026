//! Integration tests for Assay.

use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use assay::validation::IssueDetail;
use assay::{
    simplified_telecom_schema, Assay, AssayConfig, AssayError, ColumnKind, ColumnSchema,
    DataSource, DataTable, IssueKind, PreprocessOptions, StorageType, TableSchema,
    TransformChange, Value,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

const TELECOM_CSV: &str = "\
customer_id,age,gender,location,service_plan,contract_type,tenure_months,monthly_charges,data_usage_gb,voice_minutes,sms_count,churn
C001,34,Female,Boston,Premium,Two Year,24,79.5,12.4,310,45,false
C002,51,Male,Denver,Basic,Month-to-Month,3,29.99,2.1,120,12,true
C003,27,Other,Austin,Standard,One Year,14,49.0,8.8,260,80,false
C004,45,Female,Seattle,Enterprise,Two Year,48,119.0,20.2,540,5,false
C005,62,Male,Miami,Basic,Month-to-Month,7,29.99,1.4,90,3,true
";

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_csv_infers_types() {
    let file = create_test_file(TELECOM_CSV);
    let (table, source) = Assay::new().load_file(file.path()).expect("Load failed");

    assert_eq!(source.row_count, 5);
    assert_eq!(source.column_count, 12);
    assert_eq!(source.format, "csv");
    assert!(source.hash.starts_with("sha256:"));

    let idx = |name: &str| table.column_index(name).unwrap();
    assert_eq!(table.storage_type(idx("age")), StorageType::Integer);
    assert_eq!(table.storage_type(idx("monthly_charges")), StorageType::Float);
    assert_eq!(table.storage_type(idx("churn")), StorageType::Boolean);
    assert_eq!(table.storage_type(idx("service_plan")), StorageType::Text);
}

#[test]
fn test_load_tsv_auto_detect() {
    let content = "customer_id\tsignup\tage\n\
                   C1\t2024-01-15\t30\n\
                   C2\t2024-02-01\tNA\n";
    let file = create_test_file(content);

    let (table, source) = Assay::new().load_file(file.path()).expect("Load failed");

    assert_eq!(source.format, "tsv");
    assert_eq!(table.storage_type(1), StorageType::Timestamp);
    assert_eq!(table.get(1, 2), Some(&Value::Null));
}

#[test]
fn test_load_missing_file() {
    let err = Assay::new()
        .load_file("/nonexistent/customers.csv")
        .unwrap_err();
    assert!(matches!(err, AssayError::Io { .. }));
}

#[test]
fn test_database_source_is_unsupported() {
    let source = DataSource::database("postgres://localhost/telecom", "SELECT * FROM customers");
    assert!(!source.is_supported());
    assert!(matches!(
        Assay::new().load(&source),
        Err(AssayError::UnsupportedSource(_))
    ));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_telecom_file_passes_simplified_schema() {
    let file = create_test_file(TELECOM_CSV);
    let assay = Assay::new();
    let (table, _) = assay.load_file(file.path()).unwrap();

    let report = assay.validate(&table, &simplified_telecom_schema());

    assert!(report.valid, "issues: {:?}", report.schema_validation.issues);
    assert!(report.schema_validation.issues.is_empty());
    assert_eq!(report.quality.quality_score, 100.0);
}

#[test]
fn test_missing_required_column_reported_once() {
    let table = DataTable::new(
        headers(&["age", "gender"]),
        vec![vec![30.into(), "Male".into()]],
    )
    .unwrap();
    let schema = TableSchema::builder()
        .column("customer_id", ColumnSchema::string().required())
        .column("age", ColumnSchema::numeric())
        .build()
        .unwrap();

    let report = Assay::new().validate(&table, &schema);

    assert!(!report.valid);
    let missing: Vec<_> = report
        .schema_validation
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::MissingRequiredColumn)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(
        missing[0].detail,
        IssueDetail::MissingColumns {
            columns: vec!["customer_id".to_string()]
        }
    );
}

#[test]
fn test_age_below_minimum() {
    let table = DataTable::new(
        headers(&["age"]),
        vec![vec![15.into()], vec![40.into()], vec![70.into()]],
    )
    .unwrap();
    let schema = TableSchema::builder()
        .column("age", ColumnSchema::numeric().range(18.0, 120.0))
        .build()
        .unwrap();

    let report = Assay::new().validate(&table, &schema);
    let issues = &report.schema_validation.issues;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::OutOfRange);
    assert!(matches!(
        &issues[0].detail,
        IssueDetail::OutOfRange { constraint, observed }
            if constraint == ">= 18" && *observed == 15.0
    ));
    assert!(!report.valid);
}

#[test]
fn test_text_in_numeric_column_is_wrong_type() {
    let file = create_test_file("customer_id,age\nC1,thirty\nC2,40\n");
    let assay = Assay::new();
    let (table, _) = assay.load_file(file.path()).unwrap();
    let schema = TableSchema::builder()
        .column("age", ColumnSchema::numeric().min(18.0))
        .build()
        .unwrap();

    let report = assay.validate(&table, &schema);
    let issues = &report.schema_validation.issues;

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].detail,
        IssueDetail::WrongType {
            expected: ColumnKind::Numeric,
            actual: StorageType::Text
        }
    );
}

#[test]
fn test_schema_from_json_file() {
    let schema_file = create_test_file(
        r#"{
            "customer_id": {"type": "string", "required": true, "unique": true},
            "plan": {"type": "category", "allowed_values": ["Basic", "Premium"]},
            "score": {"type": "numeric", "min": 1, "max": 10}
        }"#,
    );
    let schema = TableSchema::load(schema_file.path()).expect("Schema load failed");
    assert_eq!(schema.column_names(), vec!["customer_id", "plan", "score"]);

    let table = DataTable::new(
        headers(&["customer_id", "plan", "score"]),
        vec![
            vec!["C1".into(), "Gold".into(), 5.into()],
            vec!["C1".into(), "Basic".into(), 7.into()],
        ],
    )
    .unwrap();

    let report = Assay::new().validate(&table, &schema);
    let kinds: Vec<IssueKind> = report
        .schema_validation
        .issues
        .iter()
        .map(|i| i.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![IssueKind::UniquenessViolation, IssueKind::InvalidCategoricalValue]
    );
}

#[test]
fn test_invalid_schema_json_rejected() {
    let err = TableSchema::from_json_str(r#"{"age": {"type": "numeric", "min": 50, "max": 10}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("age"));
}

#[test]
fn test_outliers_do_not_fail_validation() {
    let rows = [1, 2, 3, 4, 5, 100]
        .into_iter()
        .enumerate()
        .map(|(i, usage)| vec![Value::from(format!("C{i}")), Value::Integer(usage)])
        .collect();
    let table = DataTable::new(headers(&["customer_id", "usage"]), rows).unwrap();
    let schema = TableSchema::builder()
        .column("customer_id", ColumnSchema::string().required().unique())
        .build()
        .unwrap();

    let report = Assay::new().validate(&table, &schema);

    assert!(report.valid);
    assert_eq!(report.quality.outliers.total_outliers, 1);
    assert!(report.quality.quality_score < 100.0);
}

// =============================================================================
// Quality
// =============================================================================

#[test]
fn test_quality_report_on_messy_file() {
    let content = "id,plan,usage\n\
                   1,Basic,10\n\
                   2,,12\n\
                   1,Basic,10\n\
                   4,Premium,\n\
                   5,Basic,11\n";
    let file = create_test_file(content);
    let assay = Assay::new();
    let (table, _) = assay.load_file(file.path()).unwrap();

    let report = assay.assess_quality(&table);

    assert_eq!(report.missing_values.total_missing, 2);
    assert_eq!(report.missing_values.total_cells, 15);
    assert_eq!(report.duplicates.duplicate_indexes, vec![2]);
    assert!(!report.missing_values.has_critical_missing);
    assert!(report.quality_score > 0.0 && report.quality_score < 100.0);
}

// =============================================================================
// Preprocessing
// =============================================================================

#[test]
fn test_preprocess_clean_table_is_identity() {
    let file = create_test_file(TELECOM_CSV);
    let assay = Assay::new();
    let (table, _) = assay.load_file(file.path()).unwrap();

    let cleaned = assay
        .preprocess(&table, &PreprocessOptions::default())
        .unwrap();

    assert_eq!(cleaned, table);
}

#[test]
fn test_preprocess_never_adds_rows_or_columns() {
    let content = "id,plan,usage\n1,Basic,10\n1,Basic,10\n3,,\n4,Premium,900\n";
    let file = create_test_file(content);
    let assay = Assay::new();
    let (table, _) = assay.load_file(file.path()).unwrap();

    let options = PreprocessOptions {
        handle_outliers: true,
        ..Default::default()
    };
    let result = assay.preprocess_with_changes(&table, &options).unwrap();

    assert_eq!(result.table.headers(), table.headers());
    assert_eq!(result.table.row_count(), 3);
    assert!(matches!(
        result.changes[0],
        TransformChange::DroppedDuplicates { .. }
    ));
    // every null was fillable
    assert!(result.table.rows().iter().flatten().all(|v| !v.is_null()));
}

#[test]
fn test_preprocess_leaves_input_untouched() {
    let table = DataTable::new(
        headers(&["x"]),
        vec![vec![1.into()], vec![1.into()], vec![Value::Null]],
    )
    .unwrap();
    let before = table.clone();

    let _ = Assay::new()
        .preprocess(&table, &PreprocessOptions::default())
        .unwrap();

    assert_eq!(table, before);
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_pipeline_writes_cleaned_csv() {
    let content = "customer_id,age,plan\n\
                   C1,30,Basic\n\
                   C2,,Premium\n\
                   C1,30,Basic\n\
                   C3,50,\n";
    let input = create_test_file(content);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("clean.csv");
    let schema = TableSchema::builder()
        .column("customer_id", ColumnSchema::string().required())
        .column("age", ColumnSchema::numeric().range(18.0, 120.0))
        .build()
        .unwrap();

    let result = Assay::new()
        .run_pipeline(&DataSource::csv(input.path()), &schema, Some(output.as_path()))
        .expect("Pipeline failed");

    // duplicates fail validation but the pipeline still runs
    assert!(!result.report.valid);
    assert_eq!(result.output_path, output);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "customer_id,age,plan\nC1,30,Basic\nC2,40,Premium\nC3,50,Basic\n"
    );
}

#[test]
fn test_pipeline_default_output_dir() {
    let input = create_test_file("id,v\n1,2\n");
    let dir = TempDir::new().unwrap();
    let assay = Assay::with_config(AssayConfig {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap();
    let schema = TableSchema::builder()
        .column("id", ColumnSchema::numeric())
        .build()
        .unwrap();

    let result = assay
        .run_pipeline(&DataSource::csv(input.path()), &schema, None)
        .unwrap();

    assert!(result.report.valid);
    assert_eq!(result.output_path.parent(), Some(dir.path()));
    assert!(result.output_path.exists());
}
