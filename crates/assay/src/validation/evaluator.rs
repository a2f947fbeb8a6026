//! Schema-driven constraint evaluation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::input::DataTable;
use crate::schema::TableSchema;

use super::checks::{CategoricalCheck, ColumnCheck, RangeCheck, TypeCheck, UniquenessCheck};
use super::issue::Issue;

/// Outcome of checking a table against a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaValidation {
    /// True when no blocking issue was found.
    pub valid: bool,
    pub issues: Vec<Issue>,
}

impl SchemaValidation {
    fn from_issues(issues: Vec<Issue>) -> Self {
        let valid = !issues.iter().any(Issue::is_blocking);
        Self { valid, issues }
    }

    /// Issues that make the table invalid.
    pub fn blocking_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_blocking())
    }
}

/// Runs column checks for every schema column found in a table.
///
/// Columns present in the table but not in the schema are ignored.
pub struct ConstraintEvaluator {
    checks: Vec<Box<dyn ColumnCheck>>,
}

impl ConstraintEvaluator {
    /// Create an evaluator with the type, range, categorical and uniqueness
    /// checks, run in that order.
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(TypeCheck),
                Box::new(RangeCheck),
                Box::new(CategoricalCheck),
                Box::new(UniquenessCheck),
            ],
        }
    }

    /// Append a custom check, run after the built-in ones.
    pub fn with_check(mut self, check: impl ColumnCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Check `table` against `schema`, collecting every issue in one pass.
    pub fn evaluate(&self, table: &DataTable, schema: &TableSchema) -> SchemaValidation {
        let mut issues = Vec::new();

        let missing_required: Vec<String> = schema
            .required_columns()
            .filter(|name| !table.has_column(name))
            .map(str::to_string)
            .collect();
        if !missing_required.is_empty() {
            issues.push(Issue::missing_required(missing_required));
        }

        for (name, spec) in schema.columns() {
            let Some(index) = table.column_index(name) else {
                if !spec.required {
                    issues.push(Issue::missing_optional(name));
                }
                continue;
            };

            for check in &self.checks {
                issues.extend(check.check(table, index, name, spec));
            }
        }

        let result = SchemaValidation::from_issues(issues);
        if result.valid {
            debug!(issues = result.issues.len(), "schema validation passed");
        } else {
            warn!(
                issues = result.issues.len(),
                blocking = result.blocking_issues().count(),
                "schema validation failed"
            );
        }
        result
    }
}

impl Default for ConstraintEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
