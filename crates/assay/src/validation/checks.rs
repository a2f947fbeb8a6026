//! Per-column constraint checks.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::input::DataTable;
use crate::schema::{ColumnKind, ColumnSchema};

use super::issue::Issue;

/// A constraint applied to one schema column that is present in the table.
pub trait ColumnCheck: Send + Sync {
    /// Check the column at `index` against `spec` and return any findings.
    fn check(&self, table: &DataTable, index: usize, name: &str, spec: &ColumnSchema)
        -> Vec<Issue>;
}

/// Storage type must satisfy the declared kind.
pub struct TypeCheck;

impl ColumnCheck for TypeCheck {
    fn check(
        &self,
        table: &DataTable,
        index: usize,
        name: &str,
        spec: &ColumnSchema,
    ) -> Vec<Issue> {
        let actual = table.storage_type(index);
        if spec.kind.accepts(actual) {
            Vec::new()
        } else {
            vec![Issue::wrong_type(name, spec.kind, actual)]
        }
    }
}

/// Observed minimum and maximum must respect `min`/`max`.
pub struct RangeCheck;

impl ColumnCheck for RangeCheck {
    fn check(
        &self,
        table: &DataTable,
        index: usize,
        name: &str,
        spec: &ColumnSchema,
    ) -> Vec<Issue> {
        if spec.kind != ColumnKind::Numeric || (spec.min.is_none() && spec.max.is_none()) {
            return Vec::new();
        }

        let values = table.numeric_values(index);
        if values.is_empty() {
            return Vec::new();
        }

        let observed_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let observed_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut issues = Vec::new();
        if let Some(min) = spec.min {
            if observed_min < min {
                issues.push(Issue::out_of_range(name, format!(">= {}", min), observed_min));
            }
        }
        if let Some(max) = spec.max {
            if observed_max > max {
                issues.push(Issue::out_of_range(name, format!("<= {}", max), observed_max));
            }
        }
        issues
    }
}

/// Non-null values must come from `allowed_values`.
pub struct CategoricalCheck;

impl ColumnCheck for CategoricalCheck {
    fn check(
        &self,
        table: &DataTable,
        index: usize,
        name: &str,
        spec: &ColumnSchema,
    ) -> Vec<Issue> {
        if !spec.kind.supports_allowed_values() {
            return Vec::new();
        }
        let Some(allowed) = &spec.allowed_values else {
            return Vec::new();
        };
        let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();

        let invalid: IndexSet<String> = table
            .column_values(index)
            .filter(|v| !v.is_null())
            .map(|v| v.to_string())
            .filter(|v| !allowed.contains(v.as_str()))
            .collect();

        if invalid.is_empty() {
            Vec::new()
        } else {
            vec![Issue::invalid_values(name, invalid.into_iter().collect())]
        }
    }
}

/// Non-null values must not repeat when `unique` is set.
pub struct UniquenessCheck;

impl ColumnCheck for UniquenessCheck {
    fn check(
        &self,
        table: &DataTable,
        index: usize,
        name: &str,
        spec: &ColumnSchema,
    ) -> Vec<Issue> {
        if !spec.unique {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let repeated = table
            .column_values(index)
            .filter(|v| !v.is_null())
            .filter(|v| !seen.insert(v.key()))
            .count();

        if repeated == 0 {
            Vec::new()
        } else {
            vec![Issue::not_unique(name, repeated)]
        }
    }
}
