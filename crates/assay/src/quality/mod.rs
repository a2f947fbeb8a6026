//! Schema-independent data quality metrics.
//!
//! Each analyzer reads a [`DataTable`] and returns a fresh statistics
//! record; [`quality_score`] folds the three records into one number.

mod duplicates;
mod missing;
mod outliers;
mod score;
pub mod stats;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AssayError, Result};
use crate::input::DataTable;

pub use duplicates::{DuplicateDetector, DuplicateStats};
pub(crate) use duplicates::duplicate_positions;
pub use missing::{ColumnMissing, MissingStats, MissingValueCensus};
pub use outliers::{ColumnOutliers, OutlierDetector, OutlierStats};
pub use score::quality_score;
pub use stats::IqrBounds;

/// Default fraction of nulls above which a column is critical.
pub const DEFAULT_CRITICAL_MISSING_THRESHOLD: f64 = 0.2;

/// Default IQR fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Tunable thresholds for the quality metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Per-column null fraction above which `has_critical_missing` is set.
    pub critical_missing_threshold: f64,
    /// Multiplier applied to the IQR when computing outlier fences.
    pub iqr_multiplier: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            critical_missing_threshold: DEFAULT_CRITICAL_MISSING_THRESHOLD,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }
}

impl QualityConfig {
    /// Check that thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.critical_missing_threshold) {
            return Err(AssayError::Config(format!(
                "critical_missing_threshold must be within [0, 1], got {}",
                self.critical_missing_threshold
            )));
        }
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(AssayError::Config(format!(
                "iqr_multiplier must be a non-negative number, got {}",
                self.iqr_multiplier
            )));
        }
        Ok(())
    }
}

/// Combined quality metrics for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub quality_score: f64,
    pub missing_values: MissingStats,
    pub duplicates: DuplicateStats,
    pub outliers: OutlierStats,
}

/// Run every analyzer over `table` and score the result.
pub fn assess(table: &DataTable, config: &QualityConfig) -> QualityReport {
    let missing_values = MissingValueCensus::new(config.critical_missing_threshold).analyze(table);
    let duplicates = DuplicateDetector::new().analyze(table);
    let outliers = OutlierDetector::new(config.iqr_multiplier).analyze(table);
    let quality_score = quality_score(&missing_values, &duplicates, &outliers);

    debug!(
        quality_score,
        missing = missing_values.total_missing,
        duplicates = duplicates.duplicate_count,
        outliers = outliers.total_outliers,
        "assessed table quality"
    );

    QualityReport {
        quality_score,
        missing_values,
        duplicates,
        outliers,
    }
}

/// Fraction `part / whole`, zero when `whole` is zero.
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
