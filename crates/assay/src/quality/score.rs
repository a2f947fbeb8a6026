//! Composite 0-100 quality score.

use super::duplicates::DuplicateStats;
use super::missing::MissingStats;
use super::outliers::OutlierStats;

const MAX_MISSING_PENALTY: f64 = 30.0;
const MAX_DUPLICATE_PENALTY: f64 = 20.0;
const MAX_OUTLIER_PENALTY: f64 = 20.0;

// Outlier fractions are scaled by 10 rather than 100, so a table needs
// half its numeric cells flagged before the outlier penalty reaches 5.
const OUTLIER_SCALE: f64 = 10.0;

/// Score a table from its quality statistics.
///
/// Starts at 100 and subtracts capped penalties for missing cells,
/// duplicate rows and outliers. Never negative.
pub fn quality_score(
    missing: &MissingStats,
    duplicates: &DuplicateStats,
    outliers: &OutlierStats,
) -> f64 {
    let mut score = 100.0;

    score -= (missing.total_missing_percentage * 100.0).min(MAX_MISSING_PENALTY);

    if duplicates.has_duplicates {
        score -= (duplicates.duplicate_percentage * 100.0).min(MAX_DUPLICATE_PENALTY);
    }

    if outliers.total_outliers > 0 {
        score -= (outliers.outlier_percentage * OUTLIER_SCALE).min(MAX_OUTLIER_PENALTY);
    }

    f64::max(score, 0.0)
}
