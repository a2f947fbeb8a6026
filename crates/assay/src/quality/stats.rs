//! Order statistics shared by the outlier detector and preprocessing.

use serde::{Deserialize, Serialize};

/// Sort values ascending; incomparable pairs are treated as equal.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Quantile of already-sorted values by linear interpolation between the
/// two nearest ranks. Returns `None` for an empty slice.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        Some(sorted[lo])
    } else {
        let frac = idx - lo as f64;
        Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
    }
}

/// Median of unsorted values.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(&sorted(values), 0.5)
}

/// Interquartile range fences for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Compute fences `Q1 - k*IQR` and `Q3 + k*IQR` over the given values.
    pub fn from_values(values: &[f64], multiplier: f64) -> Option<Self> {
        let sorted = sorted(values);
        let q1 = quantile(&sorted, 0.25)?;
        let q3 = quantile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// True when `value` lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Clamp `value` into the fences.
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert_eq!(quantile(&values, 0.25), Some(2.25));
        assert_eq!(quantile(&values, 0.75), Some(4.75));
        assert_eq!(quantile(&values, 0.5), Some(3.5));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_median_unsorted() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0]), Some(2.5));
    }

    #[test]
    fn test_iqr_bounds() {
        let bounds = IqrBounds::from_values(&[100.0, 1.0, 2.0, 3.0, 4.0, 5.0], 1.5).unwrap();
        assert_eq!(bounds.iqr(), 2.5);
        assert_eq!(bounds.lower, -1.5);
        assert_eq!(bounds.upper, 8.5);
        assert!(bounds.is_outlier(100.0));
        assert!(!bounds.is_outlier(8.5));
        assert_eq!(bounds.clip(100.0), 8.5);
    }

    #[test]
    fn test_single_value_has_zero_width() {
        let bounds = IqrBounds::from_values(&[7.0], 1.5).unwrap();
        assert_eq!(bounds.lower, 7.0);
        assert_eq!(bounds.upper, 7.0);
        assert!(IqrBounds::from_values(&[], 1.5).is_none());
    }
}
