//! Type inference for raw text cells.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::StorageType;

use super::value::Value;

// Date shapes checked before handing a token to chrono.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), // ISO date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), // Alt ISO
    ]
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Check if a raw token represents a missing/null value.
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

/// Type a text column.
///
/// A column is narrowed to integer, float, boolean or timestamp only when
/// every non-null token parses as that type; otherwise it stays text.
pub fn type_column(tokens: &[&str], parse_dates: bool) -> Vec<Value> {
    let storage = tokens
        .iter()
        .filter(|t| !is_null_token(t))
        .map(|t| detect_token_type(t, parse_dates))
        .fold(StorageType::Empty, StorageType::unify);

    tokens
        .iter()
        .map(|token| {
            if is_null_token(token) {
                return Value::Null;
            }
            let trimmed = token.trim();
            match storage {
                StorageType::Integer => trimmed.parse().map(Value::Integer).ok(),
                StorageType::Float => trimmed.parse().map(Value::Float).ok(),
                StorageType::Boolean => parse_bool(trimmed).map(Value::Boolean),
                StorageType::Timestamp => parse_timestamp(trimmed).map(Value::Timestamp),
                StorageType::Text | StorageType::Empty => None,
            }
            .unwrap_or_else(|| Value::Text((*token).to_string()))
        })
        .collect()
}

/// Detect the type of a single non-null token.
fn detect_token_type(value: &str, parse_dates: bool) -> StorageType {
    let trimmed = value.trim();

    if parse_bool(trimmed).is_some() {
        return StorageType::Boolean;
    }

    if trimmed.parse::<i64>().is_ok() {
        return StorageType::Integer;
    }

    if trimmed.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
        return StorageType::Float;
    }

    if parse_dates && parse_timestamp(trimmed).is_some() {
        return StorageType::Timestamp;
    }

    StorageType::Text
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if !DATE_PATTERNS.iter().any(|p| p.is_match(value)) {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
