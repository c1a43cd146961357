//! Candidate-path field extraction and value coercion.
//!
//! [`extract_field`] drives the mapping-configured path: try each dotted
//! path in order and return the first hit that is present, non-null, and
//! not the empty string. When no supplier mapping applies to a record the
//! normalizer falls back to [`extract_first_key`] with small fixed sets of
//! conventional key names.

use serde_json::Value;

use crate::resolve::resolve_path;

/// Conventional key names tried when no supplier mapping matches a record.
pub(crate) const FALLBACK_ID_KEYS: &[&str] = &["id", "Id", "hotel_id"];
pub(crate) const FALLBACK_DESTINATION_KEYS: &[&str] = &["destination_id", "destination"];
pub(crate) const FALLBACK_NAME_KEYS: &[&str] = &["name", "hotel_name"];
pub(crate) const FALLBACK_DESCRIPTION_KEYS: &[&str] = &["description", "details", "info"];

/// Returns the first candidate path that resolves to a usable value.
///
/// A value is usable when it is present, not `null`, and not the empty
/// string. An empty candidate list yields `None`.
#[must_use]
pub fn extract_field<'a>(record: &'a Value, candidate_paths: &[String]) -> Option<&'a Value> {
    candidate_paths
        .iter()
        .find_map(|path| resolve_path(record, path).filter(|v| is_usable(v)))
}

/// Fallback-mode lookup: try each conventional key directly on the record.
#[must_use]
pub fn extract_first_key<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| resolve_path(record, key).filter(|v| is_usable(v)))
}

fn is_usable(value: &Value) -> bool {
    !value.is_null() && value.as_str() != Some("")
}

/// Coerce a JSON value to an owned string.
///
/// Strings pass through; numbers are rendered (some suppliers ship numeric
/// ids). Everything else is absent.
#[must_use]
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a JSON value to an integer, accepting numeric strings.
#[must_use]
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value to a float, accepting numeric strings.
#[must_use]
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
