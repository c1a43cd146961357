//! Dotted-path resolution over raw supplier records.
//!
//! The lowest-level extraction primitive: walk an arbitrary JSON tree one
//! path segment at a time. Absence is always `None`, never a panic.

use serde_json::Value;

/// Resolve `path` (segments joined by `.`) against `record`.
///
/// Returns `None` when any segment is missing, when an intermediate value
/// is `null`, or when an intermediate value is not an object. Idempotent
/// and side-effect free.
#[must_use]
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
