//! Config readers shared by the summary strategies

use serde_json::Value;
use workflow_core::ConfigMap;

/// Longest synopsis text shown on a node before it is cut
pub const SUMMARY_MAX_CHARS: usize = 50;

/// A non-empty string field
pub fn text<'c>(config: &'c ConfigMap, key: &str) -> Option<&'c str> {
    config
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A scalar field rendered for display; strings, numbers and booleans only
pub fn scalar(config: &ConfigMap, key: &str) -> Option<String> {
    match config.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Number of entries in a list field
///
/// Accepts a JSON array or a comma-separated string.
pub fn count(config: &ConfigMap, key: &str) -> usize {
    match config.get(key) {
        Some(Value::Array(items)) => items.len(),
        Some(Value::String(s)) => s.split(',').filter(|part| !part.trim().is_empty()).count(),
        _ => 0,
    }
}
