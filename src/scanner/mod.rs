//! Recursive key search over parsed JSON documents
//!
//! A single walk serves every predicate key. Objects are visited in
//! insertion order and arrays by index, depth first. A matched entry is
//! reported as a whole and its value is not searched any further.

pub mod path;

pub use path::KeyPath;

use crate::error::{ScanError, ScanErrorKind, ScanResult};
use serde_json::Value;

/// Key marking error objects
pub const ERROR_KEY: &str = "error";

/// Key marking time zone values
pub const TIMEZONE_KEY: &str = "timezone";

/// Deepest container level a walk descends to unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// An entry whose key matched the predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Finding<'a> {
    /// The matched key
    pub key: &'a str,
    /// Value stored under the matched key
    pub value: &'a Value,
    /// Path to the object that holds the matched key
    pub path: KeyPath,
}

/// Collect every entry below `value` whose key equals `key`.
///
/// `path` is the route already taken to reach `value`. Scalars yield
/// nothing; `null` is never descended into. Containers nested deeper than
/// [`DEFAULT_MAX_DEPTH`] below `value` fail the whole scan.
pub fn scan<'a>(value: &'a Value, path: &KeyPath, key: &str) -> ScanResult<Vec<Finding<'a>>> {
    scan_with_max_depth(value, path, key, Some(DEFAULT_MAX_DEPTH))
}

/// Like [`scan`] with an explicit depth bound; `None` never stops descending
pub fn scan_with_max_depth<'a>(
    value: &'a Value,
    path: &KeyPath,
    key: &str,
    max_depth: Option<usize>,
) -> ScanResult<Vec<Finding<'a>>> {
    let mut findings = Vec::new();
    scan_into(value, path, key, 0, max_depth, &mut findings)?;
    Ok(findings)
}

/// Findings for the `error` key, starting at the document root
pub fn scan_errors(document: &Value) -> ScanResult<Vec<Finding<'_>>> {
    scan(document, &KeyPath::root(), ERROR_KEY)
}

/// Findings for the `timezone` key, starting at the document root
pub fn scan_timezones(document: &Value) -> ScanResult<Vec<Finding<'_>>> {
    scan(document, &KeyPath::root(), TIMEZONE_KEY)
}

fn scan_into<'a>(
    value: &'a Value,
    path: &KeyPath,
    key: &str,
    depth: usize,
    max_depth: Option<usize>,
    findings: &mut Vec<Finding<'a>>,
) -> ScanResult<()> {
    if let Some(limit) = max_depth {
        if depth > limit {
            return Err(ScanError::scan(ScanErrorKind::NestingTooDeep { limit }));
        }
    }

    match value {
        Value::Object(map) => {
            for (entry_key, entry) in map {
                if entry_key == key {
                    findings.push(Finding {
                        key: entry_key,
                        value: entry,
                        path: path.clone(),
                    });
                } else if is_container(entry) {
                    let child = path.child(entry_key.as_str());
                    scan_into(entry, &child, key, depth + 1, max_depth, findings)?;
                }
            }
        }
        Value::Array(items) => {
            // Array indices can never equal a textual key, so entries only recurse
            for (index, entry) in items.iter().enumerate() {
                if is_container(entry) {
                    let child = path.child(index.to_string());
                    scan_into(entry, &child, key, depth + 1, max_depth, findings)?;
                }
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
    Ok(())
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
