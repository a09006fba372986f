//! Unit tests for the recursive key scan
//!
//! Tests cover:
//! - Documents without marked keys
//! - Paths attached to findings
//! - Traversal order and repeatability

use jsonsift::scanner::{scan, scan_errors, scan_timezones, KeyPath, ERROR_KEY};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[cfg(test)]
mod scanner_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(path: &KeyPath) -> Vec<&str> {
        path.keys().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_unmarked_documents_have_no_findings() {
        let documents = [
            json!({}),
            json!([]),
            json!({"errors": [1, 2], "tz": "UTC", "nested": {"deep": [{"x": null}]}}),
            json!([["error"], {"message": "timezone"}]),
            json!("error"),
        ];

        for doc in &documents {
            assert!(scan_errors(doc).unwrap().is_empty(), "unexpected error in {}", doc);
            assert!(scan_timezones(doc).unwrap().is_empty(), "unexpected timezone in {}", doc);
        }
    }

    #[test]
    fn test_paths_follow_container_keys() {
        let doc = json!({
            "service": {
                "calls": [
                    {"status": 200},
                    {"status": 500, "error": {"name": "Upstream", "message": "bad gateway"}}
                ],
                "error": {"name": "Top", "message": "failed"}
            }
        });

        let findings = scan_errors(&doc).unwrap();
        let paths: Vec<Vec<&str>> = findings.iter().map(|f| keys(&f.path)).collect();
        assert_eq!(paths, vec![vec!["service", "calls", "1"], vec!["service"]]);
    }

    #[test]
    fn test_depth_first_pre_order() {
        let doc: Value = serde_json::from_str(
            r#"{
                "b": {"timezone": "first", "inner": {"timezone": "second"}},
                "a": {"timezone": "third"},
                "timezone": "fourth"
            }"#,
        )
        .unwrap();

        let values: Vec<&str> = scan_timezones(&doc)
            .unwrap()
            .iter()
            .filter_map(|f| f.value.as_str())
            .collect();
        assert_eq!(values, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_matched_object_is_one_finding() {
        let doc = json!({"error": {"name": "outer", "message": "m", "cause": {"error": {}}}});
        let findings = scan_errors(&doc).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].value["name"], "outer");
    }

    #[test]
    fn test_generic_scan_matches_wrappers() {
        let doc = json!({"x": [{"error": 1}, {"y": {"error": 2}}]});
        assert_eq!(scan(&doc, &KeyPath::root(), ERROR_KEY).unwrap(), scan_errors(&doc).unwrap());
    }

    #[test]
    fn test_repeated_scans_are_identical() {
        let doc = json!({"a": {"timezone": "UTC"}, "b": [{"timezone": "CET"}]});
        assert_eq!(scan_timezones(&doc).unwrap(), scan_timezones(&doc).unwrap());
    }
}
