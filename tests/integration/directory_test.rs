//! Integration tests for scanning directories of JSON files

#[cfg(test)]
mod directory_scan_tests {
    use std::fs;
    use std::process::{Command, Output};
    use tempfile::tempdir;

    fn run_jsonsift(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_jsonsift"))
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run jsonsift")
    }

    #[test]
    fn test_directory_reports_are_labeled() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"{"error": {"name": "A", "message": "first"}}"#,
        )
        .unwrap();
        fs::write(nested.join("b.json"), r#"{"timezone": "CET"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "error").unwrap();

        let output = run_jsonsift(&[
            dir.path().to_str().unwrap(),
            "--recursive",
            "--timezone",
            "Zone/Test",
            "--quiet",
        ]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let a = dir.path().join("a.json");
        let b = nested.join("b.json");
        assert_eq!(
            stdout,
            format!(
                "==> {} <==\nErrors:\n  - Path:  / Name: A / Message: first\n\n==> {} <==\nTimezones:\n  - CET (Zone/Test)\n",
                a.display(),
                b.display()
            )
        );
    }

    #[test]
    fn test_flat_directory_skips_nested_files() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.json"), r#"{"timezone": "UTC"}"#).unwrap();
        fs::write(nested.join("deep.json"), r#"{"timezone": "PST"}"#).unwrap();

        let output = run_jsonsift(&[dir.path().to_str().unwrap(), "--timezone", "X/Y", "--quiet"]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("UTC (X/Y)"));
        assert!(!stdout.contains("PST"));
    }

    #[test]
    fn test_json_format_for_many_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.json"), r#"{"timezone": "UTC"}"#).unwrap();
        fs::write(dir.path().join("two.json"), "not json").unwrap();

        let output = run_jsonsift(&[
            dir.path().to_str().unwrap(),
            "--format",
            "json",
            "--timezone",
            "X/Y",
            "--quiet",
        ]);
        assert!(output.status.success());

        let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let reports = reports.as_array().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["timezones"][0]["value"], "UTC (X/Y)");
        assert_eq!(reports[1]["errors"], serde_json::json!([]));
        assert!(reports[1]["timezones"].is_null());
    }

    #[test]
    fn test_empty_directory_warns() {
        let dir = tempdir().unwrap();
        let output = run_jsonsift(&[dir.path().to_str().unwrap()]);

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("No JSON files found"));
    }
}
