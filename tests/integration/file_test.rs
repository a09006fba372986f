//! Integration tests for scanning files through the jsonsift binary

#[cfg(test)]
mod file_scan_tests {
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

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    #[test]
    fn test_file_report_lists_errors_and_timezones() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("events.json");
        fs::write(
            &input,
            r#"{
                "events": [
                    {"id": 1, "error": {"name": "TypeError", "message": "x is undefined"}},
                    {"id": 2, "error": {"message": "no name"}}
                ],
                "user": {"timezone": "Europe/Berlin"},
                "settings": {"display": {"timezone": "UTC"}}
            }"#,
        )
        .unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap(), "--timezone", "Host/Zone"]);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert_eq!(
            stdout(&output),
            "Errors:\n\
             \x20 - Path: events > 0 / Name: TypeError / Message: x is undefined\n\
             Timezones:\n\
             \x20 - Europe/Berlin (Host/Zone)\n\
             \x20 - UTC (Host/Zone)\n"
        );
    }

    #[test]
    fn test_invalid_json_renders_header_only() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "not json").unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap()]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "Errors:\n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Could not decode document"));
        assert!(stderr.contains("not json\n"));
        assert!(stderr.lines().any(|line| line.trim() == "^"));
    }

    #[test]
    fn test_deeply_nested_file_is_scanned() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("deep.json");
        let depth = 300;
        fs::write(
            &input,
            format!(
                "{}{}{}",
                r#"{"a":"#.repeat(depth),
                r#"{"error":{"name":"Deep","message":"bottom"}}"#,
                "}".repeat(depth)
            ),
        )
        .unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap(), "--path-separator", "."]);

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            format!(
                "Errors:\n  - Path: {} / Name: Deep / Message: bottom\n",
                vec!["a"; depth].join(".")
            )
        );
    }

    #[test]
    fn test_nesting_beyond_max_depth_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("deep.json");
        fs::write(&input, format!("{}{}", "[".repeat(50), "]".repeat(50))).unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap(), "--max-depth", "20"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Document nested deeper than 20 levels"));
        assert!(stderr.contains("--max-depth"));
    }

    #[test]
    fn test_non_utf8_file_is_a_decode_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("binary.json");
        fs::write(&input, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap()]);

        assert!(output.status.success());
        assert_eq!(stdout(&output), "Errors:\n");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Could not decode document"));
    }

    #[test]
    fn test_malformed_inline_json_is_a_decode_failure() {
        let output = run_jsonsift(&[r#"{"a":"#, "--show-decode-errors", "--quiet"]);

        assert!(output.status.success());
        assert!(stdout(&output)
            .starts_with("Errors:\n  - Path:  / Name: SyntaxError / Message: Invalid JSON"));
    }

    #[test]
    fn test_invalid_json_with_visible_decode_errors() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{\"a\": }").unwrap();

        let output = run_jsonsift(&[input.to_str().unwrap(), "--show-decode-errors", "--quiet"]);

        let text = stdout(&output);
        assert!(text.starts_with("Errors:\n  - Path:  / Name: SyntaxError / Message: Invalid JSON"));
    }

    #[test]
    fn test_output_file_and_json_format() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        let report = dir.path().join("out/report.json");
        fs::write(&input, r#"{"timezone": "PST"}"#).unwrap();

        let output = run_jsonsift(&[
            input.to_str().unwrap(),
            "--format",
            "json",
            "--timezone",
            "America/Los_Angeles",
            "-o",
            report.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "errors": null,
                "timezones": [{"value": "PST (America/Los_Angeles)"}]
            })
        );
    }

    #[test]
    fn test_missing_file_fails() {
        let output = run_jsonsift(&["/no/such/file.json"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Input path does not exist"));
        assert!(stderr.contains("jsonsift --help"));
    }

    #[test]
    fn test_no_input_prints_nothing() {
        let output = run_jsonsift(&[]);

        assert!(output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("No input provided"));
    }
}
