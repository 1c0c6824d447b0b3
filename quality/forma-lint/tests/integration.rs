//! Integration tests for the forma-lint CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_forma-lint"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_stdin(args: &[&str], input: &str) -> Output {
    let mut child = binary()
        .args(args)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn process");

    // The process may exit on a bad config before reading stdin
    let _ = child.stdin.as_mut().unwrap().write_all(input.as_bytes());

    child.wait_with_output().expect("Failed to read output")
}

#[test]
fn test_clean_file_passes() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("hello.forma");
    fs::write(&file_path, "f main()\n    print(\"Hello, World!\")\n").unwrap();

    let output = binary()
        .args(["--no-config", "--no-color", file_path.to_str().unwrap()])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PASS"));
    assert!(stdout.contains("0 error(s), 0 warning(s), 0 info"));
}

#[test]
fn test_tab_fails_with_report() {
    let output = run_stdin(
        &["--no-config", "--format", "report"],
        "f main()\n\tprint(\"hi\")\n",
    );

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "needs_attention");
    assert_eq!(report["error_kind"], "heuristic_parse_error");
    assert_eq!(report["location"]["line"], 2);
    assert_eq!(report["location"]["column"], 1);
}

#[test]
fn test_warnings_do_not_fail() {
    let output = run_stdin(&["--no-config", "--no-color"], "f helper()\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WARN: No main entrypoint found."));
    assert!(stdout.contains("Suggestion: Add `f main()` as the program entrypoint."));
}

#[test]
fn test_json_format() {
    let output = run_stdin(&["--no-config", "--format", "json"], "f main()\n    x (\n");

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["non_empty_line_count"], 2);
    let issues = result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["severity"], "error");
    assert_eq!(issues[0]["message"], "Missing closing delimiter for \"(\"");
}

#[test]
fn test_errors_only() {
    let output = run_stdin(
        &["--no-config", "--format", "json", "--errors-only"],
        "fn go()\n   x\n\ty\n",
    );

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let issues = result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["line"], 3);
}

#[test]
fn test_simulate() {
    let output = run_stdin(
        &["--no-config", "--no-color", "--simulate"],
        "f main()\n    print(\"one\")\n    print(\"two\")\n",
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"one\"\n\"two\"\n[simulated from print() calls]"));
}

#[test]
fn test_simulate_keeps_json_stdout_valid() {
    let source = "f main()\n    print(\"one\")\n";

    for format in ["json", "report"] {
        let output = run_stdin(&["--no-config", "--format", format, "--simulate"], source);

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(parsed.is_object(), "{format}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("\"one\"\n[simulated from print() calls]"), "{format}");
    }
}

#[test]
fn test_explicit_config() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("lint.yaml");
    fs::write(&config_path, "indentWidth: 2\n").unwrap();

    let output = run_stdin(
        &["--config", config_path.to_str().unwrap(), "--format", "report"],
        "f main()\n  print(\"x\")\n",
    );

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "ok");
}

#[test]
fn test_discovered_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".formalintrc.json"), r#"{"maxLineLength": 10}"#).unwrap();
    let file_path = temp.path().join("app.forma");
    fs::write(&file_path, "f main()\n    print(\"far too long\")\n").unwrap();

    let output = binary()
        .current_dir(temp.path())
        .args(["--format", "report", "app.forma"])
        .output()
        .expect("Failed to run command");

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["error_kind"], "heuristic_warning");
    assert_eq!(report["location"]["line"], 2);
}

#[test]
fn test_invalid_config_exits_with_two() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("lint.json");
    fs::write(&config_path, r#"{"indentWidth": 0}"#).unwrap();

    let output = run_stdin(&["--config", config_path.to_str().unwrap()], "f main()\n");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("indentWidth must be positive"));
}

#[test]
fn test_missing_file_exits_with_two() {
    let output = binary()
        .args(["--no-config", "/nonexistent/app.forma"])
        .output()
        .expect("Failed to run command");

    assert_eq!(output.status.code(), Some(2));
}
