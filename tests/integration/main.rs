//! Integration tests for the lintmute CLI
//!
//! These tests drive the built binary against temporary projects. The
//! `ignore` tests swap ESLint for a small shell script that prints a canned
//! JSON report, configured through `.lintmute.toml`.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a lintmute command
fn lintmute() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("lintmute"))
}

/// Helper to create the two-file list fixture
fn list_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("index.js"),
        "/* eslint-disable no-unused-vars, prefer-const, quotes, semi */\nlet a = \"b\"\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("next-line-ignore.js"),
        "/* eslint-disable no-unused-vars, quotes, semi */\n// eslint-disable-next-line prefer-const\nlet a = \"b\"\n",
    )
    .unwrap();
    temp
}

/// Helper to configure a fake engine that prints `report` as its output
fn fake_engine(path: &Path, report: &str) {
    fs::write(path.join("report.json"), report).unwrap();
    fs::write(path.join("fake-eslint.sh"), "#!/bin/sh\ncat report.json\n").unwrap();
    fs::write(path.join(".lintmute.toml"), "[eslint]\ncommand = [\"sh\", \"fake-eslint.sh\"]\n")
        .unwrap();
}

// =============================================================================
// BASIC CLI TESTS
// =============================================================================

#[test]
fn test_version() {
    lintmute().arg("--version").assert().success().stdout(predicate::str::contains("lintmute"));
}

#[test]
fn test_version_json() {
    lintmute()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    lintmute()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ignore"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_no_args_shows_info() {
    lintmute().assert().success().stdout(predicate::str::contains("lintmute --help"));
}

// =============================================================================
// LIST TESTS
// =============================================================================

#[test]
fn test_list_human() {
    let temp = list_fixture();

    lintmute()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("prefer-const"))
        .stdout(predicate::str::contains("next-line-ignore.js"));
}

#[test]
fn test_list_json() {
    let temp = list_fixture();

    let output = lintmute()
        .args(["--json", "list"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = rules.as_object().unwrap();
    assert_eq!(rules.len(), 4);
    assert_eq!(rules["no-unused-vars"].as_array().unwrap().len(), 2);
    assert_eq!(rules["prefer-const"].as_array().unwrap().len(), 1);
    assert!(rules["prefer-const"][0].as_str().unwrap().ends_with("index.js"));
}

#[test]
fn test_list_nothing_found() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.js"), "const a = 1;\n").unwrap();

    lintmute()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No eslint-disable directives found"));
}

#[test]
fn test_list_missing_root() {
    lintmute()
        .args(["list", "/nonexistent/lintmute/project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("root path does not exist"));
}

// =============================================================================
// IGNORE TESTS
// =============================================================================

#[cfg(unix)]
#[test]
fn test_ignore_prepends_directive() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("test.js"), "debugger").unwrap();
    fake_engine(
        temp.path(),
        r#"[{"filePath":"test.js","messages":[{"ruleId":"no-debugger","severity":2}],"errorCount":1,"warningCount":0}]"#,
    );

    lintmute()
        .arg("ignore")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("prepended"));

    assert_eq!(
        fs::read_to_string(temp.path().join("test.js")).unwrap(),
        "/* eslint-disable no-debugger */\ndebugger"
    );
}

#[cfg(unix)]
#[test]
fn test_ignore_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("test.js"), "/* eslint-disable no-console, no-undef */\ndebugger\n")
        .unwrap();
    fake_engine(
        temp.path(),
        r#"[{"filePath":"test.js","messages":[{"ruleId":"no-debugger","severity":2}],"errorCount":1}]"#,
    );

    lintmute().arg("ignore").arg(temp.path()).assert().success();
    let first = fs::read_to_string(temp.path().join("test.js")).unwrap();
    assert_eq!(first, "/* eslint-disable no-console, no-debugger, no-undef */\ndebugger\n");

    lintmute()
        .args(["--json", "ignore"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"changed\": 0"));
    assert_eq!(fs::read_to_string(temp.path().join("test.js")).unwrap(), first);
}

#[cfg(unix)]
#[test]
fn test_ignore_eslint_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.js"), "x\n").unwrap();
    fs::write(
        temp.path().join("other.json"),
        r#"[{"filePath":"a.js","messages":[{"ruleId":"semi","severity":2}],"errorCount":1}]"#,
    )
    .unwrap();
    fs::write(temp.path().join("other.sh"), "#!/bin/sh\ncat other.json\n").unwrap();

    lintmute()
        .args(["ignore", "--eslint", "sh other.sh"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("a.js")).unwrap(),
        "/* eslint-disable semi */\nx\n"
    );
}

#[cfg(unix)]
#[test]
fn test_ignore_reports_missing_files() {
    let temp = TempDir::new().unwrap();
    fake_engine(
        temp.path(),
        r#"[{"filePath":"gone.js","messages":[{"ruleId":"semi","severity":2}],"errorCount":1}]"#,
    );

    lintmute()
        .arg("ignore")
        .arg(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("gone.js"))
        .stderr(predicate::str::contains("1 file(s) could not be updated"));
}

#[cfg(unix)]
#[test]
fn test_ignore_engine_failure() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.js"), "debugger\n").unwrap();
    fs::write(temp.path().join("broken.sh"), "#!/bin/sh\necho 'No ESLint configuration found' >&2\nexit 2\n")
        .unwrap();

    lintmute()
        .args(["ignore", "--eslint", "sh broken.sh"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ESLint configuration found"));

    assert_eq!(fs::read_to_string(temp.path().join("a.js")).unwrap(), "debugger\n");
}
