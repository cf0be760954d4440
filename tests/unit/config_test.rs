//! Tests for project configuration loading

use std::fs;

use lintmute::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".lintmute.toml"),
        r#"
[eslint]
command = ["node_modules/.bin/eslint"]

[scan]
extensions = ["js", "jsx"]
ignore_file = ".eslintignore"
"#,
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.eslint.command, vec!["node_modules/.bin/eslint"]);
    assert_eq!(config.scan.extensions, vec!["js", "jsx"]);
    assert_eq!(config.scan.ignore_file, ".eslintignore");
    assert_eq!(config.scan.default_ignore, vec!["node_modules/*"]);
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".lintmute.toml"), "[scan]\nextensions = \"js\"\n").unwrap();

    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(".lintmute.toml"));
}

#[test]
fn cli_overrides_apply_on_top_of_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".lintmute.toml"), "[scan]\nextensions = [\"ts\"]\n").unwrap();

    let config = Config::load(temp.path())
        .unwrap()
        .with_extensions(Some("js"))
        .with_eslint_command(Some("yarn eslint"));
    assert_eq!(config.scan.extensions, vec!["js"]);
    assert_eq!(config.eslint.command, vec!["yarn", "eslint"]);
}
