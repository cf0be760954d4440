//! Tests for the Lister
//!
//! The lister walks source files and inverts first-line disable directives
//! into a rule -> files index.

use std::path::PathBuf;

use lintmute::config::ScanConfig;
use lintmute::core::services::IgnoreSet;
use lintmute::lister::Lister;

use crate::common::TestProject;

fn list(project: &TestProject) -> lintmute::core::models::RuleFileIndex {
    Lister::new(project.path(), &ScanConfig::default()).unwrap().list().unwrap()
}

// =============================================================================
// Aggregation Tests
// =============================================================================

#[test]
fn aggregates_rules_across_files() {
    let project = TestProject::with_list_fixture();
    let index = list(&project);

    let index_js = project.file("index.js");
    let next_line = project.file("next-line-ignore.js");

    assert_eq!(index.len(), 4);
    assert_eq!(index.files_for("no-unused-vars").unwrap(), &[index_js.clone(), next_line.clone()]);
    assert_eq!(index.files_for("prefer-const").unwrap(), &[index_js.clone()]);
    assert_eq!(index.files_for("quotes").unwrap(), &[index_js.clone(), next_line.clone()]);
    assert_eq!(index.files_for("semi").unwrap(), &[index_js, next_line]);
}

#[test]
fn paths_are_joined_onto_given_root() {
    let project = TestProject::with_list_fixture();
    let index = list(&project);

    for (_, files) in index.iter() {
        assert!(files.iter().all(|f| f.starts_with(project.path())));
    }
}

#[test]
fn order_is_stable_across_runs() {
    let project = TestProject::new();
    for name in ["c.js", "a.js", "sub/b.js", "b.ts"] {
        project.add_file(name, "/* eslint-disable semi */\n");
    }

    let first = list(&project);
    let second = list(&project);

    assert_eq!(first, second);
    let files: Vec<PathBuf> = first
        .files_for("semi")
        .unwrap()
        .iter()
        .map(|f| f.strip_prefix(project.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        files,
        vec![
            PathBuf::from("a.js"),
            PathBuf::from("b.ts"),
            PathBuf::from("c.js"),
            PathBuf::from("sub/b.js"),
        ]
    );
}

#[test]
fn empty_project_gives_empty_index() {
    let project = TestProject::new();
    assert!(list(&project).is_empty());
}

// =============================================================================
// Directive Detection Tests
// =============================================================================

#[test]
fn next_line_directives_are_not_listed() {
    let project = TestProject::new();
    project.add_file("a.js", "/* eslint-disable-next-line no-debugger */\ndebugger\n");
    project.add_file("b.js", "// eslint-disable-line semi\n");

    assert!(list(&project).is_empty());
}

#[test]
fn directive_must_be_on_first_line() {
    let project = TestProject::new();
    project.add_file("a.js", "'use strict';\n/* eslint-disable semi */\n");

    assert!(list(&project).is_empty());
}

#[test]
fn byte_order_mark_before_directive_is_skipped() {
    let project = TestProject::new();
    project.add_file("a.js", "\u{FEFF}/* eslint-disable semi */\nx\n");

    let index = list(&project);
    assert_eq!(index.files_for("semi").unwrap(), &[project.file("a.js")]);
}

#[test]
fn directive_below_hashbang_is_listed() {
    let project = TestProject::new();
    project.add_file("bin/cli.js", "#!/usr/bin/env node\n/* eslint-disable no-process-exit */\n");

    let index = list(&project);
    assert_eq!(index.files_for("no-process-exit").unwrap(), &[project.file("bin/cli.js")]);
}

#[test]
fn trailing_comment_after_directive_is_not_listed() {
    let project = TestProject::new();
    project.add_file("a.js", "/* eslint-disable semi */ /* global foo */\n");

    assert!(list(&project).is_empty());
}

#[test]
fn line_comment_directives_are_listed() {
    let project = TestProject::new();
    project.add_file("a.js", "// eslint-disable eqeqeq\n");

    let index = list(&project);
    assert_eq!(index.files_for("eqeqeq").unwrap().len(), 1);
}

// =============================================================================
// Filtering Tests
// =============================================================================

#[test]
fn default_ignore_skips_node_modules() {
    let project = TestProject::new();
    project.add_file("node_modules/pkg/index.js", "/* eslint-disable semi */\n");
    project.add_file("src/app.js", "/* eslint-disable quotes */\n");

    let index = list(&project);

    assert!(index.files_for("semi").is_none());
    assert_eq!(index.files_for("quotes").unwrap().len(), 1);
}

#[test]
fn gitignore_replaces_defaults() {
    let project = TestProject::new();
    project.add_file(".gitignore", "# build output\n/dist/\n*.min.js\n");
    project.add_file("dist/bundle.js", "/* eslint-disable semi */\n");
    project.add_file("lib/vendor.min.js", "/* eslint-disable semi */\n");
    project.add_file("node_modules/pkg/index.js", "/* eslint-disable quotes */\n");
    project.add_file("src/app.js", "/* eslint-disable eqeqeq */\n");

    let index = list(&project);

    assert!(index.files_for("semi").is_none());
    assert!(index.files_for("quotes").is_some());
    assert!(index.files_for("eqeqeq").is_some());
}

#[test]
fn directories_with_source_extension_are_skipped() {
    let project = TestProject::new();
    project.add_dir("weird.js");
    project.add_file("weird.js/inner.js", "/* eslint-disable semi */\n");

    let index = list(&project);

    assert_eq!(index.files_for("semi").unwrap(), &[project.file("weird.js/inner.js")]);
}

#[test]
fn only_configured_extensions_are_read() {
    let project = TestProject::new();
    project.add_file("a.js", "/* eslint-disable semi */\n");
    project.add_file("b.mjs", "/* eslint-disable quotes */\n");
    project.add_file("c.md", "/* eslint-disable eqeqeq */\n");

    let scan = ScanConfig {
        extensions: vec!["mjs".to_string()],
        ..ScanConfig::default()
    };
    let index = Lister::new(project.path(), &scan).unwrap().list().unwrap();

    assert_eq!(index.len(), 1);
    assert!(index.files_for("quotes").is_some());
}

#[test]
fn explicit_ignore_set() {
    let project = TestProject::new();
    project.add_file("generated/a.js", "/* eslint-disable semi */\n");
    project.add_file("b.js", "/* eslint-disable semi */\n");

    let lister = Lister::with_ignore(
        project.path(),
        vec!["js".to_string()],
        IgnoreSet::from_patterns(["generated/*"]),
    )
    .unwrap();

    assert_eq!(lister.source_files().unwrap(), vec![PathBuf::from("b.js")]);
}
