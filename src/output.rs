//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::RuleFileIndex;
use crate::suppressor::{FileFailure, FileSuppression, SuppressOutcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an `ignore` run
#[derive(Debug, Serialize)]
pub struct IgnoreResult {
    /// Project root that was linted
    pub root: String,
    /// Number of files whose first line changed
    pub changed: usize,
    /// Files that were processed
    pub files: Vec<FileSuppression>,
    /// Files that could not be updated
    pub failed: Vec<FileFailure>,
}

impl IgnoreResult {
    /// Build from a suppression outcome
    #[must_use]
    pub fn new(root: impl Into<String>, outcome: SuppressOutcome) -> Self {
        Self {
            root: root.into(),
            changed: outcome.changed_count(),
            files: outcome.files,
            failed: outcome.failed,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() && self.failed.is_empty() {
            println!("No lint errors found in {}.", self.root);
            return;
        }

        for file in &self.files {
            println!("  {:<10} {}", file.action.to_string(), file.path.display());
            println!("             {}", file.rule_ids.join(", ").dimmed());
        }

        if !self.failed.is_empty() {
            println!("\n{}", "Failed:".red().bold());
            for failure in &self.failed {
                println!("  {}", failure.path.display());
                println!("          {}", failure.error);
            }
        }

        println!(
            "\nUpdated {} of {} file(s) with lint errors.",
            self.changed,
            self.files.len() + self.failed.len()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a `list` run
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Project root that was scanned
    pub root: String,
    /// Rule id -> files disabling it
    pub rules: RuleFileIndex,
}

impl ListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No eslint-disable directives found.");
            return;
        }

        for (rule, files) in self.rules.iter() {
            println!("{} ({})", rule.bold(), files.len());
            for file in files {
                println!("  {}", file.display());
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(&self.rules).unwrap_or_default());
    }
}
