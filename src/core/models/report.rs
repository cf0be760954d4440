//! Lint engine results
//!
//! Mirrors the shape of ESLint's JSON formatter output, one
//! [`ViolationReport`] per linted file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::RuleIdSet;

/// ESLint severity value for errors
pub const SEVERITY_ERROR: u8 = 2;

/// ESLint severity value for warnings
pub const SEVERITY_WARNING: u8 = 1;

/// A single message reported for a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// Rule that produced the message; `None` for parse errors
    #[serde(default)]
    pub rule_id: Option<String>,
    /// 1 = warning, 2 = error
    #[serde(default = "default_severity")]
    pub severity: u8,
    /// Human-readable message text
    #[serde(default)]
    pub message: String,
    /// 1-based line number, if the engine reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

const fn default_severity() -> u8 {
    SEVERITY_ERROR
}

impl LintMessage {
    /// Create an error-level message for a rule
    #[must_use]
    pub fn error(rule_id: &str) -> Self {
        Self {
            rule_id: Some(rule_id.to_string()),
            severity: SEVERITY_ERROR,
            message: String::new(),
            line: None,
        }
    }

    /// Create a warning-level message for a rule
    #[must_use]
    pub fn warning(rule_id: &str) -> Self {
        Self {
            severity: SEVERITY_WARNING,
            ..Self::error(rule_id)
        }
    }

    /// Whether this message is error-level
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.severity >= SEVERITY_ERROR
    }
}

/// Per-file lint result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationReport {
    /// Path of the linted file, normally absolute
    pub file_path: PathBuf,
    /// Messages in the order the engine reported them
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    /// Number of error-level messages
    #[serde(default)]
    pub error_count: usize,
    /// Number of warning-level messages
    #[serde(default)]
    pub warning_count: usize,
}

impl ViolationReport {
    /// Build a report from messages, deriving the counts
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, messages: Vec<LintMessage>) -> Self {
        let error_count = messages.iter().filter(|m| m.is_error()).count();
        let warning_count = messages.len() - error_count;
        Self {
            file_path: file_path.into(),
            messages,
            error_count,
            warning_count,
        }
    }

    /// Drop warning-level messages and recount
    #[must_use]
    pub fn error_only(self) -> Self {
        let messages = self.messages.into_iter().filter(LintMessage::is_error).collect();
        Self::new(self.file_path, messages)
    }

    /// Whether the report carries at least one error
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Deduplicated rule ids of all messages, skipping rule-less ones
    #[must_use]
    pub fn rule_ids(&self) -> RuleIdSet {
        self.messages.iter().filter_map(|m| m.rule_id.as_deref()).collect()
    }

    /// Resolve the report's path against a project root
    #[must_use]
    pub fn resolve_path(&self, root: &Path) -> PathBuf {
        if self.file_path.is_absolute() {
            self.file_path.clone()
        } else {
            root.join(&self.file_path)
        }
    }
}
