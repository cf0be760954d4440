//! Suppressor - adds whole-file disable directives for every lint error
//!
//! Runs the lint engine once over the project, then rewrites the first line
//! of each file that has error-level violations so the violated rules are
//! disabled for that file.
//!
//! # Examples
//!
//! ```no_run
//! use lintmute::adapters::EslintCli;
//! use lintmute::config::Config;
//! use lintmute::suppressor::Suppressor;
//!
//! let root = std::path::Path::new(".");
//! let engine = EslintCli::from_config(&Config::load(root).unwrap());
//! let outcome = Suppressor::new(&engine).suppress(root).unwrap();
//! println!("{} file(s) updated", outcome.changed_count());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::models::RuleIdSet;
use crate::core::ports::{EngineError, LintEngine};
use crate::core::services::{Rewrite, RewriteAction, rewrite};

/// Errors rewriting a single file
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The file could not be read as UTF-8 text
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The rewritten content could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors that abort a whole suppression pass
#[derive(Debug, Error)]
pub enum SuppressError {
    /// The lint engine could not produce results
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Merge `rule_ids` into the directive of the file at `path`.
///
/// The file is only written when its content changes.
pub fn rewrite_file(path: &Path, rule_ids: &RuleIdSet) -> Result<Rewrite, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = rewrite::apply(&content, rule_ids);
    if result.changed() {
        fs::write(path, &result.content).map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(result)
}

/// A file the suppressor processed successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSuppression {
    /// File path
    pub path: PathBuf,
    /// What happened to the first line
    pub action: RewriteAction,
    /// Rules disabled by the file's directive after the rewrite, sorted
    pub rule_ids: Vec<String>,
}

/// A file the suppressor could not update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// File path
    pub path: PathBuf,
    /// Error description
    pub error: String,
}

/// Result of a suppression pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuppressOutcome {
    /// Files that were processed, in engine report order
    pub files: Vec<FileSuppression>,
    /// Files that failed to update
    pub failed: Vec<FileFailure>,
}

impl SuppressOutcome {
    /// Number of files whose content changed
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.files.iter().filter(|f| f.action != RewriteAction::Unchanged).count()
    }

    /// Whether any file failed to update
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Orchestrates one lint-then-rewrite pass
#[derive(Debug)]
pub struct Suppressor<'a, E: LintEngine + ?Sized> {
    engine: &'a E,
}

impl<'a, E: LintEngine + ?Sized> Suppressor<'a, E> {
    /// Create a suppressor backed by a lint engine
    pub const fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Disable every error-level rule violation under `root`.
    ///
    /// The engine must finish before any file is touched. A file that cannot
    /// be rewritten is recorded in [`SuppressOutcome::failed`] and the pass
    /// continues; only an engine failure aborts the call.
    pub fn suppress(&self, root: &Path) -> Result<SuppressOutcome, SuppressError> {
        let reports = self.engine.run_lint(root)?;
        let mut outcome = SuppressOutcome::default();

        for report in reports.into_iter().map(|r| r.error_only()).filter(|r| r.has_errors()) {
            let rule_ids = report.rule_ids();
            let path = report.resolve_path(root);
            if rule_ids.is_empty() {
                log::debug!("Skipping {}: no rule ids to disable", path.display());
                continue;
            }

            match rewrite_file(&path, &rule_ids) {
                Ok(result) => {
                    log::debug!("{} {}", result.action, path.display());
                    outcome.files.push(FileSuppression {
                        path,
                        action: result.action,
                        rule_ids: result.rule_ids.sorted().into_iter().map(String::from).collect(),
                    });
                },
                Err(e) => {
                    log::warn!("{e}");
                    outcome.failed.push(FileFailure {
                        path,
                        error: e.to_string(),
                    });
                },
            }
        }

        log::info!(
            "Updated {} file(s), {} failed",
            outcome.changed_count(),
            outcome.failed.len()
        );
        Ok(outcome)
    }
}
