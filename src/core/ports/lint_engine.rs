//! Lint engine port
//!
//! Defines the interface for running the external lint engine over a project.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::super::models::ViolationReport;

/// Errors raised while invoking the lint engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine command could not be started
    #[error("failed to start lint engine `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The engine ran but reported a fatal failure (bad config, crash)
    #[error("lint engine exited with {status}: {stderr}")]
    Failed {
        /// Exit status description
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The engine's output was not the expected JSON report
    #[error("could not parse lint engine output: {0}")]
    InvalidOutput(#[from] serde_json::Error),

    /// The project root does not exist
    #[error("project root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// No command configured to run the engine
    #[error("lint engine command is empty")]
    EmptyCommand,
}

/// Lint engine abstraction
///
/// Implementations hide how the engine is located and which of its API
/// shapes is used; callers only see per-file reports.
pub trait LintEngine {
    /// Lint every source file under `root` and return one report per file
    fn run_lint(&self, root: &Path) -> Result<Vec<ViolationReport>, EngineError>;
}
