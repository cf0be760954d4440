//! ESLint command-line adapter
//!
//! Implements [`LintEngine`] by running the engine as a child process with
//! the JSON formatter and parsing its standard output.
//!
//! ESLint exits with status 0 when no errors were found and 1 when lint
//! errors were found; both are successful runs. Any other status means the
//! engine itself failed (bad configuration, crash).

pub mod version;

use std::path::Path;
use std::process::Command;

pub use version::EngineApi;

use crate::config::Config;
use crate::core::models::ViolationReport;
use crate::core::ports::{EngineError, LintEngine};

/// Runs ESLint through a configurable command line
#[derive(Debug, Clone)]
pub struct EslintCli {
    command: Vec<String>,
    extensions: Vec<String>,
}

impl EslintCli {
    /// Create an adapter for a command (program + leading args)
    #[must_use]
    pub const fn new(command: Vec<String>, extensions: Vec<String>) -> Self {
        Self {
            command,
            extensions,
        }
    }

    /// Create an adapter from project configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.eslint.command.clone(), config.scan.extensions.clone())
    }

    /// Full argument list passed after the program name
    #[must_use]
    pub fn arguments(&self, api: EngineApi) -> Vec<String> {
        let mut args: Vec<String> = self.command.iter().skip(1).cloned().collect();
        args.extend(api.args(&self.extensions));
        args.push(".".to_string());
        args
    }
}

impl LintEngine for EslintCli {
    fn run_lint(&self, root: &Path) -> Result<Vec<ViolationReport>, EngineError> {
        if !root.is_dir() {
            return Err(EngineError::RootNotFound(root.to_path_buf()));
        }
        let program = self.command.first().ok_or(EngineError::EmptyCommand)?;

        let api = EngineApi::detect(root);
        let args = self.arguments(api);
        let command_line = format!("{program} {}", args.join(" "));
        log::info!("Running {command_line} in {}", root.display());

        let output = Command::new(program)
            .args(&args)
            .current_dir(root)
            .output()
            .map_err(|source| EngineError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !matches!(output.status.code(), Some(0 | 1)) {
            return Err(EngineError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let reports = parse_reports(&output.stdout)?;
        log::debug!("Lint engine returned {} file report(s)", reports.len());
        Ok(reports)
    }
}

/// Parse the JSON formatter's output; empty output means no files
pub fn parse_reports(stdout: &[u8]) -> Result<Vec<ViolationReport>, EngineError> {
    let text = String::from_utf8_lossy(stdout);
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(text)?)
}
