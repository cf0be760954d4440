//! Project configuration
//!
//! Settings are read from an optional `.lintmute.toml` at the project root.
//! Every field has a default, so a missing file is equivalent to:
//!
//! ```toml
//! [eslint]
//! command = ["npx", "eslint"]
//!
//! [scan]
//! extensions = ["js", "ts"]
//! ignore_file = ".gitignore"
//! default_ignore = ["node_modules/*"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::DEFAULT_IGNORE;
use crate::paths;

/// Errors loading the project configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Deserialization error
        source: toml::de::Error,
    },
}

/// Top-level project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How to run the lint engine
    #[serde(default)]
    pub eslint: EslintConfig,
    /// How `list` scans the source tree
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Lint engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EslintConfig {
    /// Program followed by leading arguments (e.g. `["npx", "eslint"]`)
    pub command: Vec<String>,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            command: vec!["npx".to_string(), "eslint".to_string()],
        }
    }
}

/// Source scan settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions (without dot) considered source files
    pub extensions: Vec<String>,
    /// Ignore file name, relative to the root
    pub ignore_file: String,
    /// Patterns used when the ignore file is absent
    pub default_ignore: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["js".to_string(), "ts".to_string()],
            ignore_file: paths::IGNORE_FILE.to_string(),
            default_ignore: DEFAULT_IGNORE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Load `.lintmute.toml` from `root`, or defaults when it does not exist
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("No {} in {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Override the engine command with a whitespace-separated string
    #[must_use]
    pub fn with_eslint_command(mut self, command: Option<&str>) -> Self {
        if let Some(command) = command {
            self.eslint.command = command.split_whitespace().map(String::from).collect();
        }
        self
    }

    /// Override the extension list with a comma-separated string
    #[must_use]
    pub fn with_extensions(mut self, extensions: Option<&str>) -> Self {
        if let Some(list) = extensions {
            self.scan.extensions = list
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
        }
        self
    }
}
