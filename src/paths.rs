//! Centralized path definitions for lintmute
//!
//! Every function takes the project root explicitly; nothing here consults
//! the process working directory.
//!
//! ```text
//! project/
//! ├── .lintmute.toml                      # Optional project config
//! ├── .gitignore                          # Ignore patterns for `list`
//! ├── package.json                        # Declared eslint version range
//! └── node_modules/eslint/package.json    # Installed eslint version
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".lintmute.toml";

/// Default ignore file consulted by `list`
pub const IGNORE_FILE: &str = ".gitignore";

/// Package manifest filename
pub const PACKAGE_JSON: &str = "package.json";

/// Location of the installed eslint package, relative to the root
const INSTALLED_ESLINT_DIR: &str = "node_modules/eslint";

/// Get path to `.lintmute.toml`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Get path to the project's `package.json`
#[must_use]
pub fn package_json(root: &Path) -> PathBuf {
    root.join(PACKAGE_JSON)
}

/// Get path to the installed eslint's `package.json`
#[must_use]
pub fn installed_eslint_manifest(root: &Path) -> PathBuf {
    root.join(INSTALLED_ESLINT_DIR).join(PACKAGE_JSON)
}

/// Resolve an ignore file name against the root
#[must_use]
pub fn ignore_file(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}
