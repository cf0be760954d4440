//! ESLint version negotiation
//!
//! Decides which command-line shape to use for the installed engine. The
//! installed package is authoritative; the manifest's declared range is the
//! fallback.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde_json::Value;

use crate::paths;

/// First major release that only understands flat config
pub const FLAT_CONFIG_MAJOR: u64 = 9;

// Pre-release and build suffixes are consumed so their numbers are not read
// as majors.
const COMPARATOR_PATTERN: &str =
    r"(<=|>=|<|>|=|\^|~)?\s*v?(\d+)(?:\.[0-9xX*]+){0,2}(?:[-+][0-9A-Za-z.-]*)?";

/// Which engine API the invocation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineApi {
    /// `.eslintrc` era engines (up to 8.x): accept `--ext`
    Eslintrc,
    /// Flat config engines (9.x and later): reject `--ext`
    Flat,
}

impl std::fmt::Display for EngineApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eslintrc => write!(f, "eslintrc"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

impl EngineApi {
    /// Pick the API for a major version; unknown versions assume the newest
    #[must_use]
    pub const fn for_major(major: Option<u64>) -> Self {
        match major {
            Some(major) if major < FLAT_CONFIG_MAJOR => Self::Eslintrc,
            _ => Self::Flat,
        }
    }

    /// Detect the API for the engine used by the project at `root`
    #[must_use]
    pub fn detect(root: &Path) -> Self {
        let major = installed_major(root).or_else(|| declared_major(root));
        match major {
            Some(major) => log::debug!("Detected eslint major version {major}"),
            None => log::debug!("Could not determine eslint version, assuming latest"),
        }
        Self::for_major(major)
    }

    /// Arguments placed between the engine command and the lint target
    #[must_use]
    pub fn args(self, extensions: &[String]) -> Vec<String> {
        let mut args = vec!["--format".to_string(), "json".to_string()];
        if self == Self::Eslintrc && !extensions.is_empty() {
            let list: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();
            args.push("--ext".to_string());
            args.push(list.join(","));
        }
        args
    }
}

/// Major version of `node_modules/eslint`, if installed
#[must_use]
pub fn installed_major(root: &Path) -> Option<u64> {
    let manifest = read_json(&paths::installed_eslint_manifest(root))?;
    manifest.get("version").and_then(Value::as_str).and_then(range_major)
}

/// Major version admitted by the `eslint` range in `package.json`
#[must_use]
pub fn declared_major(root: &Path) -> Option<u64> {
    let manifest = read_json(&paths::package_json(root))?;
    ["devDependencies", "dependencies"]
        .iter()
        .find_map(|section| manifest.get(section)?.get("eslint")?.as_str())
        .and_then(range_major)
}

/// Highest major version a semver range string admits.
///
/// Exclusive upper bounds (`<9`) count as the major below them. Ranges
/// with no numeric comparator (`*`, `latest`) yield `None`.
#[must_use]
pub fn range_major(range: &str) -> Option<u64> {
    let re = Regex::new(COMPARATOR_PATTERN).ok()?;
    re.captures_iter(range)
        .filter_map(|caps| {
            let major: u64 = caps.get(2)?.as_str().parse().ok()?;
            match caps.get(1).map(|op| op.as_str()) {
                Some("<") => major.checked_sub(1),
                _ => Some(major),
            }
        })
        .max()
}

fn read_json(path: &Path) -> Option<Value> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unparseable {}: {e}", path.display());
            None
        },
    }
}
