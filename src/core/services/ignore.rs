//! Ignore patterns for source scans
//!
//! Reads a `.gitignore`-style file into a set of glob patterns. This is a
//! deliberately small subset of gitignore:
//!
//! - blank lines and `#` comments are skipped
//! - a leading `/` is stripped and anchors the pattern to the scan root
//! - a trailing `/` becomes `/*` (everything inside the directory)
//! - `!` negations are not supported and are skipped
//! - a pattern without any `/` that was not anchored also matches an
//!   entry's file name at any depth (`*.log`, `coverage`)

use std::path::Path;

use glob::{MatchOptions, Pattern};

/// Default patterns when no ignore file exists
pub const DEFAULT_IGNORE: &[&str] = &["node_modules/*"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One compiled ignore pattern
#[derive(Debug, Clone)]
struct IgnorePattern {
    pattern: Pattern,
    match_file_name: bool,
}

/// A compiled set of ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    /// Build a set from already-transformed glob patterns.
    ///
    /// Invalid globs are logged and dropped.
    pub fn from_patterns<S: AsRef<str>>(patterns: impl IntoIterator<Item = S>) -> Self {
        let mut set = Self::default();
        for pattern in patterns {
            set.push(pattern.as_ref(), false);
        }
        set
    }

    /// Parse the contents of a `.gitignore`-style file
    #[must_use]
    pub fn from_gitignore(content: &str) -> Self {
        let mut set = Self::default();

        for line in content.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('!') {
                log::debug!("Skipping unsupported negated ignore pattern: {line}");
                continue;
            }

            let (anchored, body) = match line.strip_prefix('/') {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let pattern = match body.strip_suffix('/') {
                Some(dir) => format!("{dir}/*"),
                None => body.to_string(),
            };
            let match_file_name = !anchored && !pattern.contains('/');
            set.push(&pattern, match_file_name);
        }

        set
    }

    /// The built-in fallback set
    #[must_use]
    pub fn default_set() -> Self {
        Self::from_patterns(DEFAULT_IGNORE)
    }

    fn push(&mut self, raw: &str, match_file_name: bool) {
        match Pattern::new(raw) {
            Ok(pattern) => self.patterns.push(IgnorePattern {
                pattern,
                match_file_name,
            }),
            Err(e) => log::warn!("Ignoring invalid ignore pattern '{raw}': {e}"),
        }
    }

    /// Whether an entry (path relative to the scan root) is ignored
    #[must_use]
    pub fn is_ignored(&self, relative: &Path) -> bool {
        let normalized = relative.to_string_lossy().replace('\\', "/");
        let file_name = relative.file_name().map(|n| n.to_string_lossy());

        self.patterns.iter().any(|p| {
            p.pattern.matches_with(&normalized, MATCH_OPTIONS)
                || (p.match_file_name
                    && file_name.as_deref().is_some_and(|name| p.pattern.matches_with(name, MATCH_OPTIONS)))
        })
    }

    /// Number of active patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The active patterns as strings
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.pattern.as_str())
    }
}
