//! Lister - finds existing whole-file disable directives
//!
//! Walks a project's source files, reads the first line of each, and
//! inverts the directives it finds into a rule -> files index.
//!
//! # Examples
//!
//! ```no_run
//! use lintmute::config::ScanConfig;
//! use lintmute::lister::Lister;
//!
//! let lister = Lister::new("test/fixtures/list", &ScanConfig::default()).unwrap();
//! for (rule, files) in lister.list().unwrap().iter() {
//!     println!("{rule}: {}", files.len());
//! }
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::core::models::{DirectiveLine, RuleFileIndex};
use crate::core::services::{IgnoreSet, is_hashbang};
use crate::paths;

/// Errors that can occur while scanning
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error reading the ignore file
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Error walking directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Scanner for first-line disable directives
#[derive(Debug)]
pub struct Lister {
    root: PathBuf,
    extensions: Vec<String>,
    ignore: IgnoreSet,
}

impl Lister {
    /// Create a lister rooted at `root`, loading its ignore file
    pub fn new(root: impl AsRef<Path>, scan: &ScanConfig) -> Result<Self, ScanError> {
        let root = checked_root(root.as_ref())?;
        let ignore = load_ignore(&root, scan)?;
        Ok(Self {
            root,
            extensions: scan.extensions.clone(),
            ignore,
        })
    }

    /// Create a lister with an explicit ignore set
    pub fn with_ignore(
        root: impl AsRef<Path>,
        extensions: Vec<String>,
        ignore: IgnoreSet,
    ) -> Result<Self, ScanError> {
        Ok(Self {
            root: checked_root(root.as_ref())?,
            extensions,
            ignore,
        })
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the active ignore patterns
    #[must_use]
    pub const fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Source files under the root, relative to it, in traversal order.
    ///
    /// Traversal is sorted by file name so the order is stable. Ignored
    /// directories are not descended into, and only regular files are
    /// returned (a directory named `weird.js` is skipped).
    pub fn source_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let root = &self.root;
        let mut files = Vec::new();

        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
        for entry in walker.into_iter().filter_entry(|e| {
            // Don't filter the root directory itself
            if e.depth() == 0 {
                return true;
            }
            let relative = e.path().strip_prefix(root).unwrap_or_else(|_| e.path());
            !self.ignore.is_ignored(relative)
        }) {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.has_source_extension(entry.path()) {
                continue;
            }

            let path = entry.path();
            files.push(path.strip_prefix(root).unwrap_or(path).to_path_buf());
        }

        Ok(files)
    }

    /// Build the rule -> files index for the project.
    ///
    /// File paths are the root joined with each file's relative path.
    /// Files that cannot be read are logged and skipped.
    pub fn list(&self) -> Result<RuleFileIndex, ScanError> {
        let mut index = RuleFileIndex::new();

        for relative in self.source_files()? {
            let path = self.root.join(&relative);
            let first_line = match read_directive_line(&path) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                },
            };

            if let Some(directive) = DirectiveLine::parse(&first_line) {
                log::debug!("{}: {} rule(s) disabled", path.display(), directive.rule_ids().len());
                index.add_all(directive.rule_ids(), &path);
            }
        }

        Ok(index)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

fn checked_root(root: &Path) -> Result<PathBuf, ScanError> {
    let root = root.to_path_buf();
    if !root.exists() {
        return Err(ScanError::RootNotFound(root));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }
    Ok(root)
}

/// Load ignore patterns for `root`, falling back to the configured defaults
pub fn load_ignore(root: &Path, scan: &ScanConfig) -> Result<IgnoreSet, ScanError> {
    let path = paths::ignore_file(root, &scan.ignore_file);
    match fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("Using ignore patterns from {}", path.display());
            Ok(IgnoreSet::from_gitignore(&content))
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Ok(IgnoreSet::from_patterns(&scan.default_ignore))
        },
        Err(e) => Err(e.into()),
    }
}

/// Read the line a whole-file directive sits on, without its terminator.
///
/// That is the first line, or the second when the first is a `#!` hashbang.
/// Invalid UTF-8 is replaced lossily.
pub fn read_directive_line(path: &Path) -> io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let first = read_line_lossy(&mut reader)?;
    if is_hashbang(&first) {
        return read_line_lossy(&mut reader);
    }
    Ok(first)
}

fn read_line_lossy(reader: &mut impl BufRead) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_until(b'\n', &mut bytes)?;

    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
