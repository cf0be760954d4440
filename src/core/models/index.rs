//! Reverse index from rule id to the files that disable it

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::RuleIdSet;

/// Rule id -> files whose first line disables that rule.
///
/// Keys iterate in sorted order; each file list keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleFileIndex {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

impl RuleFileIndex {
    /// Create an empty index
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Record that `file` disables `rule_id`
    pub fn add(&mut self, rule_id: &str, file: impl Into<PathBuf>) {
        self.entries.entry(rule_id.to_string()).or_default().push(file.into());
    }

    /// Record every rule of a directive for one file, in declared order
    pub fn add_all(&mut self, rule_ids: &RuleIdSet, file: &Path) {
        for id in rule_ids.iter() {
            self.add(id, file);
        }
    }

    /// Files disabling a rule, if any
    #[must_use]
    pub fn files_for(&self, rule_id: &str) -> Option<&[PathBuf]> {
        self.entries.get(rule_id).map(Vec::as_slice)
    }

    /// Iterate `(rule, files)` pairs in rule order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.entries.iter().map(|(rule, files)| (rule.as_str(), files.as_slice()))
    }

    /// Number of distinct rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no rule is disabled anywhere
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
