//! Rule identifier sets
//!
//! A [`RuleIdSet`] keeps rule identifiers unique while remembering the order
//! they were first inserted. Directives read from disk keep their declared
//! order; directives written back are serialized through [`RuleIdSet::sorted`].

use std::cmp::Ordering;

use serde::{Serialize, Serializer};

/// Insertion-ordered set of lint rule identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleIdSet {
    ids: Vec<String>,
}

impl RuleIdSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Insert a rule id, returning `false` if it was already present.
    ///
    /// Surrounding whitespace is trimmed; blank ids are never stored.
    pub fn insert(&mut self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref().trim();
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Add every id of `other` that is not already present
    pub fn extend_from(&mut self, other: &Self) {
        for id in &other.ids {
            self.insert(id);
        }
    }

    /// Set union, keeping `self`'s ids first
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }

    /// Check whether a rule id is present
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Check whether every id of `self` is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.ids.iter().all(|id| other.contains(id))
    }

    /// Number of rule ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set holds no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Ids in ascending locale-style order (see [`compare_rule_ids`])
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_by(|a, b| compare_rule_ids(a, b));
        ids
    }
}

impl<S: AsRef<str>> FromIterator<S> for RuleIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleIdSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl Serialize for RuleIdSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

/// Compare two rule ids the way a locale-aware string comparison would.
///
/// Primary order is case-insensitive, with punctuation sorting before digits
/// and digits before letters (so `@scope/rule` precedes `camelcase`).
/// Ties fall back to plain byte order to keep the result total.
#[must_use]
pub fn compare_rule_ids(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(collation_key).cmp(b.chars().map(collation_key));
    primary.then_with(|| a.cmp(b))
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}
