//! Whole-file disable directives
//!
//! A directive is the first line of a source file that tells ESLint to turn
//! off a list of rules for the entire file:
//!
//! ```text
//! /* eslint-disable no-console, no-undef */
//! /* eslint-disable no-console -- legacy module */
//! // eslint-disable no-console
//! ```
//!
//! Parsing is done with a small scanner rather than a regex so that the
//! keyword boundary is explicit: `eslint-disable-next-line`,
//! `eslint-disable-line` and other suffixed forms never match.
//!
//! # Examples
//!
//! ```
//! use lintmute::core::models::DirectiveLine;
//!
//! let directive = DirectiveLine::parse("/* eslint-disable no-console, semi */").unwrap();
//! assert_eq!(directive.rule_ids().iter().collect::<Vec<_>>(), vec!["no-console", "semi"]);
//!
//! assert!(DirectiveLine::parse("/* eslint-disable-next-line semi */").is_none());
//! ```

use std::fmt;

use super::RuleIdSet;

/// The keyword that opens a whole-file directive
pub const DISABLE_KEYWORD: &str = "eslint-disable";

/// Byte order mark some editors write at the start of a file
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_OPEN: &str = "//";
const DESCRIPTION_SEPARATOR: &str = "--";

/// Comment syntax a directive was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* eslint-disable ... */`
    Block,
    /// `// eslint-disable ...`
    Line,
}

/// A parsed whole-file disable directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine {
    rule_ids: RuleIdSet,
    style: CommentStyle,
    description: Option<String>,
}

impl DirectiveLine {
    /// Build a block-comment directive for a set of rule ids
    #[must_use]
    pub const fn new(rule_ids: RuleIdSet) -> Self {
        Self {
            rule_ids,
            style: CommentStyle::Block,
            description: None,
        }
    }

    /// Parse the first line of a file.
    ///
    /// Returns `None` when the line is not a whole-file directive, including
    /// when the rule list is empty, a block comment is left unclosed, or
    /// anything but whitespace follows the block comment. A leading byte
    /// order mark is skipped.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start_matches(BYTE_ORDER_MARK).trim();

        let (style, rest) = if let Some(rest) = line.strip_prefix(BLOCK_OPEN) {
            let close = rest.find(BLOCK_CLOSE)?;
            if !rest[close + BLOCK_CLOSE.len()..].trim().is_empty() {
                return None;
            }
            (CommentStyle::Block, &rest[..close])
        } else if let Some(rest) = line.strip_prefix(LINE_OPEN) {
            (CommentStyle::Line, rest)
        } else {
            return None;
        };

        let body = rest.trim_start().strip_prefix(DISABLE_KEYWORD)?;

        // The keyword must end at whitespace, which rules out `-next-line`.
        if !body.starts_with(char::is_whitespace) {
            return None;
        }

        let (list, description) = split_description(body);
        let rule_ids: RuleIdSet = list.split(',').collect();
        if rule_ids.is_empty() {
            return None;
        }

        Some(Self {
            rule_ids,
            style,
            description,
        })
    }

    /// Rule ids in the order the directive declares them
    #[must_use]
    pub const fn rule_ids(&self) -> &RuleIdSet {
        &self.rule_ids
    }

    /// Comment style the directive was written in
    #[must_use]
    pub const fn style(&self) -> CommentStyle {
        self.style
    }

    /// Whether this is a `/* ... */` directive
    #[must_use]
    pub const fn is_block_comment(&self) -> bool {
        matches!(self.style, CommentStyle::Block)
    }

    /// Free-text reason after ` -- `, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    /// Merge additional rule ids into a new block-comment directive
    #[must_use]
    pub fn merged_with(&self, new_ids: &RuleIdSet) -> Self {
        Self::new(new_ids.union(&self.rule_ids)).with_description(self.description.clone())
    }

    /// Render in block-comment form with rule ids sorted.
    ///
    /// The output never includes a line terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let ids = self.rule_ids.sorted().join(", ");
        match &self.description {
            Some(description) => {
                format!("{BLOCK_OPEN} {DISABLE_KEYWORD} {ids} {DESCRIPTION_SEPARATOR} {description} {BLOCK_CLOSE}")
            },
            None => format!("{BLOCK_OPEN} {DISABLE_KEYWORD} {ids} {BLOCK_CLOSE}"),
        }
    }
}

impl fmt::Display for DirectiveLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Split `ids -- description` into its two halves
fn split_description(body: &str) -> (&str, Option<String>) {
    let mut search_from = 0;
    while let Some(offset) = body[search_from..].find(DESCRIPTION_SEPARATOR) {
        let at = search_from + offset;
        let preceded_by_space = body[..at].ends_with(char::is_whitespace);
        let after = &body[at + DESCRIPTION_SEPARATOR.len()..];
        if preceded_by_space && (after.is_empty() || after.starts_with(char::is_whitespace)) {
            let description = after.trim();
            let description = (!description.is_empty()).then(|| description.to_string());
            return (&body[..at], description);
        }
        search_from = at + DESCRIPTION_SEPARATOR.len();
    }
    (body, None)
}
