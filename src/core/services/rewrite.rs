//! Directive rewriting - merges rule ids into a file's first line
//!
//! Pure text transformation. Everything after the directive line is carried
//! over byte-for-byte. A byte order mark and a `#!` hashbang line must stay
//! at the top of the file, so the directive line is the first line after
//! them.

use serde::Serialize;

use crate::core::models::{BYTE_ORDER_MARK, DirectiveLine, RuleIdSet};

/// What a rewrite did to the file text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteAction {
    /// A new directive line was inserted above the original content
    Prepended,
    /// An existing directive line was replaced with the merged set
    Merged,
    /// The existing directive already covered every rule
    Unchanged,
}

impl std::fmt::Display for RewriteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prepended => write!(f, "prepended"),
            Self::Merged => write!(f, "merged"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Result of [`apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Action taken
    pub action: RewriteAction,
    /// Full rewritten file content
    pub content: String,
    /// Rule ids declared by the resulting directive
    pub rule_ids: RuleIdSet,
}

impl Rewrite {
    /// Whether the content differs from the input
    #[must_use]
    pub fn changed(&self) -> bool {
        self.action != RewriteAction::Unchanged
    }
}

const HASHBANG: &str = "#!";

/// Whether a first line is an interpreter line, ignoring a byte order mark
#[must_use]
pub fn is_hashbang(line: &str) -> bool {
    line.trim_start_matches(BYTE_ORDER_MARK).starts_with(HASHBANG)
}

/// Split content into `(preamble, body)`.
///
/// The preamble is a leading byte order mark plus a hashbang line with its
/// terminator, either of which may be absent. The body starts at the line
/// a directive belongs on.
#[must_use]
pub fn split_preamble(content: &str) -> (&str, &str) {
    let bom_len = if content.starts_with(BYTE_ORDER_MARK) {
        BYTE_ORDER_MARK.len_utf8()
    } else {
        0
    };
    let after_bom = &content[bom_len..];
    if !after_bom.starts_with(HASHBANG) {
        return content.split_at(bom_len);
    }
    let hashbang_len = after_bom.find('\n').map_or(after_bom.len(), |newline| newline + 1);
    content.split_at(bom_len + hashbang_len)
}

/// Split content into `(first_line, terminator, rest)`.
///
/// `first_line` excludes the terminator; `terminator` is `"\r\n"`, `"\n"`
/// or empty when the file has a single unterminated line.
#[must_use]
pub fn split_first_line(content: &str) -> (&str, &str, &str) {
    match content.find('\n') {
        Some(newline) => {
            let rest = &content[newline + 1..];
            let line = &content[..newline];
            match line.strip_suffix('\r') {
                Some(stripped) => (stripped, "\r\n", rest),
                None => (line, "\n", rest),
            }
        },
        None => (content, "", ""),
    }
}

/// Merge `new_ids` into the directive line of `content`.
///
/// Without a directive, a sorted block-comment directive is inserted above
/// the body using the file's own line terminator. With one, the line is
/// replaced by the sorted union of old and new ids. The preamble is never
/// moved.
#[must_use]
pub fn apply(content: &str, new_ids: &RuleIdSet) -> Rewrite {
    let (preamble, body) = split_preamble(content);
    let (first_line, terminator, rest) = split_first_line(body);
    let newline = if terminator == "\r\n" || preamble.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };
    // An unterminated hashbang line needs a break before the directive.
    let joiner = if is_hashbang(preamble) && !preamble.ends_with('\n') {
        newline
    } else {
        ""
    };

    match DirectiveLine::parse(first_line) {
        Some(existing) => {
            let merged = existing.merged_with(new_ids);
            let rendered = merged.render();
            let action = if rendered == first_line {
                RewriteAction::Unchanged
            } else {
                RewriteAction::Merged
            };
            Rewrite {
                action,
                content: format!("{preamble}{rendered}{terminator}{rest}"),
                rule_ids: merged.rule_ids().clone(),
            }
        },
        None => {
            let directive = DirectiveLine::new(new_ids.clone());
            Rewrite {
                action: RewriteAction::Prepended,
                content: format!("{preamble}{joiner}{}{newline}{body}", directive.render()),
                rule_ids: directive.rule_ids().clone(),
            }
        },
    }
}
