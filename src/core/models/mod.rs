//! Domain models for lintmute
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RuleIdSet`] - Deduplicated rule identifiers
//! - [`DirectiveLine`] - A parsed `/* eslint-disable ... */` first line
//! - [`ViolationReport`] - Per-file output of the lint engine
//! - [`RuleFileIndex`] - Rule id -> files that disable it

mod directive;
mod index;
mod report;
mod rule_set;

pub use directive::{BYTE_ORDER_MARK, CommentStyle, DISABLE_KEYWORD, DirectiveLine};
pub use index::RuleFileIndex;
pub use report::{LintMessage, SEVERITY_ERROR, SEVERITY_WARNING, ViolationReport};
pub use rule_set::{RuleIdSet, compare_rule_ids};
