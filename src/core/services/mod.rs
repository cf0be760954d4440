//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`rewrite`] - Merge rule ids into a file's first-line directive
//! - [`ignore`] - Match scan entries against ignore patterns

pub mod ignore;
pub mod rewrite;

pub use ignore::{DEFAULT_IGNORE, IgnoreSet};
pub use rewrite::{Rewrite, RewriteAction, apply, is_hashbang, split_first_line, split_preamble};
