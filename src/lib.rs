//! lintmute - Bulk-suppress ESLint errors with file-level disable directives
//!
//! This library runs a lint engine over a project and adds
//! `/* eslint-disable ... */` first lines for every rule a file violates,
//! and lists which files already disable which rules.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod lister;
pub mod output;
pub mod paths;
pub mod suppressor;
