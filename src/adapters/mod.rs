//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `eslint/` - Runs ESLint as a child process and negotiates its version

pub mod eslint;

pub use eslint::{EngineApi, EslintCli};
