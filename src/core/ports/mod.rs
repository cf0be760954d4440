//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and external
//! systems. Implementations live in the `adapters` module.

mod lint_engine;

pub use lint_engine::{EngineError, LintEngine};
