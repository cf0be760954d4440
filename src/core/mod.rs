//! Core domain logic for lintmute
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RuleIdSet`, `DirectiveLine`, `ViolationReport`)
//! - `services/` - Directive rewriting and ignore matching
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
