//! Subword navigation for line editors
//!
//! Splits compound identifiers (`camelCase`, `PascalCase`, `UPPER_SNAKE`)
//! into segments and computes caret stops at segment boundaries. The core
//! is pure and host-agnostic; the [`host`] module provides the narrow
//! interface an editor integrates against.

pub mod host;
pub mod movement;
