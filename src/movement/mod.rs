//! Movement semantics for subword navigation
//!
//! ## Design
//!
//! Two layers, leaves first:
//!
//! - [`segment`] partitions an identifier into sub-units at case
//!   transitions (`camelCase`, `PascalCase`, `UPPER_SNAKE`) and at `_`/`-`
//!   separators.
//! - [`subword`] locates the identifier around the caret and uses the
//!   segmentation to pick the next caret stop, or reports `None` so the
//!   caller can fall back to whole-word motion.
//!
//! [`boundaries`] provides that whole-word fallback: class-based motion
//! where `hello_world` is one word and `foo->bar` is three.
//!
//! Everything operates on character offsets within a single line and is a
//! pure function of its inputs.
//!
//! ## Modules
//!
//! - [`classify`] - Character classification functions
//! - [`segment`] - Identifier segmentation
//! - [`subword`] - Subword caret movement
//! - [`boundaries`] - Whole-word fallback movement

pub mod boundaries;
pub mod classify;
pub mod segment;
pub mod subword;

// Re-export commonly used types
pub use classify::{classify_char, CharClass};
pub use segment::{split_segments, Segment};
pub use subword::{find_word_boundaries, navigate, Direction, WordBounds};
