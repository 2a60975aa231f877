//! Host editor integration
//!
//! The navigation core is pure; everything an editor must supply is
//! collected behind the narrow [`EditorHost`] trait, so integrations stay
//! thin and the core stays testable on its own. A host binds its
//! word-navigation keys to [`execute_navigation`] and implements four
//! operations: expose the current line and caret, reposition the caret,
//! run its default word motion, and report whether subword navigation is
//! enabled for the active file.

pub mod filter;

pub use filter::FileFilter;

use crate::movement::{navigate, Direction};

/// Interface a host editor exposes to the navigation engine
pub trait EditorHost {
    /// Current line text and the caret's character offset within it
    fn current_line(&self) -> (&str, usize);

    /// Reposition the caret, collapsing any selection
    fn apply_offset(&mut self, offset: usize);

    /// Run the host's built-in whole-word navigation
    fn fallback(&mut self, direction: Direction);

    /// Whether subword navigation applies to the active file
    fn subword_enabled(&self) -> bool;
}

/// Handle one navigation request
///
/// Checks enablement, asks the core for a subword stop, and routes the
/// result: a computed offset repositions the caret, a deferral invokes the
/// host's default word motion.
pub fn execute_navigation<H: EditorHost>(host: &mut H, direction: Direction) {
    if !host.subword_enabled() {
        host.fallback(direction);
        return;
    }

    let (text, caret) = host.current_line();
    match navigate(text, caret, direction) {
        Some(offset) => host.apply_offset(offset),
        None => host.fallback(direction),
    }
}
