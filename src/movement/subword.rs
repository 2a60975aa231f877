//! Subword navigation across a line of text
//!
//! Given a caret offset and a direction, computes the next caret stop at a
//! segment boundary inside the current identifier, or the edge of the
//! neighboring word. `None` always means "defer to whole-word navigation";
//! it is a valid outcome, not an error.
//!
//! All offsets are character indices into the line. Each call is a pure
//! function of its arguments; nothing persists between calls.

use super::classify::{is_identifier_char, is_separator, is_word_char};
use super::segment::{segments_of, Segment};

/// Caret movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Maximal run of identifier characters around an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBounds {
    /// First character of the word
    pub start: usize,
    /// One past the last character of the word
    pub end: usize,
}

/// Find the identifier word containing `position`
///
/// Scans left and right from `position` while characters are identifier
/// characters (letters, digits, `_`, `-`). Returns `None` when `position`
/// is out of range, sits outside any identifier run, or the run contains
/// no letter or digit (separator-only runs are not words).
pub fn find_word_boundaries(text: &str, position: usize) -> Option<WordBounds> {
    let chars: Vec<char> = text.chars().collect();
    bounds_at(&chars, position)
}

fn bounds_at(chars: &[char], position: usize) -> Option<WordBounds> {
    if position > chars.len() {
        return None;
    }

    let mut start = position;
    while start > 0 && is_identifier_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = position;
    while end < chars.len() && is_identifier_char(chars[end]) {
        end += 1;
    }

    if start == end {
        return None;
    }
    // A run of bare separators ("__") is not a word
    if !chars[start..end].iter().copied().any(is_word_char) {
        return None;
    }

    Some(WordBounds { start, end })
}

/// Bounds of the first word at or after `from`
fn next_word_bounds(chars: &[char], from: usize) -> Option<WordBounds> {
    let mut pos = from;
    while pos < chars.len() && !is_identifier_char(chars[pos]) {
        pos += 1;
    }
    if pos >= chars.len() {
        return None;
    }
    bounds_at(chars, pos)
}

/// Bounds of the last word strictly before `before`
fn previous_word_bounds(chars: &[char], before: usize) -> Option<WordBounds> {
    let mut pos = before.checked_sub(1)?;
    while !is_identifier_char(chars[pos]) {
        if pos == 0 {
            return None;
        }
        pos -= 1;
    }
    bounds_at(chars, pos)
}

/// Compute the next subword caret stop
///
/// Returns the new caret offset, or `None` to signal that the caller
/// should fall back to its default whole-word navigation. `None` covers:
/// an out-of-range `position`, no word in the travel direction, and a
/// caret in a word with no internal structure (a single segment).
///
/// # Examples
/// ```rust
/// use subword_nav::movement::{navigate, Direction};
///
/// assert_eq!(navigate("fooBarBaz qux", 0, Direction::Right), Some(3));
/// assert_eq!(navigate("fooBarBaz qux", 3, Direction::Right), Some(6));
/// assert_eq!(navigate("qux", 0, Direction::Right), None); // single segment
/// ```
pub fn navigate(text: &str, position: usize, direction: Direction) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    if position > chars.len() {
        return None;
    }

    let bounds = match bounds_at(&chars, position) {
        Some(b) => b,
        // Caret sits in whitespace or punctuation
        None => {
            return match direction {
                Direction::Right => {
                    let next = next_word_bounds(&chars, position)?;
                    let segments = segments_of(&chars[next.start..next.end]);
                    if segments.len() > 1 {
                        // Enter the word partway: stop after its first segment
                        Some(next.start + segments[0].end)
                    } else {
                        Some(next.end)
                    }
                }
                Direction::Left => previous_word_bounds(&chars, position).map(|w| w.end),
            };
        }
    };

    let segments = segments_of(&chars[bounds.start..bounds.end]);
    // No internal structure: whole-word navigation handles it better
    if segments.len() < 2 {
        return None;
    }

    let abs: Vec<Segment> = segments
        .iter()
        .map(|s| Segment {
            start: bounds.start + s.start,
            end: bounds.start + s.end,
        })
        .collect();

    let on_separator = position < bounds.end && is_separator(chars[position]);

    match direction {
        Direction::Right => {
            if position == bounds.start {
                return Some(abs[1].start);
            }
            if position == bounds.end {
                return next_word_bounds(&chars, bounds.end).map(|w| w.start);
            }
            if on_separator {
                let mut idx = position + 1;
                while idx < bounds.end && is_separator(chars[idx]) {
                    idx += 1;
                }
                if idx < bounds.end {
                    if let Some(seg) = abs.iter().find(|s| s.start <= idx && idx < s.end) {
                        return Some(seg.end);
                    }
                }
                // Only separators remain to the right
                return Some(bounds.end);
            }
            // A caret on a segment's first character advances like one in
            // its interior, so a rightward walk visits every segment start
            if let Some(i) = abs.iter().position(|s| s.start <= position && position < s.end) {
                return if i + 1 < abs.len() {
                    Some(abs[i + 1].start)
                } else {
                    Some(bounds.end)
                };
            }
            None
        }
        Direction::Left => {
            if position == bounds.start {
                return previous_word_bounds(&chars, bounds.start).map(|w| w.end);
            }
            if position == bounds.end {
                return Some(abs[abs.len() - 1].start);
            }
            if on_separator {
                let mut idx = position;
                while idx > bounds.start && is_separator(chars[idx - 1]) {
                    idx -= 1;
                }
                if idx > bounds.start {
                    let target = idx - 1;
                    if let Some(seg) = abs.iter().find(|s| s.start <= target && target < s.end) {
                        return Some(seg.start);
                    }
                }
                // Only separators remain to the left
                return Some(bounds.start);
            }
            if let Some(seg) = abs.iter().find(|s| s.start < position && position < s.end) {
                return Some(seg.start);
            }
            // Caret between two segments: snap to the start of the one on
            // the left
            abs.iter().rev().find(|s| s.end <= position).map(|s| s.start)
        }
    }
}
