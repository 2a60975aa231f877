//! Whole-word fallback movement
//!
//! Default word motion for hosts that have no built-in command of their
//! own. Used when [`navigate`](super::navigate) defers: the caret is
//! outside any identifier with nothing to land on, or the word under it
//! has no internal structure.
//!
//! Words here are runs of a single [`CharClass`]: `hello_world` is one
//! word, `foo->bar` is three (`foo`, `->`, `bar`).

use super::classify::{classify_char, CharClass};

/// Move forward to the start of the next word
///
/// # Examples
/// ```rust
/// use subword_nav::movement::boundaries::next_word;
///
/// assert_eq!(next_word("hello world", 0), 6);
/// assert_eq!(next_word("foo->bar", 0), 3);
/// ```
pub fn next_word(text: &str, start: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if start >= len {
        return len;
    }

    let mut pos = start;
    let start_class = classify_char(chars[pos]);

    // Leave the run the caret is on
    while pos < len && classify_char(chars[pos]) == start_class {
        pos += 1;
    }

    // Then skip whitespace, unless the caret started on whitespace
    if start_class != CharClass::Whitespace {
        while pos < len && classify_char(chars[pos]) == CharClass::Whitespace {
            pos += 1;
        }
    }

    pos
}

/// Move backward to the start of the previous word
///
/// # Examples
/// ```rust
/// use subword_nav::movement::boundaries::prev_word;
///
/// assert_eq!(prev_word("hello world", 11), 6);
/// assert_eq!(prev_word("foo->bar", 8), 5);
/// ```
pub fn prev_word(text: &str, start: usize) -> usize {
    if start == 0 {
        return 0;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = start.min(chars.len());
    pos -= 1;

    // Skip whitespace behind the caret
    while pos > 0 && classify_char(chars[pos]) == CharClass::Whitespace {
        pos -= 1;
    }

    let target_class = classify_char(chars[pos]);
    if target_class == CharClass::Whitespace {
        // Nothing but whitespace before the caret
        return pos + 1;
    }

    // Walk back to the start of the run
    while pos > 0 && classify_char(chars[pos - 1]) == target_class {
        pos -= 1;
    }

    pos
}
