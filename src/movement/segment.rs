//! Identifier segmentation
//!
//! Splits a compound identifier into its sub-units at case transitions and
//! separators: `getHTTPResponse` becomes `get`, `HTTP`, `Response`;
//! `snake_case_name` becomes `snake`, `case`, `name`.

use super::classify::{is_separator, is_upper, is_word_char};

/// One sub-unit of a compound identifier
///
/// A half-open `[start, end)` character range within the word the segment
/// was computed from. Segments are produced left to right, never overlap,
/// and jointly cover every word character of the word; separators belong
/// to no segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First character of the segment
    pub start: usize,
    /// One past the last character of the segment
    pub end: usize,
}

/// Split an identifier into segments
///
/// Any word with at least one ASCII letter or digit yields at least one
/// segment; a word made only of separators or punctuation yields none.
///
/// # Examples
/// ```rust
/// use subword_nav::movement::split_segments;
///
/// let segs = split_segments("fooBar");
/// assert_eq!(segs.len(), 2);
/// assert_eq!((segs[0].start, segs[0].end), (0, 3)); // "foo"
/// assert_eq!((segs[1].start, segs[1].end), (3, 6)); // "Bar"
/// ```
pub fn split_segments(word: &str) -> Vec<Segment> {
    let chars: Vec<char> = word.chars().collect();
    segments_of(&chars)
}

/// Single left-to-right pass over a character slice
pub(crate) fn segments_of(chars: &[char]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        // Separators and punctuation start no segment
        if !is_word_char(chars[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut prev_upper = is_upper(chars[i]);
        i += 1;

        while i < chars.len() {
            let c = chars[i];
            if !is_word_char(c) {
                break;
            }
            let curr_upper = is_upper(c);

            // lower -> upper: a new word starts here ("get|Response")
            if !prev_upper && curr_upper {
                break;
            }

            // upper -> lower: if the uppercase run ending just before this
            // character has length >= 2, it is an acronym followed by a
            // capitalized word. The run's last capital belongs to the next
            // segment ("HTTP|Response").
            if prev_upper && !curr_upper {
                let mut run_start = i - 1;
                while run_start > start && is_upper(chars[run_start - 1]) {
                    run_start -= 1;
                }
                if i - run_start >= 2 {
                    i -= 1;
                    break;
                }
            }

            prev_upper = curr_upper;
            i += 1;
        }

        segments.push(Segment { start, end: i });
    }

    segments
}
