//! Character classification for navigation

/// Character categories for whole-word movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Whitespace characters (space, tab, newline, etc.)
    Whitespace,
    /// Alphanumeric characters and underscore
    Alphanumeric,
    /// Symbols and punctuation
    Symbol,
}

/// Classify a character for whole-word boundary detection
pub fn classify_char(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Alphanumeric
    } else {
        CharClass::Symbol
    }
}

/// Check if a character forms the interior of a subword segment
/// (ASCII letters and digits only)
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Check if a character separates segments within an identifier
/// (`_` and `-` join a word but belong to no segment)
pub fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

/// Check if a character can appear anywhere in an identifier
pub fn is_identifier_char(c: char) -> bool {
    is_word_char(c) || is_separator(c)
}

/// Check if a character is an ASCII capital letter
pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}
