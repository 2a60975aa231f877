//! File-extension enablement filter
//!
//! Hosts let users scope subword navigation to certain file types. The
//! filter holds an ordered list of extension patterns, each normalized to
//! a leading-dot suffix, and matches them case-insensitively against the
//! basename of the active file. An empty list enables navigation
//! everywhere.

/// Decides whether subword navigation applies to a file
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Normalized lowercase suffixes, including the leading dot
    suffixes: Vec<String>,
}

impl FileFilter {
    /// Build a filter from user-supplied extension patterns
    ///
    /// Accepted forms all normalize to the same suffix: `rs`, `.rs`, and
    /// `*.rs` each match files ending in `.rs`.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = patterns
            .into_iter()
            .map(|p| normalize_pattern(p.as_ref()))
            .collect();
        FileFilter { suffixes }
    }

    /// Check whether navigation is enabled for `file_name`
    ///
    /// Matches against the basename (the part after the last `/`),
    /// ignoring case. With no patterns configured, every file matches.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let basename = file_name.rsplit('/').next().unwrap_or("").to_lowercase();
        self.suffixes.iter().any(|s| basename.ends_with(s.as_str()))
    }

    /// Whether any patterns are configured
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

fn normalize_pattern(pattern: &str) -> String {
    let suffix = if let Some(rest) = pattern.strip_prefix('*') {
        rest.to_string()
    } else if pattern.starts_with('.') {
        pattern.to_string()
    } else {
        format!(".{pattern}")
    };
    suffix.to_lowercase()
}
