//! Entry models

/// One unprocessed source file, as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// File name only, e.g. `2024-03-07_hello.md`
    pub filename: String,

    /// Full file contents
    pub content: String,
}

impl RawEntry {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// An entry ready to be rendered into pages and the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEntry {
    /// Slug taken from the file name
    pub url: String,

    /// Display date, e.g. `7 mar. 2024`
    pub date: String,

    /// Title line, trimmed
    pub title: String,

    /// Plain-text excerpt of the first paragraph
    pub preview: String,

    /// Rendered body
    pub html_content: String,
}
