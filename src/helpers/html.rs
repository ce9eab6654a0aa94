//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FIRST_PARAGRAPH: Regex = Regex::new(r"(?s)<p>(.*?)</p>").unwrap();
    static ref ANCHOR: Regex = Regex::new(r"(?s)<a(?:\s[^>]*)?>(.*?)</a>").unwrap();
}

/// Build the preview text from rendered HTML.
///
/// Takes the inner HTML of the first `<p>` element, unwraps any links in
/// it and trims surrounding whitespace. Empty when there is no paragraph.
pub fn preview(html: &str) -> String {
    first_paragraph(html)
        .map(|p| strip_links(p).trim().to_string())
        .unwrap_or_default()
}

/// Inner HTML of the first `<p>...</p>` element
pub fn first_paragraph(html: &str) -> Option<&str> {
    FIRST_PARAGRAPH
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Replace `<a ...>text</a>` with `text`
pub fn strip_links(s: &str) -> String {
    ANCHOR.replace_all(s, "$1").into_owned()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
