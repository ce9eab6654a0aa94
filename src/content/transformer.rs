//! Entry transformer - turns a raw entry into a renderable one

use thiserror::Error;

use super::{MarkdownRenderer, ProcessedEntry, RawEntry};
use crate::helpers;

/// Separator between the title line and the body of an entry
pub const TITLE_SEPARATOR: &str = "---";

/// Malformed entry errors. Any of these aborts the build.
#[derive(Debug, Error)]
pub enum EntryError {
    /// File name is not `<date>_<slug>.<ext>`
    #[error("entry file name '{0}' has no '_' between date and slug")]
    MissingDateSeparator(String),

    /// Content has no title separator
    #[error("entry '{0}' has no '---' between title and body")]
    MissingTitleSeparator(String),

    /// Date prefix is not `YYYY-MM-DD`
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("month {month} out of range in date '{date}'")]
    MonthOutOfRange { date: String, month: usize },
}

/// Process one raw entry
pub fn process_entry(
    renderer: &MarkdownRenderer,
    entry: &RawEntry,
) -> Result<ProcessedEntry, EntryError> {
    // Date and url from the file name
    let (date_raw, rest) = entry
        .filename
        .split_once('_')
        .ok_or_else(|| EntryError::MissingDateSeparator(entry.filename.clone()))?;
    let url = rest.split('.').next().unwrap_or(rest);

    // Title and body from the content
    let (title, body) = entry
        .content
        .split_once(TITLE_SEPARATOR)
        .ok_or_else(|| EntryError::MissingTitleSeparator(entry.filename.clone()))?;

    let date = helpers::display_date(date_raw)?;
    let html_content = renderer.render(body.trim());
    let preview = helpers::preview(&html_content);

    Ok(ProcessedEntry {
        url: url.to_string(),
        date,
        title: title.trim().to_string(),
        preview,
        html_content,
    })
}

/// Process every entry, stopping at the first malformed one
pub fn process_entries(
    renderer: &MarkdownRenderer,
    entries: &[RawEntry],
) -> Result<Vec<ProcessedEntry>, EntryError> {
    entries
        .iter()
        .map(|entry| process_entry(renderer, entry))
        .collect()
}
