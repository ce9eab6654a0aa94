//! Entry reader - loads raw entries from the entries (and drafts) folders

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::RawEntry;

/// Read every markdown entry in `entries_dir`, plus `drafts_dir` when given.
///
/// The result is sorted by file name, descending, so that the date prefix
/// puts the newest entry first regardless of which folder it came from.
pub fn read_entries(entries_dir: &Path, drafts_dir: Option<&Path>) -> Result<Vec<RawEntry>> {
    let mut entries = read_dir_entries(entries_dir)?;

    if let Some(drafts_dir) = drafts_dir {
        let drafts = read_dir_entries(drafts_dir)?;
        tracing::debug!("Read {} drafts from {:?}", drafts.len(), drafts_dir);
        entries.extend(drafts);
    }

    entries.sort_by(|a, b| b.filename.cmp(&a.filename));

    Ok(entries)
}

/// Read the markdown files directly inside `dir` (no recursion)
fn read_dir_entries(dir: &Path) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry.with_context(|| format!("Failed to list entries in {:?}", dir))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let filename = entry.file_name().to_string_lossy().to_string();
        tracing::debug!("Read entry {}", filename);

        entries.push(RawEntry { filename, content });
    }

    Ok(entries)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
