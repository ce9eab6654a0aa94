//! Content module - reads entries and turns them into renderable records

mod entry;
mod markdown;
pub mod reader;
pub mod transformer;

pub use entry::{ProcessedEntry, RawEntry};
pub use markdown::MarkdownRenderer;
pub use transformer::{process_entries, process_entry, EntryError};
