//! Generator module - fills the page template for the index and each entry,
//! and builds the RSS feed

mod feed;
mod template;

pub use feed::{make_rss, FeedError, FEED_FILE};
pub use template::{fill, TemplateError};

use crate::config::SiteConfig;
use crate::content::ProcessedEntry;

/// Output subdirectory holding the entry pages
pub const ENTRIES_DIR: &str = "entries";

/// Link back to the index, shown on entry pages only
pub const BACK_HOME: &str =
    r#"<a href="/"><i class="fa fa-arrow-left" aria-hidden="true"></i> Back to index</a>"#;

/// Render the index page listing every entry, in the given order
pub fn make_index(
    template: &str,
    config: &SiteConfig,
    entries: &[ProcessedEntry],
) -> Result<String, TemplateError> {
    let entry_content: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"
            <div class="entry">
                <h1 class="entry-title">
                    <a href="{dir}/{url}.html">{title}</a>
                </h1>
                <span class="entry-date">{date}</span>
                <p>{preview}</p>
            </div>

            <hr>"#,
                dir = ENTRIES_DIR,
                url = entry.url,
                title = entry.title,
                date = entry.date,
                preview = entry.preview,
            )
        })
        .collect();

    fill(
        template,
        &[
            ("title", config.title.as_str()),
            ("preview", config.description.as_str()),
            ("back_home", ""),
            ("entry_content", entry_content.as_str()),
        ],
    )
}

/// Render the page for a single entry
pub fn make_entry(template: &str, entry: &ProcessedEntry) -> Result<String, TemplateError> {
    let entry_content = format!(
        r#"
            <div class="entry">
                <h1 class="entry-title">{title}</h1>
                <span class="entry-date">{date}</span>

                {html_content}
            </div>

            <hr>"#,
        title = entry.title,
        date = entry.date,
        html_content = entry.html_content,
    );

    fill(
        template,
        &[
            ("title", entry.title.as_str()),
            ("preview", entry.preview.as_str()),
            ("back_home", BACK_HOME),
            ("entry_content", entry_content.as_str()),
        ],
    )
}
