//! Create a new entry

use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::transformer::TITLE_SEPARATOR;
use crate::Site;

/// Create a new entry (or draft) dated today
pub fn run(site: &Site, title: &str, draft: bool) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    create_entry(site, title, draft, today)
}

/// Create `<date>_<slug>.md` holding the title and an empty body
pub fn create_entry(site: &Site, title: &str, draft: bool, date: NaiveDate) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = if draft {
        &site.drafts_dir
    } else {
        &site.entries_dir
    };
    fs::create_dir_all(target_dir)?;

    let file_path = target_dir.join(format!("{}_{}.md", date.format("%Y-%m-%d"), slug));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("{}\n{}\n\n", title.trim(), TITLE_SEPARATOR))?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
