//! List site entries

use anyhow::Result;

use crate::Site;

/// Print every entry, newest first
pub fn run(site: &Site, include_drafts: bool) -> Result<()> {
    let entries = site.load_entries(include_drafts)?;

    println!("Entries ({}):", entries.len());
    for entry in entries {
        println!("  {} - {} [{}]", entry.date, entry.title, entry.url);
    }

    Ok(())
}
