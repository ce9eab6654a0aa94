//! Build the static site

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use walkdir::WalkDir;

use crate::generator::{self, ENTRIES_DIR, FEED_FILE};
use crate::Site;

/// Build the site into a fresh output directory.
///
/// Any failure aborts immediately, possibly leaving a partial output
/// directory behind.
pub fn run(site: &Site, include_drafts: bool) -> Result<()> {
    let start = Instant::now();
    let output_dir = &site.output_dir;

    if output_dir.exists() {
        bail!(
            "Output directory {:?} already exists, run `inkpress clean` first",
            output_dir
        );
    }

    // The template directory becomes the output directory
    copy_dir(&site.template_dir, output_dir)?;

    // Entry pages live next to a copy of the entry assets
    let entries_out = output_dir.join(ENTRIES_DIR);
    fs::create_dir(&entries_out)
        .with_context(|| format!("Failed to create {:?}", entries_out))?;
    copy_dir(&site.assets_dir(), &entries_out.join(&site.config.assets_dir))?;

    let entries = site.load_entries(include_drafts)?;
    tracing::info!(
        "Loaded {} entries{}",
        entries.len(),
        if include_drafts { " (with drafts)" } else { "" }
    );

    let template_path = site.template_path();
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template {:?}", template_path))?;

    // Index page
    let index = generator::make_index(&template, &site.config, &entries)?;
    write_file(&output_dir.join("index.html"), &index)?;
    tracing::info!("Generated index.html");

    // Entry pages
    for entry in &entries {
        let page = generator::make_entry(&template, entry)?;
        write_file(&entries_out.join(format!("{}.html", entry.url)), &page)?;
        tracing::debug!("Generated {}/{}.html", ENTRIES_DIR, entry.url);
    }
    tracing::info!("Generated {} entry pages", entries.len());

    // Feed
    let rss = generator::make_rss(&site.config, &entries)?;
    write_file(&output_dir.join(FEED_FILE), &rss)?;
    tracing::info!("Generated {}", FEED_FILE);

    // The template was copied along with its assets but is not a page
    let copied_template = output_dir.join(&site.config.template_file);
    fs::remove_file(&copied_template)
        .with_context(|| format!("Failed to remove {:?}", copied_template))?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Recursively copy `src` to `dst`, which must not exist yet
fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_dir() {
        bail!("Directory not found: {:?}", src);
    }

    fs::create_dir(dst).with_context(|| format!("Failed to create {:?}", dst))?;

    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let dest = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)
                .with_context(|| format!("Failed to copy {:?}", entry.path()))?;
        }
    }

    tracing::debug!("Copied {:?} to {:?}", src, dst);

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))
}
