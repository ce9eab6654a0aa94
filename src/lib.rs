//! inkpress: a small static blog generator
//!
//! Entries are markdown files named `YYYY-MM-DD_slug.md` whose first line is
//! the title, separated from the body by `---`. A build reads them, renders
//! each body to HTML and fills a single HTML template to produce the index
//! page and one page per entry, plus an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ProcessedEntry;

/// A site rooted at a project directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Published entries
    pub entries_dir: PathBuf,
    /// Unpublished entries, included with `--drafts`
    pub drafts_dir: PathBuf,
    /// Copied verbatim into the output directory
    pub template_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();

        Self {
            entries_dir: base_dir.join(&config.entries_dir),
            drafts_dir: base_dir.join(&config.drafts_dir),
            template_dir: base_dir.join(&config.template_dir),
            output_dir: base_dir.join(&config.output_dir),
            config,
            base_dir,
        }
    }

    /// Static assets referenced by entries
    pub fn assets_dir(&self) -> PathBuf {
        self.entries_dir.join(&self.config.assets_dir)
    }

    /// The page template inside the template directory
    pub fn template_path(&self) -> PathBuf {
        self.template_dir.join(&self.config.template_file)
    }

    /// Read and process all entries, newest first
    pub fn load_entries(&self, include_drafts: bool) -> Result<Vec<ProcessedEntry>> {
        let drafts_dir = include_drafts.then_some(self.drafts_dir.as_path());
        let raw_entries = content::reader::read_entries(&self.entries_dir, drafts_dir)?;

        let renderer = content::MarkdownRenderer::with_options(&self.config.highlight);
        let entries = content::process_entries(&renderer, &raw_entries)?;

        Ok(entries)
    }

    /// Build the site into the output directory
    pub fn build(&self, include_drafts: bool) -> Result<()> {
        commands::build::run(self, include_drafts)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new entry dated today
    pub fn new_entry(&self, title: &str, draft: bool) -> Result<PathBuf> {
        commands::new::run(self, title, draft)
    }
}
