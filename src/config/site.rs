//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site identity
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub url: String,
    pub language: String,

    // Directory
    pub entries_dir: String,
    pub drafts_dir: String,
    /// Relative to `entries_dir`
    pub assets_dir: String,
    pub template_dir: String,
    pub template_file: String,
    pub output_dir: String,

    // Writing
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "blog.borrego.dev".to_string(),
            description: "Agustín Borrego's blog".to_string(),
            author: "Agustín Borrego".to_string(),
            email: "agu@borrego.dev".to_string(),
            url: "https://blog.borrego.dev".to_string(),
            language: "en".to_string(),

            entries_dir: "entries".to_string(),
            drafts_dir: "drafts".to_string(),
            assets_dir: "assets".to_string(),
            template_dir: "template".to_string(),
            template_file: "template.html".to_string(),
            output_dir: "out".to_string(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Site url without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: false,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
