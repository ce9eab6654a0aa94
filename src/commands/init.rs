//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::templates;
use crate::Site;

/// Scaffold a new project in `target_dir`
pub fn init_site(target_dir: &Path) -> Result<Site> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        bail!("A site already exists in {:?}", target_dir);
    }

    fs::create_dir_all(target_dir)?;
    fs::write(&config_path, templates::CONFIG_YML)?;

    let site = Site::new(target_dir)?;

    // Directory structure
    fs::create_dir_all(site.assets_dir())?;
    fs::create_dir_all(&site.drafts_dir)?;

    // Template directory
    for (relative, content) in templates::template_files(&site.config.template_file) {
        let path = site.template_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
    }

    // A first entry dated today
    let today = chrono::Local::now().format("%Y-%m-%d");
    fs::write(
        site.entries_dir.join(format!("{}_hello-world.md", today)),
        templates::FIRST_ENTRY,
    )?;

    tracing::info!("Initialized site in {:?}", target_dir);

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_site() {
        let tmp = TempDir::new().unwrap();
        let site = init_site(tmp.path()).unwrap();

        assert!(site.template_path().is_file());
        assert!(site.template_dir.join("css/style.css").is_file());
        assert!(site.template_dir.join("js/darkmode.js").is_file());
        assert!(site.assets_dir().is_dir());
        assert!(site.drafts_dir.is_dir());
        assert_eq!(site.config.title, "blog.example.com");

        let entries = site.load_entries(false).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "hello-world");
        assert!(entries[0].html_content.contains("<div class=\"toc\">"));
    }

    #[test]
    fn test_init_twice_fails() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();
        assert!(init_site(tmp.path()).is_err());
    }
}
