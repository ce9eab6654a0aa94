//! RSS feed generation

use rss::extension::atom::{self, AtomExtension, Link};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use std::collections::BTreeMap;
use thiserror::Error;

use super::ENTRIES_DIR;
use crate::config::SiteConfig;
use crate::content::ProcessedEntry;

/// Feed file name inside the output directory
pub const FEED_FILE: &str = "rss.xml";

/// RSS generation errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("RSS serialization error: {0}")]
    Xml(#[from] rss::Error),

    #[error("RSS output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Build the RSS document for `entries`, in the given order
pub fn make_rss(config: &SiteConfig, entries: &[ProcessedEntry]) -> Result<String, FeedError> {
    let base_url = config.base_url();

    let items: Vec<Item> = entries
        .iter()
        .map(|entry| entry_to_item(base_url, entry))
        .collect();

    let self_link = Link {
        href: format!("{}/{}", base_url, FEED_FILE),
        rel: "self".to_string(),
        mime_type: Some("application/rss+xml".to_string()),
        ..Default::default()
    };

    let mut namespaces = BTreeMap::new();
    namespaces.insert("atom".to_string(), atom::NAMESPACE.to_string());

    let channel = ChannelBuilder::default()
        .namespaces(namespaces)
        .title(config.title.clone())
        .link(base_url.to_string())
        .description(config.description.clone())
        .language(Some(config.language.clone()))
        .managing_editor(Some(format!("{} ({})", config.email, config.author)))
        .generator(Some(format!("inkpress {}", env!("CARGO_PKG_VERSION"))))
        .atom_ext(Some(AtomExtension {
            links: vec![self_link],
        }))
        .items(items)
        .build();

    let buf = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(String::from_utf8(buf)?)
}

/// Convert an entry to an RSS item
fn entry_to_item(base_url: &str, entry: &ProcessedEntry) -> Item {
    let guid = GuidBuilder::default()
        .value(entry.url.clone())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .guid(Some(guid))
        .title(Some(entry.title.clone()))
        .description(Some(entry.preview.clone()))
        .link(Some(format!("{}/{}/{}.html", base_url, ENTRIES_DIR, entry.url)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, title: &str, preview: &str) -> ProcessedEntry {
        ProcessedEntry {
            url: url.to_string(),
            date: "1 jan. 2024".to_string(),
            title: title.to_string(),
            preview: preview.to_string(),
            html_content: format!("<p>{}</p>", preview),
        }
    }

    #[test]
    fn test_channel_metadata() {
        let xml = make_rss(&SiteConfig::default(), &[]).unwrap();

        assert!(xml.contains("<title>blog.borrego.dev</title>"));
        assert!(xml.contains("<link>https://blog.borrego.dev</link>"));
        assert!(xml.contains("<description>Agustín Borrego"));
        assert!(xml.contains("<language>en</language>"));
        assert!(xml.contains(
            "<managingEditor>agu@borrego.dev (Agustín Borrego)</managingEditor>"
        ));
        assert!(xml.contains("href=\"https://blog.borrego.dev/rss.xml\""));
        assert!(xml.contains("rel=\"self\""));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn test_items_follow_input_order() {
        let entries = vec![entry("b", "B", "World."), entry("a", "A", "Hello.")];
        let xml = make_rss(&SiteConfig::default(), &entries).unwrap();

        assert_eq!(xml.matches("<item>").count(), 2);
        assert!(xml.contains(">b</guid>"));
        assert!(xml.contains(">a</guid>"));
        assert!(xml.contains("<link>https://blog.borrego.dev/entries/a.html</link>"));
        assert!(xml.contains("Hello."));
        assert!(xml.find(">b</guid>").unwrap() < xml.find(">a</guid>").unwrap());
    }

    #[test]
    fn test_pretty_printed() {
        let xml = make_rss(&SiteConfig::default(), &[entry("a", "A", "x")]).unwrap();
        assert!(xml.contains("\n  <channel>\n    <title>blog.borrego.dev</title>\n"));
        assert!(xml.contains("\n    <item>\n      <"));
        assert!(xml.contains("\n    </item>\n"));
        assert!(xml.contains("\n  </channel>\n</rss>"));
    }

    #[test]
    fn test_trailing_slash_in_site_url() {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        let xml = make_rss(&config, &[entry("a", "A", "x")]).unwrap();
        assert!(xml.contains("<link>https://example.com/entries/a.html</link>"));
    }
}
