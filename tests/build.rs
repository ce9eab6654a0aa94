//! End-to-end builds against temporary project directories

use inkpress::Site;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<html><head><title>{title}</title>
<meta name="description" content="{preview}"></head>
<body>{back_home}<main>{entry_content}</main>
<style>main {{ padding: 0; }}</style></body></html>
"#;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Lay out a project with two entries, a draft, an asset and a template
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(&root.join("entries/2024-01-01_a.md"), "A\n---\nHello.\n");
    write(&root.join("entries/2024-06-15_b.md"), "B\n---\nWorld.\n");
    write(&root.join("entries/assets/img/pic.png"), "png");
    write(&root.join("drafts/2024-03-01_c.md"), "C\n---\nDraft.\n");
    write(&root.join("template/template.html"), TEMPLATE);
    write(&root.join("template/js/darkmode.js"), "// js");

    tmp
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_build_site() {
    let tmp = project();
    let site = Site::new(tmp.path()).unwrap();
    site.build(false).unwrap();

    let out = tmp.path().join("out");

    // index lists b before a, drafts excluded
    let index = read(&out.join("index.html"));
    let b = index.find("entries/b.html").unwrap();
    let a = index.find("entries/a.html").unwrap();
    assert!(b < a);
    assert!(!index.contains("entries/c.html"));
    assert!(index.contains("<title>blog.borrego.dev</title>"));
    assert!(index.contains("<p>World.</p>"));
    assert!(index.contains("main { padding: 0; }"));

    // entry pages
    let page_a = read(&out.join("entries/a.html"));
    assert!(page_a.contains("<title>A</title>"));
    assert!(page_a.contains("content=\"Hello.\""));
    assert!(page_a.contains("<span class=\"entry-date\">1 jan. 2024</span>"));
    assert!(page_a.contains("Back to index"));
    assert!(out.join("entries/b.html").is_file());
    assert!(!out.join("entries/c.html").exists());

    // feed
    let rss = read(&out.join("rss.xml"));
    assert_eq!(rss.matches("<item>").count(), 2);
    assert!(rss.contains(">a</guid>"));
    assert!(rss.contains(">b</guid>"));

    // copied assets, template removed
    assert_eq!(read(&out.join("entries/assets/img/pic.png")), "png");
    assert_eq!(read(&out.join("js/darkmode.js")), "// js");
    assert!(!out.join("template.html").exists());
}

#[test]
fn test_build_with_drafts() {
    let tmp = project();
    let site = Site::new(tmp.path()).unwrap();
    site.build(true).unwrap();

    let out = tmp.path().join("out");
    let index = read(&out.join("index.html"));
    let b = index.find("entries/b.html").unwrap();
    let c = index.find("entries/c.html").unwrap();
    let a = index.find("entries/a.html").unwrap();
    assert!(b < c && c < a);
    assert!(out.join("entries/c.html").is_file());
    assert_eq!(read(&out.join("rss.xml")).matches("<item>").count(), 3);
}

#[test]
fn test_existing_output_directory_fails() {
    let tmp = project();
    let site = Site::new(tmp.path()).unwrap();
    site.build(false).unwrap();
    assert!(site.build(false).is_err());

    site.clean().unwrap();
    assert!(!site.output_dir.exists());
    site.build(false).unwrap();
    assert!(site.output_dir.join("index.html").is_file());
}

#[test]
fn test_malformed_filename_aborts() {
    let tmp = project();
    write(&tmp.path().join("entries/no-underscore.md"), "X\n---\nbody");

    let site = Site::new(tmp.path()).unwrap();
    assert!(site.build(false).is_err());
    assert!(!tmp.path().join("out/index.html").exists());
}

#[test]
fn test_malformed_content_aborts() {
    let tmp = project();
    write(&tmp.path().join("entries/2024-02-02_x.md"), "no separator here");

    let site = Site::new(tmp.path()).unwrap();
    let err = site.build(false).unwrap_err();
    assert!(err.to_string().contains("---"));
    assert!(!tmp.path().join("out/index.html").exists());
}

#[test]
fn test_template_drift_aborts() {
    let tmp = project();
    write(&tmp.path().join("template/template.html"), "{title} {sidebar}");

    let site = Site::new(tmp.path()).unwrap();
    assert!(site.build(false).is_err());
    assert!(!tmp.path().join("out/index.html").exists());
}

#[test]
fn test_missing_template_file_aborts() {
    let tmp = project();
    fs::remove_file(tmp.path().join("template/template.html")).unwrap();

    let site = Site::new(tmp.path()).unwrap();
    assert!(site.build(false).is_err());
    assert!(!tmp.path().join("out/index.html").exists());
}

#[test]
fn test_missing_template_dir_aborts() {
    let tmp = project();
    fs::remove_dir_all(tmp.path().join("template")).unwrap();

    let site = Site::new(tmp.path()).unwrap();
    assert!(site.build(false).is_err());
    assert!(!tmp.path().join("out/index.html").exists());
}

#[test]
fn test_missing_assets_aborts() {
    let tmp = project();
    fs::remove_dir_all(tmp.path().join("entries/assets")).unwrap();

    let site = Site::new(tmp.path()).unwrap();
    assert!(site.build(false).is_err());
}

#[test]
fn test_config_overrides_layout() {
    let tmp = project();
    write(
        &tmp.path().join("_config.yml"),
        "title: Custom\noutput_dir: public\nurl: https://example.com\n",
    );

    let site = Site::new(tmp.path()).unwrap();
    site.build(false).unwrap();

    let out = tmp.path().join("public");
    assert!(read(&out.join("index.html")).contains("<title>Custom</title>"));
    assert!(read(&out.join("rss.xml")).contains("https://example.com/entries/a.html"));
}

#[test]
fn test_init_then_build() {
    let tmp = TempDir::new().unwrap();
    let site = inkpress::commands::init::init_site(tmp.path()).unwrap();
    site.build(false).unwrap();

    let out = tmp.path().join("out");
    assert!(out.join("index.html").is_file());
    assert!(out.join("entries/hello-world.html").is_file());
    assert!(out.join("css/style.css").is_file());
    assert!(out.join("rss.xml").is_file());
    assert!(!out.join("template.html").exists());
}
