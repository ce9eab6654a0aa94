//! Default project files embedded in the binary, written by `inkpress init`

/// Page template carrying the four placeholders the generator fills
pub const TEMPLATE_HTML: &str = include_str!("default/template.html");

/// Stylesheet referenced by the default template
pub const STYLE_CSS: &str = include_str!("default/css/style.css");

/// Dark mode toggle referenced by the default template
pub const DARKMODE_JS: &str = include_str!("default/js/darkmode.js");

/// Commented `_config.yml`
pub const CONFIG_YML: &str = include_str!("default/_config.yml");

/// Sample entry body (title line included)
pub const FIRST_ENTRY: &str = include_str!("default/first-entry.md");

/// Files of the template directory, relative to it
pub fn template_files(template_file: &str) -> Vec<(String, &'static str)> {
    vec![
        (template_file.to_string(), TEMPLATE_HTML),
        ("css/style.css".to_string(), STYLE_CSS),
        ("js/darkmode.js".to_string(), DARKMODE_JS),
    ]
}
