//! Markdown rendering with footnotes, a `[TOC]` directive and optional
//! syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::html_escape;

/// Paragraph text that is replaced by the table of contents
const TOC_MARKER: &str = "[TOC]";

/// Markdown renderer
pub struct MarkdownRenderer {
    highlighter: Option<Highlighter>,
}

struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

/// A heading collected for the table of contents
struct TocHeading {
    level: usize,
    id: String,
    text: String,
}

impl MarkdownRenderer {
    /// Create a renderer that emits plain `<pre><code>` blocks
    pub fn new() -> Self {
        Self { highlighter: None }
    }

    /// Create from the highlight settings in the site config
    pub fn with_options(config: &HighlightConfig) -> Self {
        let highlighter = config.enable.then(|| Highlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: config.theme.clone(),
            line_numbers: config.line_number,
        });
        Self { highlighter }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut headings: Vec<TocHeading> = Vec::new();
        let mut used_ids: HashMap<String, usize> = HashMap::new();

        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();
        // (index of the heading start event, level, text so far)
        let mut heading: Option<(usize, usize, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.split_whitespace().next().unwrap_or("").to_string();
                            (!lang.is_empty()).then_some(lang)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let block = self.code_block(&code_block_content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(block)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    heading = Some((events.len(), level as usize, String::new()));
                    events.push(Event::Start(Tag::Heading {
                        level,
                        id,
                        classes,
                        attrs,
                    }));
                }
                Event::End(TagEnd::Heading(level)) => {
                    if let Some((start, level_num, text)) = heading.take() {
                        let id = match &events[start] {
                            Event::Start(Tag::Heading { id: Some(id), .. }) => id.to_string(),
                            _ => unique_id(&mut used_ids, &text),
                        };
                        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[start] {
                            *slot = Some(CowStr::from(id.clone()));
                        }
                        headings.push(TocHeading {
                            level: level_num,
                            id,
                            text: text.trim().to_string(),
                        });
                    }
                    events.push(Event::End(TagEnd::Heading(level)));
                }
                Event::Text(text) if heading.is_some() => {
                    if let Some((_, _, buf)) = heading.as_mut() {
                        buf.push_str(&text);
                    }
                    events.push(Event::Text(text));
                }
                Event::Code(code) if heading.is_some() => {
                    if let Some((_, _, buf)) = heading.as_mut() {
                        buf.push_str(&code);
                    }
                    events.push(Event::Code(code));
                }
                _ => events.push(event),
            }
        }

        let events = replace_toc_marker(events, &headings);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        html_output
    }

    /// Render one fenced or indented code block
    fn code_block(&self, code: &str, lang: Option<&str>) -> String {
        match &self.highlighter {
            Some(highlighter) => highlighter.highlight(code, lang),
            None => plain_code_block(code, lang),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Highlight a code block
    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let token = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = match self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        {
            Some(theme) => theme,
            None => return plain_code_block(code, lang),
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) if self.line_numbers => add_line_numbers(&highlighted, token),
            Ok(highlighted) => highlighted,
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", token, e);
                plain_code_block(code, lang)
            }
        }
    }
}

fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            html_escape(lang),
            html_escape(code)
        ),
        None => format!("<pre><code>{}</code></pre>\n", html_escape(code)),
    }
}

/// Add line numbers to highlighted code
fn add_line_numbers(code: &str, lang: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();

    let gutter = (1..=lines.len())
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        lang,
        gutter,
        lines.join("\n")
    )
}

/// Slugify heading text, suffixing `_1`, `_2`... on repeats
fn unique_id(used: &mut HashMap<String, usize>, text: &str) -> String {
    let base = match slug::slugify(text) {
        s if s.is_empty() => "section".to_string(),
        s => s,
    };

    let count = used.entry(base.clone()).or_insert(0);
    let id = if *count == 0 {
        base
    } else {
        format!("{}_{}", base, count)
    };
    *count += 1;
    id
}

/// Swap any paragraph consisting only of `[TOC]` for the rendered table of
/// contents
fn replace_toc_marker<'a>(events: Vec<Event<'a>>, headings: &[TocHeading]) -> Vec<Event<'a>> {
    let mut out = Vec::with_capacity(events.len());
    let mut paragraph: Option<Vec<Event<'a>>> = None;

    for event in events {
        match event {
            Event::Start(Tag::Paragraph) if paragraph.is_none() => {
                paragraph = Some(vec![event]);
            }
            Event::End(TagEnd::Paragraph) if paragraph.is_some() => {
                let mut buffered = paragraph.take().unwrap_or_default();
                buffered.push(event);
                if is_toc_marker(&buffered) {
                    out.push(Event::Html(CowStr::from(render_toc(headings))));
                } else {
                    out.extend(buffered);
                }
            }
            event => match paragraph.as_mut() {
                Some(buffered) => buffered.push(event),
                None => out.push(event),
            },
        }
    }

    if let Some(buffered) = paragraph {
        out.extend(buffered);
    }

    out
}

fn is_toc_marker(paragraph: &[Event]) -> bool {
    let mut text = String::new();
    for event in &paragraph[1..paragraph.len() - 1] {
        match event {
            Event::Text(t) => text.push_str(t),
            _ => return false,
        }
    }
    text.trim() == TOC_MARKER
}

/// Render a nested list of links to the collected headings
fn render_toc(headings: &[TocHeading]) -> String {
    let mut html = String::from("<div class=\"toc\">\n");
    let mut open: Vec<usize> = Vec::new();

    for heading in headings {
        while open.last().is_some_and(|&level| level > heading.level) {
            html.push_str("</li>\n</ul>\n");
            open.pop();
        }

        if open.last() == Some(&heading.level) {
            html.push_str("</li>\n");
        } else {
            html.push_str("<ul>\n");
            open.push(heading.level);
        }

        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            heading.id,
            html_escape(&heading.text)
        ));
    }

    while open.pop().is_some() {
        html.push_str("</li>\n</ul>\n");
    }

    html.push_str("</div>\n");
    html
}
