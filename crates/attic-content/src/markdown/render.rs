//! Markdown to HTML rendering.
//!
//! Rendering uses `pulldown-cmark` with GitHub-style extensions. Code blocks
//! are highlighted with `syntect` using CSS classes, wrapped as
//! `<pre><code class="hljs language-<lang>">`; an unknown or missing
//! language falls back to plain text. Raw HTML in the source is escaped by
//! default so the output only contains engine-generated markup.
//!
//! The first `<h1>` of the output is removed: page templates display the
//! post title separately.
//!
//! # Example
//!
//! ```rust
//! use attic_content::markdown::render::render;
//!
//! let html = render("# Main Title\n## Subtitle");
//! assert!(!html.contains("<h1>Main Title</h1>"));
//! assert!(html.contains("<h2>Subtitle</h2>"));
//! ```

use std::sync::LazyLock;

use attic_core::RenderConfig;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};
use regex::Regex;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Class and language name used when a code block has no usable language.
pub const PLAIN_TEXT_LANGUAGE: &str = "plaintext";

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static FIRST_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>.*?</h1>").expect("Invalid h1 regex"));

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render raw HTML found in the Markdown as escaped text.
    pub escape_raw_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_raw_html: true,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            escape_raw_html: config.escape_raw_html,
        }
    }
}

/// Renders Markdown bodies to HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

/// A fenced or indented code block being collected.
struct CodeBlock {
    language: Option<String>,
    code: String,
}

impl MarkdownRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a Markdown body to HTML, dropping the first `<h1>` element.
    pub fn render(&self, body: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        let mut events: Vec<Event<'_>> = Vec::new();
        let mut block: Option<CodeBlock> = None;

        for event in Parser::new_ext(body, options) {
            if block.is_some() {
                match event {
                    Event::Text(text) => {
                        if let Some(open) = block.as_mut() {
                            open.code.push_str(&text);
                        }
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        if let Some(done) = block.take() {
                            events.push(Event::Html(CowStr::from(highlight(&done))));
                        }
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => info_language(&info),
                        CodeBlockKind::Indented => None,
                    };
                    block = Some(CodeBlock {
                        language,
                        code: String::new(),
                    });
                }
                Event::Html(raw) | Event::InlineHtml(raw) if self.options.escape_raw_html => {
                    events.push(Event::Text(raw));
                }
                other => events.push(other),
            }
        }

        let mut output = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut output, events.into_iter());
        strip_first_h1(&output)
    }
}

/// Render with the default renderer.
pub fn render(body: &str) -> String {
    MarkdownRenderer::default().render(body)
}

/// Remove the first `<h1 …>…</h1>` element, leaving any later ones.
pub fn strip_first_h1(html: &str) -> String {
    FIRST_H1.replacen(html, 1, "").into_owned()
}

/// First word of a fence info string (` ```rust,ignore ` → `rust`).
fn info_language(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .find(|token| !token.is_empty())
        .map(String::from)
}

/// Language name safe to embed in a class attribute.
fn class_language(language: Option<&str>) -> &str {
    match language {
        Some(lang)
            if lang
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#' | '.')) =>
        {
            lang
        }
        _ => PLAIN_TEXT_LANGUAGE,
    }
}

fn highlight(block: &CodeBlock) -> String {
    let syntax_set = &*SYNTAX_SET;
    let syntax = block
        .language
        .as_deref()
        .and_then(|lang| syntax_set.find_syntax_by_token(lang))
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);
    let mut highlighted = true;
    for line in LinesWithEndings::from(&block.code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            log::warn!("Syntax highlighting failed, rendering code as plain text: {e}");
            highlighted = false;
            break;
        }
    }

    let inner = if highlighted {
        generator.finalize()
    } else {
        escape_html(&block.code)
    };

    format!(
        "<pre><code class=\"hljs language-{}\">{inner}</code></pre>\n",
        class_language(block.language.as_deref())
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================
