//! HTML rendering through the public renderer API.

use attic_content::{MarkdownRenderer, RenderOptions, render_markdown};

#[test]
fn test_first_h1_removed_only_once() {
    let html = render_markdown("# One\n\ntext\n\n# Two");
    assert!(!html.contains("One</h1>"));
    assert!(html.contains("<h1>Two</h1>"));
}

#[test]
fn test_code_block_classes() {
    let html = render_markdown("```python\nprint('hi')\n```");
    assert!(html.contains("<pre><code class=\"hljs language-python\">"));

    let html = render_markdown("```\nplain\n```");
    assert!(html.contains("class=\"hljs language-plaintext\""));
    assert!(html.contains("plain"));
}

#[test]
fn test_unknown_language_keeps_declared_class() {
    let html = render_markdown("```klingon\nqapla'\n```");
    assert!(html.contains("language-klingon"));
}

#[test]
fn test_raw_html_escaped_by_default() {
    let html = render_markdown("<script>alert(1)</script>\n\nText <b>bold</b>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_raw_html_passthrough_when_disabled() {
    let renderer = MarkdownRenderer::new(RenderOptions {
        escape_raw_html: false,
    });
    let html = renderer.render("Text <b>bold</b>");
    assert!(html.contains("<b>bold</b>"));
}

#[test]
fn test_extensions_enabled() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done");
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>gone</del>"));
    assert!(html.contains("type=\"checkbox\""));
}
