//! The accepted frontmatter list forms and their edge cases.

use attic_content::markdown::{FrontmatterValue, parse_frontmatter_bytes};
use attic_content::parse_frontmatter;

fn list(items: &[&str]) -> FrontmatterValue {
    FrontmatterValue::List(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_every_list_form_agrees() {
    let inline = parse_frontmatter("tags: [a, 'b', \"c\"]");
    let opened_inline = parse_frontmatter("tags: [a,\n  'b',\n  \"c\"]");
    let bracketed = parse_frontmatter("tags:\n  [\n    a,\n    'b',\n    \"c\"\n  ]");
    let bulleted = parse_frontmatter("tags:\n  - a\n  - 'b'\n  - \"c\"");

    let expected = list(&["a", "b", "c"]);
    for fields in [&inline, &opened_inline, &bracketed, &bulleted] {
        assert_eq!(fields.get("tags"), Some(&expected));
    }
}

#[test]
fn test_keys_keep_source_order() {
    let fields = parse_frontmatter("title: T\ndate: 2024-01-01\ntags: [x]\nexcerpt: E");
    let keys: Vec<&str> = fields.keys().collect();
    assert_eq!(keys, vec!["title", "date", "tags", "excerpt"]);
}

#[test]
fn test_colon_in_quoted_scalar() {
    let fields = parse_frontmatter("title: \"Test: Subtitle\"\nurl: https://example.com/a");
    assert_eq!(fields.get_str("title"), Some("Test: Subtitle"));
    assert_eq!(fields.get_str("url"), Some("https://example.com/a"));
}

#[test]
fn test_bulleted_list_followed_by_key() {
    let fields = parse_frontmatter("ingredients:\n  - Flour: 200 g\n  - Eggs: 2\nservings: 4");
    assert_eq!(
        fields.get("ingredients"),
        Some(&list(&["Flour: 200 g", "Eggs: 2"]))
    );
    assert_eq!(fields.get_str("servings"), Some("4"));
}

#[test]
fn test_empty_inline_list() {
    let fields = parse_frontmatter("tags: []");
    assert_eq!(fields.get("tags"), Some(&list(&[])));
}

#[test]
fn test_unterminated_list_closed_at_end() {
    let fields = parse_frontmatter("tags:\n  [\n  one,\n  two");
    assert_eq!(fields.get("tags"), Some(&list(&["one", "two"])));
}

#[test]
fn test_garbage_lines_ignored() {
    let fields = parse_frontmatter("just some words\ntitle: Kept\n: no key");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get_str("title"), Some("Kept"));
}

#[test]
fn test_bytes_must_be_utf8() {
    assert!(parse_frontmatter_bytes(b"title: ok").is_ok());
    let err = parse_frontmatter_bytes(&[b't', 0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, attic_core::Error::InputType { .. }));
}
