//! Property-based tests for parsing and normalization.

use attic_content::markdown::split_unquoted_commas;
use attic_content::post::coerce_tags;
use attic_content::{normalize_recipe, parse_frontmatter};
use proptest::prelude::*;

fn items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9]{0,8}", 1..6)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn test_inline_and_multiline_lists_agree(items in items()) {
        let inline = format!("tags: [{}]", items.join(", "));
        let multiline = format!(
            "tags:\n  [\n{}\n  ]",
            items.iter().map(|i| format!("    {i},")).collect::<Vec<_>>().join("\n")
        );
        let inline_fields = parse_frontmatter(&inline);
        let multiline_fields = parse_frontmatter(&multiline);
        prop_assert_eq!(
            inline_fields.get("tags"),
            multiline_fields.get("tags")
        );
    }

    #[test]
    fn test_tag_list_roundtrip(items in items()) {
        let header = format!("tags: [{}]", items.join(", "));
        let fields = parse_frontmatter(&header);
        prop_assert_eq!(coerce_tags(fields.get("tags")), items);
    }

    #[test]
    fn test_comma_split_rejoins(text in "[a-z,'\" ]{0,30}") {
        prop_assert_eq!(split_unquoted_commas(&text).join(","), text);
    }

    #[test]
    fn test_normalize_never_panics(raw in "\\PC{0,200}") {
        let post = normalize_recipe(&raw, "fuzz");
        prop_assert_eq!(post.reading_time == 0, post.is_malformed());
    }
}
