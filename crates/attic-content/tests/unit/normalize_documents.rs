//! Whole-document normalization for both post kinds.

use attic_content::{
    AiContributions, Ingredient, IngredientEntry, coerce_ingredients, normalize_article,
    normalize_recipe, scale_ingredients,
};

const FRANGIPANE: &str = "---
title: Pear Frangipane Tart
date: 2024-06-01T18:00:00+02:00
excerpt: 'Almond cream, poached pears'
tags:
  [
    'Dessert',
    baking,
  ]
servings: 8
ingredients:
  - Almond flour: 100 g # finely ground
  - Butter: 100 g
  - Pears: 3
  - Salt: a pinch
blueskyUri: at://did:plc:abc/app.bsky.feed.post/xyz
---

# Pear Frangipane Tart

Poach the pears, then bake.

## Notes

Serve warm.
";

#[test]
fn test_recipe_full_document() {
    let post = normalize_recipe(FRANGIPANE, "pear-frangipane");
    assert_eq!(post.title, "Pear Frangipane Tart");
    assert_eq!(post.date, "2024-06-01");
    assert_eq!(post.excerpt, "Almond cream, poached pears");
    assert_eq!(post.tags, vec!["Dessert", "baking"]);
    assert_eq!(post.extra.servings, Some(8.0));
    assert!(post.is_shared());

    let ingredients = &post.extra.ingredients;
    assert_eq!(ingredients.len(), 4);
    assert_eq!(ingredients[0].name, "Almond flour");
    assert_eq!(ingredients[0].amount, 100.0);
    assert_eq!(ingredients[0].unit.as_deref(), Some("g"));
    assert_eq!(ingredients[0].notes.as_deref(), Some("finely ground"));
    assert_eq!(ingredients[2].unit, None);
    assert_eq!(ingredients[3].name, "Salt: a pinch");
    assert_eq!(ingredients[3].amount, 0.0);

    assert!(!post.html.contains("<h1"));
    assert!(post.html.contains("<h2>Notes</h2>"));
    assert_eq!(post.reading_time, 1);
}

#[test]
fn test_recipe_without_header_is_all_body() {
    let post = normalize_recipe("# Toast\n\nToast the bread.", "toast");
    assert!(!post.is_malformed());
    assert_eq!(post.title, "Untitled");
    assert_eq!(post.content, "# Toast\n\nToast the bread.");
    assert!(post.extra.ingredients.is_empty());
}

#[test]
fn test_article_requires_header() {
    let post = normalize_article("# Toast", "toast");
    assert!(post.is_malformed());
    assert_eq!(post.excerpt, "Format error in markdown file.");
}

#[test]
fn test_article_ai_disclosure() {
    let post = normalize_article("---\ntitle: A\naiContributions: considerable\n---\nx", "a");
    assert_eq!(post.extra.ai_contributions, AiContributions::Considerable);
}

#[test]
fn test_thematic_break_in_body_is_not_a_delimiter() {
    let raw = "---\ntitle: Breaks\n---\nAbove\n\n---\n\nBelow";
    let post = normalize_article(raw, "breaks");
    assert!(post.content.contains("Below"));
    assert!(post.html.contains("<hr />"));
}

#[test]
fn test_structured_and_line_entries_mix() {
    let entries = vec![
        IngredientEntry::from("Sugar: 50 g"),
        IngredientEntry::from(Ingredient::new("Vanilla", 1.0)),
    ];
    let ingredients = coerce_ingredients(entries);
    assert_eq!(ingredients[0].name, "Sugar");
    assert_eq!(ingredients[1], Ingredient::new("Vanilla", 1.0));
}

#[test]
fn test_scaling_keeps_units_and_notes() {
    let post = normalize_recipe(FRANGIPANE, "pear-frangipane");
    let halved = scale_ingredients(&post.extra.ingredients, 0.5);
    assert_eq!(halved[0].amount, 50.0);
    assert_eq!(halved[0].unit.as_deref(), Some("g"));
    assert_eq!(halved[0].notes.as_deref(), Some("finely ground"));
    assert_eq!(halved[2].amount, 1.5);
}

#[test]
fn test_json_shape() {
    let post = normalize_recipe(FRANGIPANE, "pear-frangipane");
    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["slug"], "pear-frangipane");
    assert_eq!(json["readingTime"], 1);
    assert_eq!(json["ingredients"][0]["unit"], "g");
    assert_eq!(
        json["blueskyUri"],
        "at://did:plc:abc/app.bsky.feed.post/xyz"
    );
}
