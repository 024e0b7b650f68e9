//! Frontmatter parsing, Markdown rendering, and post normalization.
//!
//! This crate turns raw Markdown documents with a YAML-like header into
//! typed post records. Every call re-parses from source text; nothing is
//! cached.
//!
//! # Modules
//!
//! - [`markdown`]: Document splitting, frontmatter parsing, HTML rendering
//!   - [`markdown::document`]: Header/body split on `---` lines
//!   - [`markdown::frontmatter`]: Hand-rolled frontmatter parser
//!   - [`markdown::render`]: pulldown-cmark rendering with highlighting
//!   - [`markdown::helpers`]: Quote stripping, list splitting, reading time
//! - [`post`]: The normalizer and its article/recipe specializations
//! - [`collection`]: Listing, lookup, and tag queries over a document set
//!
//! # Design Philosophy
//!
//! **Degrade per document, never per listing.** A malformed file becomes a
//! visibly flagged sentinel post; its siblings still render.
//!
//! # Example
//!
//! ```rust
//! use attic_content::normalize_recipe;
//!
//! let raw = "---\ntitle: Pancakes\ndate: 2024-02-13\ntags: [breakfast, Dessert]\ningredients:\n  - Flour: 200 g # sifted\n  - Eggs: 2\n---\n\n# Pancakes\n\nWhisk everything.";
//! let recipe = normalize_recipe(raw, "pancakes");
//!
//! assert_eq!(recipe.title, "Pancakes");
//! assert_eq!(recipe.tags, vec!["breakfast", "Dessert"]);
//! assert_eq!(recipe.extra.ingredients[0].unit.as_deref(), Some("g"));
//! assert!(!recipe.html.contains("<h1>"));
//! ```

pub mod collection;
pub mod markdown;
pub mod post;

// Re-export commonly used types
pub use collection::{Collection, aggregate_tags, sort_newest_first};
pub use markdown::{
    FrontmatterMap, FrontmatterValue, MarkdownRenderer, RenderOptions, parse_frontmatter,
    reading_time, render_markdown,
};
pub use post::{
    AiContributions, Article, ArticleMeta, ArticlePost, Ingredient, IngredientEntry, Normalizer,
    Post, PostKind, Recipe, RecipeMeta, RecipePost, coerce_ingredients, normalize_article,
    normalize_recipe, scale_ingredients,
};
