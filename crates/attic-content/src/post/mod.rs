//! Post records and the document normalizer.
//!
//! A [`Post`] is rebuilt from source text on every call. The shared fields
//! live on `Post` itself; kind-specific fields live in [`PostKind::Extra`]:
//!
//! - [`Article`] → [`ArticleMeta`] (AI-contribution disclosure)
//! - [`Recipe`] → [`RecipeMeta`] (ingredients, servings)
//!
//! # Failure handling
//!
//! [`Normalizer::normalize`] never fails. When a document cannot be split
//! into header and body the error is logged and a sentinel post titled
//! `Error: Malformed Post (<slug>)` is returned instead, so one corrupt file
//! never takes down a listing. [`Normalizer::try_normalize`] exposes the
//! underlying error for diagnostics.

pub mod article;
pub mod fields;
pub mod recipe;

use std::fmt::Debug;

use attic_core::config::DEFAULT_WORDS_PER_MINUTE;
use attic_core::{RenderConfig, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::markdown::{
    FrontmatterMap, MarkdownRenderer, RenderOptions, parse_frontmatter, reading_time,
    split_document,
};

pub use article::{AiContributions, Article, ArticleMeta, ArticlePost, normalize_article};
pub use fields::{coerce_date, coerce_tags, dedupe_tags, today};
pub use recipe::{
    Ingredient, IngredientEntry, Recipe, RecipeMeta, RecipePost, coerce_ingredients,
    normalize_recipe, scale_ingredients,
};

/// Frontmatter key holding the external share reference.
pub const SHARE_REFERENCE_KEY: &str = "blueskyUri";

/// A kind of document (article, recipe) with its own extra fields.
pub trait PostKind: Debug + Clone + PartialEq {
    /// Kind-specific fields.
    type Extra: Debug + Clone + Default + PartialEq + Serialize;

    /// Collection name, used in logs and URLs ("blog", "recipes").
    const NAME: &'static str;

    /// Whether a document without a header is malformed.
    ///
    /// When `false`, a header-less document is treated as all body.
    const REQUIRES_HEADER: bool;

    /// Coerce the kind-specific fields from parsed frontmatter.
    fn extract(fields: &FrontmatterMap, slug: &str) -> Self::Extra;
}

/// A normalized post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "K::Extra: Serialize"))]
pub struct Post<K: PostKind> {
    /// Stable identifier derived from the file name.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Calendar date (`YYYY-MM-DD`), as written in the source.
    pub date: String,
    /// Short summary.
    pub excerpt: String,
    /// Tags, deduplicated case-insensitively.
    pub tags: Vec<String>,
    /// Raw Markdown body.
    pub content: String,
    /// Rendered HTML body, first `<h1>` removed.
    pub html: String,
    /// Estimated reading time in minutes; 0 only on the error sentinel.
    pub reading_time: u32,
    /// External share reference, set once a post has been cross-posted.
    #[serde(rename = "blueskyUri", skip_serializing_if = "Option::is_none")]
    pub share_reference: Option<String>,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub extra: K::Extra,
}

impl<K: PostKind> Post<K> {
    /// The sentinel returned for documents that could not be normalized.
    pub fn malformed(slug: &str, raw: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: format!("Error: Malformed Post ({slug})"),
            date: today(),
            excerpt: "Format error in markdown file.".to_string(),
            tags: Vec::new(),
            content: raw.to_string(),
            html: format!(
                "<p>Error parsing post content for {slug}. Please check the file format.</p>"
            ),
            reading_time: 0,
            share_reference: None,
            extra: K::Extra::default(),
        }
    }

    /// Whether this is the error sentinel.
    pub fn is_malformed(&self) -> bool {
        self.reading_time == 0 && self.title.starts_with("Error: Malformed Post")
    }

    /// Whether the post has already been shared externally.
    pub fn is_shared(&self) -> bool {
        self.share_reference.is_some()
    }

    /// The date as a calendar date, if it parses.
    ///
    /// Only the leading `YYYY-MM-DD` is considered.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let prefix = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// Turns raw documents into posts.
#[derive(Debug, Clone)]
pub struct Normalizer {
    renderer: MarkdownRenderer,
    words_per_minute: u32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            renderer: MarkdownRenderer::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl Normalizer {
    /// Create a normalizer with an explicit renderer and reading speed.
    pub fn new(renderer: MarkdownRenderer, words_per_minute: u32) -> Self {
        Self {
            renderer,
            words_per_minute,
        }
    }

    /// Create a normalizer from render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            MarkdownRenderer::new(RenderOptions::from(config)),
            config.words_per_minute,
        )
    }

    /// Normalize a document, substituting the sentinel post on failure.
    pub fn normalize<K: PostKind>(&self, raw: &str, slug: &str) -> Post<K> {
        match self.try_normalize(raw, slug) {
            Ok(post) => post,
            Err(e) => {
                log::error!(
                    "Invalid markdown format for {} post '{slug}': {e}",
                    K::NAME
                );
                Post::malformed(slug, raw)
            }
        }
    }

    /// Normalize a document, reporting why it is malformed.
    pub fn try_normalize<K: PostKind>(&self, raw: &str, slug: &str) -> Result<Post<K>> {
        let parts = split_document(raw, slug)?;
        let header = match parts.header() {
            Some(header) => header,
            None if K::REQUIRES_HEADER => {
                return Err(attic_core::Error::malformed(
                    slug,
                    "missing frontmatter header",
                ));
            }
            None => "",
        };

        let fields = parse_frontmatter(header);
        let body = parts.body();

        Ok(Post {
            slug: slug.to_string(),
            title: fields::scalar_or(&fields, "title", slug, "Untitled"),
            date: coerce_date(fields.get_str("date")),
            excerpt: fields::scalar_or(&fields, "excerpt", slug, ""),
            tags: coerce_tags(fields.get("tags")),
            content: body.to_string(),
            html: self.renderer.render(body),
            reading_time: reading_time(body, self.words_per_minute),
            share_reference: fields.get_str(SHARE_REFERENCE_KEY).map(String::from),
            extra: K::extract(&fields, slug),
        })
    }
}
