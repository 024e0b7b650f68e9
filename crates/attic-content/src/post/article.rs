//! Blog articles.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{Normalizer, Post, PostKind};
use crate::markdown::FrontmatterMap;

/// Marker for blog articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Article;

/// A normalized blog article.
pub type ArticlePost = Post<Article>;

/// How much of an article was written with AI assistance.
///
/// The allowed values are enforced by the external schema validator; values
/// outside the set are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AiContributions {
    /// Written entirely by hand.
    #[default]
    None,
    /// Some sections assisted.
    Partial,
    /// Substantially assisted.
    Considerable,
    /// A value outside the known set.
    Other(String),
}

impl AiContributions {
    /// The frontmatter spelling of this value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Considerable => "considerable",
            Self::Other(value) => value,
        }
    }

    /// Whether this is one of the known values.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for AiContributions {
    fn from(value: &str) -> Self {
        match value.trim() {
            "none" => Self::None,
            "partial" => Self::Partial,
            "considerable" => Self::Considerable,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AiContributions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AiContributions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Article-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    /// AI-contribution disclosure (`aiContributions`), default `none`.
    pub ai_contributions: AiContributions,
}

impl PostKind for Article {
    type Extra = ArticleMeta;

    const NAME: &'static str = "blog";
    const REQUIRES_HEADER: bool = true;

    fn extract(fields: &FrontmatterMap, slug: &str) -> ArticleMeta {
        let ai_contributions = fields
            .get_str("aiContributions")
            .map(AiContributions::from)
            .unwrap_or_default();
        if !ai_contributions.is_known() {
            log::warn!("Unknown aiContributions value '{ai_contributions}' in '{slug}'");
        }
        ArticleMeta { ai_contributions }
    }
}

/// Normalize a blog article with default settings.
///
/// Articles must carry a frontmatter header; a document without one becomes
/// the malformed-post sentinel.
pub fn normalize_article(raw: &str, slug: &str) -> ArticlePost {
    Normalizer::default().normalize(raw, slug)
}
