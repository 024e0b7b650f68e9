//! Document collections: listing, lookup, and tag queries.
//!
//! A [`Collection`] holds raw sources, never posts. Every query normalizes
//! the sources again, so edits to the underlying text are always reflected
//! and there is no cache to invalidate.
//!
//! # Example
//!
//! ```rust
//! use attic_content::{Collection, Recipe};
//!
//! let recipes: Collection<Recipe> = Collection::from_sources([
//!     ("pancakes", "---\ntitle: Pancakes\ndate: 2024-02-13\ntags: [dessert]\n---\nFry."),
//!     ("frangipane", "---\ntitle: Frangipane\ndate: 2024-06-01\ntags: [Dessert]\n---\nBake."),
//! ]);
//!
//! let all = recipes.all();
//! assert_eq!(all[0].slug, "frangipane");
//! assert_eq!(recipes.tags(), vec!["Dessert"]);
//! assert_eq!(recipes.by_tag("dessert").len(), 2);
//! ```

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use attic_core::util::slug::{is_content_file, slug_from_path};
use attic_core::{Error, Result};

use crate::post::{Normalizer, Post, PostKind};

/// Raw text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Slug derived from the file name.
    pub slug: String,
    /// Full document text.
    pub text: String,
}

/// A set of documents of one kind.
#[derive(Debug, Clone)]
pub struct Collection<K: PostKind> {
    sources: Vec<Source>,
    /// Files that could not be read, as `(slug, reason)`.
    unreadable: Vec<(String, String)>,
    normalizer: Normalizer,
    _kind: PhantomData<K>,
}

impl<K: PostKind> Collection<K> {
    /// Build a collection from `(slug, text)` pairs, in enumeration order.
    pub fn from_sources<I, S, T>(sources: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            sources: sources
                .into_iter()
                .map(|(slug, text)| Source {
                    slug: slug.into(),
                    text: text.into(),
                })
                .collect(),
            unreadable: Vec::new(),
            normalizer: Normalizer::default(),
            _kind: PhantomData,
        }
    }

    /// Load every `*.md` file directly inside `dir`.
    ///
    /// Files are enumerated in file-name order. A file that is not valid
    /// UTF-8 is read lossily and logged rather than failing the load. A file
    /// that cannot be read is skipped and reported by [`Self::malformed`].
    /// Only a directory that cannot be listed fails the load.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| Error::io_with_path(e, dir))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                    continue;
                }
            };
            if path.is_file() && is_content_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sources = Vec::with_capacity(paths.len());
        let mut unreadable = Vec::new();
        for path in paths {
            let Some(slug) = slug_from_path(&path) else {
                log::warn!("Skipping {}: no usable file stem", path.display());
                continue;
            };
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    let error = Error::io_with_path(e, &path);
                    log::warn!("Skipping {slug}: {error}");
                    unreadable.push((slug, error.to_string()));
                    continue;
                }
            };
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("{} is not valid UTF-8, reading lossily", path.display());
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            sources.push(Source { slug, text });
        }

        log::debug!(
            "Loaded {} {} document(s) from {}",
            sources.len(),
            K::NAME,
            dir.display()
        );
        Ok(Self {
            sources,
            unreadable,
            normalizer: Normalizer::default(),
            _kind: PhantomData,
        })
    }

    /// Use a specific normalizer (reading speed, render options).
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The raw sources, in enumeration order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Files found by [`Self::load_dir`] that could not be read, as
    /// `(slug, reason)`.
    pub fn unreadable(&self) -> &[(String, String)] {
        &self.unreadable
    }

    /// Number of documents, counting unreadable files.
    pub fn len(&self) -> usize {
        self.sources.len() + self.unreadable.len()
    }

    /// Whether the collection has no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every post, newest first. Malformed documents appear as sentinels.
    pub fn all(&self) -> Vec<Post<K>> {
        let mut posts: Vec<Post<K>> = self
            .sources
            .iter()
            .map(|source| self.normalizer.normalize(&source.text, &source.slug))
            .collect();
        sort_newest_first(&mut posts);
        posts
    }

    /// The post with the given slug.
    pub fn by_slug(&self, slug: &str) -> Option<Post<K>> {
        self.sources
            .iter()
            .find(|source| source.slug == slug)
            .map(|source| self.normalizer.normalize(&source.text, &source.slug))
    }

    /// Every tag in the collection, merged case-insensitively.
    pub fn tags(&self) -> Vec<String> {
        aggregate_tags(&self.all())
    }

    /// Posts carrying `tag`, compared case-insensitively, newest first.
    pub fn by_tag(&self, tag: &str) -> Vec<Post<K>> {
        self.all()
            .into_iter()
            .filter(|post| post.has_tag(tag))
            .collect()
    }

    /// Well-formed posts that have not been shared externally yet.
    pub fn unshared(&self) -> Vec<Post<K>> {
        self.all()
            .into_iter()
            .filter(|post| !post.is_malformed() && !post.is_shared())
            .collect()
    }

    /// Diagnostics for every document that fails to normalize, followed by
    /// every file that could not be read.
    pub fn malformed(&self) -> Vec<(String, Error)> {
        let broken = self.sources.iter().filter_map(|source| {
            self.normalizer
                .try_normalize::<K>(&source.text, &source.slug)
                .err()
                .map(|e| (source.slug.clone(), e))
        });
        let unreadable = self
            .unreadable
            .iter()
            .map(|(slug, reason)| {
                (slug.clone(), Error::malformed(slug.as_str(), reason.as_str()))
            });
        broken.chain(unreadable).collect()
    }
}

/// Sort posts by date, newest first.
///
/// The sort is stable: ties keep enumeration order, and posts whose date
/// does not parse go last.
pub fn sort_newest_first<K: PostKind>(posts: &mut [Post<K>]) {
    posts.sort_by_key(|post| Reverse(post.calendar_date()));
}

/// Merge tags case-insensitively across posts.
///
/// Each tag keeps the casing of its first appearance in enumeration order;
/// the result is sorted case-insensitively.
pub fn aggregate_tags<K: PostKind>(posts: &[Post<K>]) -> Vec<String> {
    let mut canonical: HashMap<String, String> = HashMap::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        canonical
            .entry(tag.to_lowercase())
            .or_insert_with(|| tag.clone());
    }

    let mut tags: Vec<(String, String)> = canonical.into_iter().collect();
    tags.sort();
    tags.into_iter().map(|(_, tag)| tag).collect()
}
