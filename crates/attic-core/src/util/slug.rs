//! Slug utilities.
//!
//! A post's slug is its file name without the `.md` extension. Slugs are
//! stable identifiers used in URLs, so they are taken verbatim rather than
//! normalized.

use std::path::Path;

/// File extension of content documents.
pub const CONTENT_EXTENSION: &str = "md";

/// Compute a slug from a file path's stem.
///
/// Returns `None` if the path has no UTF-8 file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use attic_core::util::slug::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/content/recipes/pancakes.md")),
///     Some("pancakes".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Check whether a path names a content document (`*.md`).
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CONTENT_EXTENSION))
}
