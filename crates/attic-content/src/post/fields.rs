//! Field coercion shared by every post kind.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::markdown::{FrontmatterMap, FrontmatterValue};

/// Today's date as `YYYY-MM-DD` (UTC).
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Coerce the `date` field.
///
/// Strings are used as written, except full RFC 3339 timestamps, which are
/// reduced to their calendar date. A missing date defaults to today.
///
/// # Example
///
/// ```rust
/// use attic_content::post::coerce_date;
///
/// assert_eq!(coerce_date(Some("2024-02-13")), "2024-02-13");
/// assert_eq!(coerce_date(Some("2024-02-13T09:30:00Z")), "2024-02-13");
/// assert_eq!(coerce_date(Some("Spring 2024")), "Spring 2024");
/// ```
pub fn coerce_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => today(),
        Some(date) => match DateTime::parse_from_rfc3339(date) {
            Ok(timestamp) => timestamp.date_naive().format("%Y-%m-%d").to_string(),
            Err(_) => date.to_string(),
        },
    }
}

/// Coerce the `tags` field into a deduplicated list.
///
/// - List values: each element trimmed
/// - Scalar values: `[`, `]`, and quote characters removed, then split on
///   commas (`"dinner, quick"` → `["dinner", "quick"]`)
///
/// Empty tags are dropped and duplicates that differ only in case collapse
/// onto the first casing seen.
pub fn coerce_tags(value: Option<&FrontmatterValue>) -> Vec<String> {
    let raw: Vec<String> = match value {
        None => Vec::new(),
        Some(FrontmatterValue::List(items)) => items.iter().map(|t| t.trim().to_string()).collect(),
        Some(FrontmatterValue::Scalar(text)) => text
            .replace(['[', ']', '"', '\''], "")
            .split(',')
            .map(|t| t.trim().to_string())
            .collect(),
    };
    dedupe_tags(raw.into_iter().filter(|t| !t.is_empty()))
}

/// Deduplicate tags case-insensitively, keeping the first casing and order.
///
/// # Example
///
/// ```rust
/// use attic_content::post::dedupe_tags;
///
/// let tags = dedupe_tags(["Dessert", "quick", "dessert"].map(String::from));
/// assert_eq!(tags, vec!["Dessert", "quick"]);
/// ```
pub fn dedupe_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .collect()
}

/// A scalar field or a default, warning when the key holds a list.
pub(crate) fn scalar_or(fields: &FrontmatterMap, key: &str, slug: &str, default: &str) -> String {
    match fields.get(key) {
        Some(FrontmatterValue::Scalar(value)) => value.clone(),
        Some(FrontmatterValue::List(_)) => {
            log::warn!("Expected a scalar for '{key}' in '{slug}', found a list");
            default.to_string()
        }
        None => default.to_string(),
    }
}
