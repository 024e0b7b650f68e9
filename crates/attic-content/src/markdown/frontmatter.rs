//! Hand-rolled frontmatter parser.
//!
//! The header format is a small YAML-like dialect: `key: value` scalars plus
//! four equivalent list syntaxes.
//!
//! ```markdown
//! title: "Test: Subtitle"
//! tags: [a, b, "c d"]
//! categories:
//!   [
//!     'baking',
//!     'bread'
//!   ]
//! ingredients:
//!   - Eggs: 2
//!   - Flour: 200 g # sifted
//! keywords: [quick,
//!   easy]
//! ```
//!
//! Parsing is a single deterministic pass over the lines and never fails:
//! malformed brackets are recovered best-effort and an unterminated list is
//! committed at end of input. Keys that do not appear are simply absent.
//!
//! # Usage
//!
//! ```rust
//! use attic_content::markdown::frontmatter::{parse, FrontmatterValue};
//!
//! let fields = parse("title: Hello\ntags:\n  - rust\n  - markdown");
//! assert_eq!(fields.get_str("title"), Some("Hello"));
//! assert_eq!(
//!     fields.get("tags"),
//!     Some(&FrontmatterValue::List(vec!["rust".into(), "markdown".into()]))
//! );
//! ```

use attic_core::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

use super::helpers::{clean_list_element, split_unquoted_commas, strip_quotes};

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// A scalar string with surrounding quotes removed.
    Scalar(String),
    /// An ordered list of strings.
    List(Vec<String>),
}

impl FrontmatterValue {
    /// The scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// The list items, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// The value as a list; a scalar becomes a one-item list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Scalar(value) => vec![value.clone()],
            Self::List(items) => items.clone(),
        }
    }
}

/// Insertion-ordered mapping from frontmatter key to value.
///
/// When a key repeats, the last value wins but the key keeps the position of
/// its first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontmatterMap {
    entries: IndexMap<String, FrontmatterValue>,
}

impl FrontmatterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: FrontmatterValue) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.entries.get(key)
    }

    /// Look up a scalar value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_scalar()
    }

    /// Look up a list value.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key)?.as_list()
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontmatterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Parse header text (the text between the delimiter lines).
///
/// Empty input yields an empty map.
pub fn parse(header: &str) -> FrontmatterMap {
    let mut parser = Parser::default();
    for line in header.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Parse header bytes handed over by the host environment.
///
/// Fails with [`Error::InputType`] when the bytes are not UTF-8 text.
///
/// # Example
///
/// ```rust
/// use attic_content::markdown::frontmatter::parse_bytes;
///
/// assert_eq!(parse_bytes(b"title: Hi").unwrap().get_str("title"), Some("Hi"));
/// assert!(parse_bytes(&[0xff, 0xfe, 0x00]).is_err());
/// ```
pub fn parse_bytes(header: &[u8]) -> Result<FrontmatterMap> {
    let text = std::str::from_utf8(header)
        .map_err(|e| Error::input_type(format!("frontmatter is not UTF-8 text: {e}")))?;
    Ok(parse(text))
}

// ============================================================================
// Parser state machine
// ============================================================================

/// A list that is still collecting items.
#[derive(Debug)]
struct OpenList {
    key: String,
    items: Vec<String>,
    /// Opened with `[`; only a `]` closes it.
    bracketed: bool,
}

impl OpenList {
    fn push(&mut self, raw: &str) {
        let item = clean_list_element(raw);
        if !item.is_empty() && item != "[" && item != "]" {
            self.items.push(item);
        }
    }

    fn push_all(&mut self, raw: &str) {
        for piece in split_unquoted_commas(raw) {
            self.push(piece);
        }
    }
}

#[derive(Debug, Default)]
struct Parser {
    map: FrontmatterMap,
    open: Option<OpenList>,
}

impl Parser {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if self.open.is_some() && self.feed_list_line(line, trimmed) {
            return;
        }

        match split_key_value(line) {
            Some((key, value)) => self.key_value(key, value),
            None => log::debug!("Ignoring frontmatter line outside any key: {trimmed}"),
        }
    }

    /// Handle a line while a list is open.
    ///
    /// Returns `false` when the line ended the list and must be reprocessed
    /// as a key/value line.
    fn feed_list_line(&mut self, line: &str, trimmed: &str) -> bool {
        let Some(list) = self.open.as_mut() else {
            return false;
        };

        if let Some(item) = trimmed.strip_prefix('-') {
            list.items.push(strip_quotes(item.trim()).to_string());
            return true;
        }

        match trimmed {
            "[" => {
                list.bracketed = true;
                return true;
            }
            "]," => return true,
            "]" => {
                self.close_list();
                return true;
            }
            _ => {}
        }

        if !list.bracketed && split_key_value(line).is_some() {
            // A bulleted list has no closing token; the next key ends it.
            self.close_list();
            return false;
        }

        if list.bracketed && starts_new_key(trimmed) {
            log::debug!("Bracketed list '{}' left open before '{trimmed}'", list.key);
            self.close_list();
            return false;
        }

        match trimmed.strip_suffix(']') {
            Some(last) => {
                list.push_all(last);
                self.close_list();
            }
            None if list.bracketed => list.push_all(trimmed),
            None => list.push(trimmed),
        }
        true
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
            let interior = &value[1..value.len() - 1];
            let items = if interior.trim().is_empty() {
                Vec::new()
            } else {
                split_unquoted_commas(interior)
                    .into_iter()
                    .map(|piece| strip_quotes(piece.trim()).to_string())
                    .collect()
            };
            self.map.insert(key, FrontmatterValue::List(items));
        } else if value.is_empty() || value.starts_with('[') {
            let mut list = OpenList {
                key: key.to_string(),
                items: Vec::new(),
                bracketed: !value.is_empty(),
            };
            if let Some(rest) = value.strip_prefix('[') {
                list.push_all(rest);
            }
            self.open = Some(list);
        } else {
            self.map
                .insert(key, FrontmatterValue::Scalar(strip_quotes(value).to_string()));
        }
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open.take() {
            let items = list
                .items
                .into_iter()
                .filter(|item| item != "[" && item != "]")
                .collect();
            self.map.insert(list.key, FrontmatterValue::List(items));
        }
    }

    fn finish(mut self) -> FrontmatterMap {
        if let Some(list) = &self.open {
            log::debug!("Unterminated frontmatter list '{}' closed at end of header", list.key);
        }
        self.close_list();
        self.map
    }
}

/// Split a `key: value` line on its first colon.
///
/// The colon must follow a non-empty key, and lines whose trimmed form
/// starts with `-` are list items, never keys.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    if line.trim_start().starts_with('-') {
        return None;
    }
    let colon = line.find(':')?;
    if colon == 0 {
        return None;
    }
    let key = line[..colon].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[colon + 1..].trim()))
}

/// Whether a line inside a bracketed list is really the next key.
///
/// Quoted items and items ending in `,` stay list items, as does a last item
/// that closes the list with `]`. The key must be a bare word.
fn starts_new_key(trimmed: &str) -> bool {
    if trimmed.starts_with(['\'', '"']) || trimmed.ends_with(',') {
        return false;
    }
    let Some((key, value)) = split_key_value(trimmed) else {
        return false;
    };
    if value.ends_with(']') && !value.starts_with('[') {
        return false;
    }
    key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

// ============================================================================
// Tests
// ============================================================================
