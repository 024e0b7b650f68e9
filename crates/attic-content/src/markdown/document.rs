//! Header/body splitting for raw documents.
//!
//! A document's header sits between two delimiter lines consisting solely
//! of `---` (trailing whitespace and `\r` are tolerated):
//!
//! ```markdown
//! ---
//! title: Pancakes
//! tags: [breakfast]
//! ---
//!
//! # Pancakes
//! ```
//!
//! # Behavior
//!
//! - First non-blank line is not a delimiter: no header, whole text is body
//! - Opening delimiter but no closing one: [`Error::MalformedDocument`]
//! - Otherwise: header is the trimmed text between the delimiters, body is
//!   the trimmed text after the closing delimiter (later `---` lines are
//!   ordinary Markdown thematic breaks)

use attic_core::{Error, Result};

/// A raw document split into header and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentParts<'a> {
    header: Option<&'a str>,
    body: &'a str,
}

impl<'a> DocumentParts<'a> {
    /// The header text, or `None` when the document has no header.
    pub fn header(&self) -> Option<&'a str> {
        self.header
    }

    /// Whether a complete header was found.
    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    /// The Markdown body.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split a raw document into header and body.
///
/// `slug` is only used for error reporting.
///
/// # Example
///
/// ```rust
/// use attic_content::markdown::split_document;
///
/// let parts = split_document("---\ntitle: Test\n---\n\n# Heading", "test").unwrap();
/// assert_eq!(parts.header(), Some("title: Test"));
/// assert_eq!(parts.body(), "# Heading");
///
/// let parts = split_document("# Just Markdown", "plain").unwrap();
/// assert!(!parts.has_header());
/// assert_eq!(parts.body(), "# Just Markdown");
///
/// assert!(split_document("---\ntitle: Open\n\nNo closing", "broken").is_err());
/// ```
pub fn split_document<'a>(raw: &'a str, slug: &str) -> Result<DocumentParts<'a>> {
    let mut offset = 0;
    let mut header_start: Option<usize> = None;

    for line in raw.split_inclusive('\n') {
        let line_end = offset + line.len();
        match header_start {
            None if line.trim().is_empty() => {}
            None if is_delimiter(line) => header_start = Some(line_end),
            None => {
                return Ok(DocumentParts {
                    header: None,
                    body: raw,
                });
            }
            Some(start) if is_delimiter(line) => {
                return Ok(DocumentParts {
                    header: Some(raw[start..offset].trim()),
                    body: raw[line_end..].trim(),
                });
            }
            Some(_) => {}
        }
        offset = line_end;
    }

    match header_start {
        Some(_) => Err(Error::malformed(
            slug,
            "frontmatter opened with '---' but never closed",
        )),
        None => Ok(DocumentParts {
            header: None,
            body: raw,
        }),
    }
}
