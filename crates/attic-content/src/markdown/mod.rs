//! Markdown document handling.
//!
//! - [`document`]: Split a raw document into header and body
//! - [`frontmatter`]: Parse the header into a [`FrontmatterMap`]
//! - [`render`]: Render the body to HTML
//! - [`helpers`]: Small text utilities shared by the parser and normalizer
//!
//! # Example
//!
//! ```rust
//! use attic_content::markdown::{parse_frontmatter, split_document};
//!
//! let raw = "---\ntitle: \"Test: Subtitle\"\ntags: [a, b, \"c d\"]\n---\nBody";
//! let parts = split_document(raw, "test").unwrap();
//! let fields = parse_frontmatter(parts.header().unwrap_or_default());
//!
//! assert_eq!(fields.get_str("title"), Some("Test: Subtitle"));
//! assert_eq!(fields.get_list("tags").unwrap(), ["a", "b", "c d"]);
//! assert_eq!(parts.body(), "Body");
//! ```

pub mod document;
pub mod frontmatter;
pub mod helpers;
pub mod render;

// Re-export key types and functions
pub use document::{DocumentParts, split_document};
pub use frontmatter::{
    FrontmatterMap, FrontmatterValue, parse as parse_frontmatter,
    parse_bytes as parse_frontmatter_bytes,
};
pub use helpers::{reading_time, split_unquoted_commas, strip_quotes};
pub use render::{MarkdownRenderer, RenderOptions, render as render_markdown};
