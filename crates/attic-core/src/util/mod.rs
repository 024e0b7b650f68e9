//! Utility modules.
//!
//! - [`slug`]: Slug derivation from content file paths

pub mod slug;
