//! Attic Core: shared errors, configuration, and utilities.
//!
//! This crate provides the foundational types used across all Attic crates.
//! It has no internal Attic dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration with environment overrides
//! - [`util`]: Slug and path utilities

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{AtticConfig, ContentConfig, LoggingConfig, RenderConfig};
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::slug::slug_from_path;
