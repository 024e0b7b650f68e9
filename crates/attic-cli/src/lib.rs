//! # attic-cli
//!
//! Command-line tools for Attic content directories:
//! - Listing posts and recipes, optionally filtered by tag
//! - Showing a single post as text, HTML, or JSON
//! - Aggregating tags
//! - Checking for malformed documents
//! - Finding posts that have not been shared yet
//! - Managing the configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

pub use commands::run;
