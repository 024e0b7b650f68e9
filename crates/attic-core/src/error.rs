//! Error types for the Attic content pipeline.

use std::path::{Path, PathBuf};

/// Result type alias for Attic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, parsing, or configuring content.
///
/// Document-level failures ([`Error::MalformedDocument`]) are normally
/// contained by the normalizer and never reach a listing; they surface only
/// through the fallible entry points used for diagnostics.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Frontmatter input was not text.
    #[error("Input type error: {message}")]
    InputType {
        /// What was wrong with the input
        message: String,
    },

    /// A document could not be split or coerced into a post.
    #[error("Malformed document '{slug}': {reason}")]
    MalformedDocument {
        /// Slug of the offending document
        slug: String,
        /// What went wrong
        reason: String,
    },

    /// I/O error, optionally tied to a path.
    #[error("I/O error{}: {source}", display_path(.path))]
    Io {
        /// Path being read or written, if known
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// No document with the given slug exists in a collection.
    #[error("No {kind} found with slug '{slug}'")]
    NotFound {
        /// Collection kind ("blog", "recipes")
        kind: String,
        /// Slug that was looked up
        slug: String,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates a new input type error.
    pub fn input_type<S: Into<String>>(message: S) -> Self {
        Error::InputType {
            message: message.into(),
        }
    }

    /// Creates a new malformed document error.
    pub fn malformed<S, R>(slug: S, reason: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Error::MalformedDocument {
            slug: slug.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<K, S>(kind: K, slug: S) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        Error::NotFound {
            kind: kind.into(),
            slug: slug.into(),
        }
    }

    /// Returns `true` for errors that describe bad content rather than a
    /// broken environment.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Error::InputType { .. } | Error::MalformedDocument { .. }
        )
    }
}
