//! Configuration for the Attic content pipeline.
//!
//! Configuration is read from a TOML file and layered in this order:
//!
//! 1. Built-in defaults ([`AtticConfig::default`])
//! 2. The config file (explicit path, then `ATTIC_CONFIG`, then
//!    `<config dir>/attic/config.toml`)
//! 3. Environment overrides (`ATTIC_BLOG_DIR`, `ATTIC_RECIPES_DIR`,
//!    `ATTIC_LOG_LEVEL`)
//!
//! ```toml
//! [content]
//! blog_dir = "content/blog"
//! recipes_dir = "content/recipes"
//!
//! [render]
//! words_per_minute = 200
//! escape_raw_html = true
//!
//! [logging]
//! level = "warn"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for config directories and env var prefixes.
pub const PROJECT_NAME: &str = "attic";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ATTIC_CONFIG";

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtticConfig {
    /// Where content lives.
    pub content: ContentConfig,
    /// Rendering and derived-field settings.
    pub render: RenderConfig,
    /// Log verbosity.
    pub logging: LoggingConfig,
}

/// Content directory locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding article Markdown files.
    pub blog_dir: PathBuf,
    /// Directory holding recipe Markdown files.
    pub recipes_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            blog_dir: PathBuf::from("content/blog"),
            recipes_dir: PathBuf::from("content/recipes"),
        }
    }
}

/// Settings that affect rendered HTML and derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Reading speed used for the reading-time estimate.
    pub words_per_minute: u32,
    /// Render raw HTML found in Markdown as escaped text.
    pub escape_raw_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            escape_raw_html: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AtticConfig {
    /// Load configuration, applying file contents and env overrides.
    ///
    /// An explicitly requested file (argument or `ATTIC_CONFIG`) must exist.
    /// The platform default file is optional; when absent the built-in
    /// defaults are used.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let explicit = config_path
            .map(PathBuf::from)
            .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize this configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The config path that [`AtticConfig::load`] would read.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        config_path
            .map(PathBuf::from)
            .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
            .or_else(Self::default_config_path)
    }

    /// `<platform config dir>/attic/config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Apply `ATTIC_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("ATTIC_BLOG_DIR") {
            self.content.blog_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("ATTIC_RECIPES_DIR") {
            self.content.recipes_dir = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("ATTIC_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Check invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        if self.render.words_per_minute == 0 {
            return Err(Error::config("render.words_per_minute must be positive"));
        }
        Ok(())
    }

    /// Flatten the configuration into `ATTIC_*` environment variables.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        vec![
            (
                "ATTIC_BLOG_DIR".to_string(),
                self.content.blog_dir.display().to_string(),
            ),
            (
                "ATTIC_RECIPES_DIR".to_string(),
                self.content.recipes_dir.display().to_string(),
            ),
            ("ATTIC_LOG_LEVEL".to_string(), self.logging.level.clone()),
        ]
    }
}
