//! Command-line argument definitions.

use std::path::{Path, PathBuf};

use attic_core::ContentConfig;
use clap::{Parser, Subcommand, ValueEnum};

/// Attic CLI - Markdown blog and recipe content tools
#[derive(Parser, Debug)]
#[command(name = "attic", version)]
#[command(about = "Inspect and validate Markdown blog posts and recipes", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content root holding `blog/` and `recipes/` directories
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commands that read a content directory.
    #[command(flatten)]
    Content(ContentCommand),

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that read a content directory.
#[derive(Subcommand, Debug)]
pub enum ContentCommand {
    /// List posts, newest first
    List {
        /// Collection to read
        #[arg(short, long, value_enum, default_value_t = Kind::Blog)]
        kind: Kind,

        /// Only posts carrying this tag (case-insensitive)
        #[arg(short, long)]
        tag: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post slug (file name without `.md`)
        slug: String,

        /// Collection to read
        #[arg(short, long, value_enum, default_value_t = Kind::Blog)]
        kind: Kind,

        /// Print the rendered HTML body
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,

        /// Multiply recipe ingredient amounts and servings
        #[arg(long)]
        scale: Option<f64>,
    },

    /// List every tag with its post count
    Tags {
        /// Collection to read
        #[arg(short, long, value_enum, default_value_t = Kind::Blog)]
        kind: Kind,
    },

    /// Report malformed documents; exits non-zero when any exist
    Check {
        /// Collection to check (default: all)
        #[arg(short, long, value_enum)]
        kind: Option<Kind>,
    },

    /// List well-formed posts that have not been shared yet
    Pending {
        /// Collection to read
        #[arg(short, long, value_enum, default_value_t = Kind::Blog)]
        kind: Kind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Content collections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Blog articles
    Blog,
    /// Recipes
    Recipes,
}

impl Kind {
    /// Every collection, in display order.
    pub const ALL: [Kind; 2] = [Kind::Blog, Kind::Recipes];

    /// The configured directory for this collection.
    pub fn dir<'a>(&self, content: &'a ContentConfig) -> &'a Path {
        match self {
            Kind::Blog => &content.blog_dir,
            Kind::Recipes => &content.recipes_dir,
        }
    }

    /// Directory name under a content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Kind::Blog => "blog",
            Kind::Recipes => "recipes",
        }
    }
}

/// `attic config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `render.words_per_minute`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value (bool, integer, float, or string)
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file (default: platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as `ATTIC_*` environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
