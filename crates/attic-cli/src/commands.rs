//! Content commands: list, show, tags, check, pending.
//!
//! Each command builds its output as a `String` so the formatting can be
//! tested without capturing stdout; [`run`] prints it.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use attic_content::post::PostKind;
use attic_content::{Article, Collection, Normalizer, Post, Recipe, scale_ingredients};
use attic_core::{AtticConfig, Error, RenderConfig};

use crate::cli::{Args, Command, ContentCommand, Kind};
use crate::config_handlers::handle_config_command;
use crate::logging;

// ============================================================================
// Entry point
// ============================================================================

/// Run a parsed command line.
pub fn run(args: Args) -> Result<ExitCode> {
    let Args {
        config: config_path,
        verbose,
        content_dir,
        command,
    } = args;

    match command {
        Command::Config { action } => {
            logging::init(verbose, None);
            handle_config_command(config_path.as_deref(), action)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Content(command) => {
            let mut config = AtticConfig::load(config_path.as_deref())
                .context("Failed to load configuration")?;
            logging::init(verbose, Some(config.logging.level.as_str()));
            if let Some(root) = content_dir {
                config.content.blog_dir = root.join(Kind::Blog.dir_name());
                config.content.recipes_dir = root.join(Kind::Recipes.dir_name());
            }
            tracing::debug!(
                blog = %config.content.blog_dir.display(),
                recipes = %config.content.recipes_dir.display(),
                "Resolved content directories"
            );
            run_content(command, &config)
        }
    }
}

/// Run a content command against resolved configuration.
pub fn run_content(command: ContentCommand, config: &AtticConfig) -> Result<ExitCode> {
    let render = &config.render;
    let output = match command {
        ContentCommand::List { kind, tag, json } => {
            let dir = kind.dir(&config.content);
            match kind {
                Kind::Blog => list::<Article>(dir, render, tag.as_deref(), json)?,
                Kind::Recipes => list::<Recipe>(dir, render, tag.as_deref(), json)?,
            }
        }
        ContentCommand::Show {
            slug,
            kind,
            html,
            json,
            scale,
        } => {
            let format = ShowFormat::from_flags(html, json);
            let dir = kind.dir(&config.content);
            match kind {
                Kind::Blog => show::<Article>(dir, render, &slug, format, scale)?,
                Kind::Recipes => show::<Recipe>(dir, render, &slug, format, scale)?,
            }
        }
        ContentCommand::Tags { kind } => {
            let dir = kind.dir(&config.content);
            match kind {
                Kind::Blog => tags::<Article>(dir, render)?,
                Kind::Recipes => tags::<Recipe>(dir, render)?,
            }
        }
        ContentCommand::Pending { kind, json } => {
            let dir = kind.dir(&config.content);
            match kind {
                Kind::Blog => pending::<Article>(dir, render, json)?,
                Kind::Recipes => pending::<Recipe>(dir, render, json)?,
            }
        }
        ContentCommand::Check { kind } => {
            let kinds = kind.map_or(Kind::ALL.to_vec(), |k| vec![k]);
            let report = check(&kinds, config)?;
            print!("{}", report.output);
            return Ok(if report.malformed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a collection with the configured render settings.
pub fn open<K: PostKind>(dir: &Path, render: &RenderConfig) -> Result<Collection<K>> {
    let collection = Collection::<K>::load_dir(dir)
        .with_context(|| format!("Failed to load {} content", K::NAME))?;
    Ok(collection.with_normalizer(Normalizer::from_config(render)))
}

/// One line per post: date, slug, title, tags.
pub fn format_listing<K: PostKind>(posts: &[Post<K>]) -> Result<String> {
    let width = posts.iter().map(|p| p.slug.len()).max().unwrap_or(0);
    let mut out = String::new();
    for post in posts {
        write!(out, "{}  {:<width$}  {}", post.date, post.slug, post.title)?;
        if !post.tags.is_empty() {
            write!(out, "  [{}]", post.tags.join(", "))?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// list / pending
// ============================================================================

/// `attic list`: every post newest first, optionally filtered by tag.
pub fn list<K: PostKind>(
    dir: &Path,
    render: &RenderConfig,
    tag: Option<&str>,
    json: bool,
) -> Result<String> {
    let collection = open::<K>(dir, render)?;
    let posts = match tag {
        Some(tag) => collection.by_tag(tag),
        None => collection.all(),
    };
    tracing::info!(count = posts.len(), kind = K::NAME, "Listing posts");

    if json {
        to_json(&posts)
    } else {
        format_listing(&posts)
    }
}

/// `attic pending`: well-formed posts without a share reference.
pub fn pending<K: PostKind>(dir: &Path, render: &RenderConfig, json: bool) -> Result<String> {
    let posts = open::<K>(dir, render)?.unshared();
    if json {
        to_json(&posts)
    } else if posts.is_empty() {
        Ok("Nothing pending.\n".to_string())
    } else {
        format_listing(&posts)
    }
}

// ============================================================================
// show
// ============================================================================

/// Output format for `attic show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    /// Metadata header followed by the Markdown body.
    Text,
    /// Rendered HTML body only.
    Html,
    /// The full post record.
    Json,
}

impl ShowFormat {
    /// Pick the format from the `--html` / `--json` flags.
    pub fn from_flags(html: bool, json: bool) -> Self {
        match (html, json) {
            (true, _) => Self::Html,
            (_, true) => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Kind-specific lines in `attic show` text output.
pub trait ShowDetails: PostKind {
    /// Rewrite the kind-specific fields for a scale factor.
    fn scale(_extra: &mut Self::Extra, _factor: f64) {}

    /// Lines describing the kind-specific fields.
    fn detail_lines(extra: &Self::Extra) -> Vec<String>;
}

impl ShowDetails for Article {
    fn detail_lines(extra: &Self::Extra) -> Vec<String> {
        vec![format!("AI contributions: {}", extra.ai_contributions)]
    }
}

impl ShowDetails for Recipe {
    fn scale(extra: &mut Self::Extra, factor: f64) {
        extra.ingredients = scale_ingredients(&extra.ingredients, factor);
        extra.servings = extra.servings.map(|servings| servings * factor);
    }

    fn detail_lines(extra: &Self::Extra) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(servings) = extra.servings {
            lines.push(format!("Servings: {servings}"));
        }
        if !extra.ingredients.is_empty() {
            lines.push("Ingredients:".to_string());
            lines.extend(extra.ingredients.iter().map(|i| format!("  - {i}")));
        }
        lines
    }
}

/// `attic show`: one post by slug.
pub fn show<K: ShowDetails>(
    dir: &Path,
    render: &RenderConfig,
    slug: &str,
    format: ShowFormat,
    scale: Option<f64>,
) -> Result<String> {
    let mut post = open::<K>(dir, render)?
        .by_slug(slug)
        .ok_or_else(|| Error::not_found(K::NAME, slug))?;

    if let Some(factor) = scale {
        if !(factor.is_finite() && factor > 0.0) {
            anyhow::bail!("Scale factor must be a positive number, got {factor}");
        }
        K::scale(&mut post.extra, factor);
    }

    match format {
        ShowFormat::Html => Ok(format!("{}\n", post.html.trim())),
        ShowFormat::Json => to_json(&post),
        ShowFormat::Text => format_post(&post),
    }
}

/// Metadata header, kind-specific details, then the Markdown body.
pub fn format_post<K: ShowDetails>(post: &Post<K>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Title: {}", post.title)?;
    writeln!(out, "Slug: {}", post.slug)?;
    writeln!(out, "Date: {}", post.date)?;
    if !post.excerpt.is_empty() {
        writeln!(out, "Excerpt: {}", post.excerpt)?;
    }
    if !post.tags.is_empty() {
        writeln!(out, "Tags: {}", post.tags.join(", "))?;
    }
    writeln!(out, "Reading time: {} min", post.reading_time)?;
    if let Some(uri) = &post.share_reference {
        writeln!(out, "Shared: {uri}")?;
    }
    for line in K::detail_lines(&post.extra) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\n{}", post.content)?;
    Ok(out)
}

// ============================================================================
// tags
// ============================================================================

/// `attic tags`: every tag with the number of posts carrying it.
pub fn tags<K: PostKind>(dir: &Path, render: &RenderConfig) -> Result<String> {
    let posts = open::<K>(dir, render)?.all();
    let mut out = String::new();
    for tag in attic_content::aggregate_tags(&posts) {
        let count = posts.iter().filter(|post| post.has_tag(&tag)).count();
        writeln!(out, "{tag} ({count})")?;
    }
    Ok(out)
}

// ============================================================================
// check
// ============================================================================

/// Result of `attic check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Human-readable report.
    pub output: String,
    /// Documents checked.
    pub total: usize,
    /// Documents that failed to normalize.
    pub malformed: usize,
}

/// `attic check`: report every malformed document in the given collections.
pub fn check(kinds: &[Kind], config: &AtticConfig) -> Result<CheckReport> {
    let mut output = String::new();
    let mut total = 0;
    let mut malformed = 0;

    for kind in kinds {
        let dir = kind.dir(&config.content);
        let problems = match kind {
            Kind::Blog => {
                let collection = open::<Article>(dir, &config.render)?;
                total += collection.len();
                collection.malformed()
            }
            Kind::Recipes => {
                let collection = open::<Recipe>(dir, &config.render)?;
                total += collection.len();
                collection.malformed()
            }
        };
        for (slug, error) in &problems {
            writeln!(output, "{}/{slug}: {error}", kind.dir_name())?;
        }
        malformed += problems.len();
    }

    if malformed == 0 {
        writeln!(output, "All {total} document(s) OK")?;
    } else {
        writeln!(output, "{malformed} of {total} document(s) malformed")?;
    }

    Ok(CheckReport {
        output,
        total,
        malformed,
    })
}

// ============================================================================
// Tests
// ============================================================================
