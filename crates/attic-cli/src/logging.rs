//! Log subscriber setup.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here also captures those records. Filter precedence: `RUST_LOG`, then
//! `--verbose`, then `logging.level` from the config file.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, config_level: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match config_level.map(str::trim) {
        Some(level) if !level.is_empty() => level.to_string(),
        _ => "warn".to_string(),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = default_directive(verbose, config_level);
        EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("Invalid log level '{directive}' ({e}), falling back to 'warn'");
            EnvFilter::new("warn")
        })
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Log subscriber already installed");
    }
}
