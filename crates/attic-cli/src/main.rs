//! Attic CLI
//!
//! Command-line interface for Attic content directories.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use attic_cli::cli::Args;
use clap::Parser;

fn main() -> Result<ExitCode> {
    attic_cli::run(Args::parse())
}
