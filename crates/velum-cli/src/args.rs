//! Command-line argument definitions for the Velum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, image resolution,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Velum slide composer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input deck JSON file
    #[arg(help = "Path to the deck specification file")]
    pub input: String,

    /// Directory the per-slide SVG files are written to
    #[arg(short, long, default_value = "slides")]
    pub output: String,

    /// Base directory for resolving image references
    #[arg(short, long)]
    pub images: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
