//! Command-line argument definitions for the stratus CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. The tool needs no arguments at all: the default
//! invocation renders the architecture PNG to its conventional path.

use clap::Parser;

/// Command-line arguments for the stratus diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file
    #[arg(short, long, default_value = "docs/aws_architecture.png")]
    pub output: String,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
