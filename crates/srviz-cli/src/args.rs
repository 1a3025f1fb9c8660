//! Command-line argument definitions for the srviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the configuration dump, the interface to
//! draw, where the diagram goes and how verbose logging is.

use clap::Parser;

/// Render a Nokia SR interface as a Mermaid diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration dump
    #[arg(short, long)]
    pub file: String,

    /// Interface to draw, as named in the configuration (without quotes)
    #[arg(short, long, required_unless_present = "list")]
    pub interface: Option<String>,

    /// List declared interfaces instead of drawing one
    #[arg(short, long, conflicts_with_all = ["interface", "output", "raw"])]
    pub list: bool,

    /// Write the diagram to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print bare Mermaid to stdout, without the code fence
    #[arg(long)]
    pub raw: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
