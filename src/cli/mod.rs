//! CLI interface using clap
//!
//! Provides the command-line interface for snipscan

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};

/// snipscan - code snippet extraction for content drafts
#[derive(Parser, Debug)]
#[command(name = "snipscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract snippets from a markdown file or a directory of drafts
    Extract(ExtractArgs),

    /// Extract snippets from a JSON batch of content items
    Batch(BatchArgs),

    /// List the distinct languages found in a file or directory
    Languages(LanguagesArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Markdown file or directory to scan
    pub path: String,

    /// Keep only snippets whose title or summary contains this keyword
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Keep only snippets with this exact language tag
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of content items
    pub file: String,

    /// Keep only snippets whose title or summary contains this keyword
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Keep only snippets with this exact language tag
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for languages command
#[derive(Parser, Debug)]
pub struct LanguagesArgs {
    /// Markdown file, directory, or JSON batch (by .json extension)
    pub path: String,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Directory the configuration applies to
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// Write the default configuration file
    #[arg(long)]
    pub init: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
