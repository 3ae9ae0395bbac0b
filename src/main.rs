//! snipscan - code snippet extraction for content drafts
//!
//! Scans markdown content drafts for fenced code blocks and emits labeled,
//! typed snippets suitable for listing, filtering, and copy-paste reuse.

use anyhow::Result;
use snipscan::cli::{
    batch, config, extract, languages, print_snippets_json, print_snippets_text, Cli, Commands,
    OutputFormat,
};
use snipscan::filter::SnippetFilter;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Extract(args) => {
            let filter = snippet_filter(args.keyword.as_deref(), args.language.as_deref());
            let snippets = extract(Path::new(&args.path), &filter)?;

            match cli.format {
                OutputFormat::Json => print_snippets_json(&snippets)?,
                OutputFormat::Text => print_snippets_text(&snippets),
            }
        }

        Commands::Batch(args) => {
            let filter = snippet_filter(args.keyword.as_deref(), args.language.as_deref());
            let snippets = batch(Path::new(&args.file), &filter)?;

            match cli.format {
                OutputFormat::Json => print_snippets_json(&snippets)?,
                OutputFormat::Text => print_snippets_text(&snippets),
            }
        }

        Commands::Languages(args) => {
            let langs = languages(Path::new(&args.path))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&langs)?),
                OutputFormat::Text => {
                    if langs.is_empty() {
                        println!("No snippets found.");
                    }
                    for lang in langs {
                        println!("{}", lang);
                    }
                }
            }
        }

        Commands::Config(args) => {
            config(Path::new(&args.dir), args.init)?;
        }
    }

    Ok(())
}

/// Build a snippet filter from optional CLI criteria
fn snippet_filter(keyword: Option<&str>, language: Option<&str>) -> SnippetFilter {
    let mut filter = SnippetFilter::new();
    if let Some(keyword) = keyword {
        filter = filter.with_keyword(keyword);
    }
    if let Some(language) = language {
        filter = filter.with_language(language);
    }
    filter
}
