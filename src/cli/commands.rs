//! Command implementations

use crate::config::{ScanConfig, CONFIG_FILE};
use crate::filter::{self, SnippetFilter};
use crate::model::Snippet;
use crate::scan;
use crate::source::{self, SourceError};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Extract snippets from a markdown file or a directory of drafts
pub fn extract(path: &Path, filter: &SnippetFilter) -> Result<Vec<Snippet>> {
    if !path.exists() {
        anyhow::bail!("No such file or directory: {:?}", path);
    }

    let config = if path.is_dir() {
        ScanConfig::load_or_default(path)?
    } else {
        ScanConfig::default()
    };

    let documents = source::collect_documents(path, &config)?;
    info!(documents = documents.len(), "extracting snippets");

    let mut snippets = Vec::new();
    for doc in &documents {
        snippets.extend(scan::extract(doc));
    }

    Ok(filter.apply(&snippets).into_iter().cloned().collect())
}

/// Extract snippets from a JSON batch of content items. Items that violate
/// the input contract (non-text body, missing id) are skipped with a warning
/// rather than failing the batch.
pub fn batch(file: &Path, filter: &SnippetFilter) -> Result<Vec<Snippet>> {
    let items = source::load_batch(file)?;
    info!(items = items.len(), "normalizing content items");

    let mut snippets = Vec::new();
    for item in &items {
        match item.normalize() {
            Ok(doc) => snippets.extend(scan::extract(&doc)),
            Err(err @ (SourceError::NonTextBody { .. } | SourceError::MissingField { .. })) => {
                warn!("skipping content item: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(filter.apply(&snippets).into_iter().cloned().collect())
}

/// List the distinct languages found under a path. A `.json` path is treated
/// as a batch of content items, anything else as markdown.
pub fn languages(path: &Path) -> Result<Vec<String>> {
    let unfiltered = SnippetFilter::new();
    let snippets = if path.extension().is_some_and(|ext| ext == "json") {
        batch(path, &unfiltered)?
    } else {
        extract(path, &unfiltered)?
    };

    Ok(filter::languages(&snippets))
}

/// Show or initialize the configuration for a directory
pub fn config(dir: &Path, init: bool) -> Result<()> {
    if init {
        ScanConfig::default().save(dir)?;
        println!("✓ Wrote {:?}", dir.join(CONFIG_FILE));
        return Ok(());
    }

    let config = ScanConfig::load_or_default(dir)?;

    println!("snipscan Configuration");
    println!("======================\n");

    println!("Draft patterns:");
    for pattern in &config.draft_patterns {
        println!("  - {}", pattern);
    }

    println!("\nIgnore patterns:");
    for pattern in &config.ignore_patterns {
        println!("  - {}", pattern);
    }

    Ok(())
}

/// Print snippets in JSON format
pub fn print_snippets_json(snippets: &[Snippet]) -> Result<()> {
    let json = serde_json::to_string_pretty(snippets)?;
    println!("{}", json);
    Ok(())
}

/// Print snippets in text format
pub fn print_snippets_text(snippets: &[Snippet]) {
    if snippets.is_empty() {
        println!("No snippets found.");
        return;
    }

    println!("\nExtracted Snippets:");
    println!("===================\n");

    for snippet in snippets {
        println!("[{}] {}", snippet.language, snippet.title);
        println!("   ID: {}", snippet.id);
        if !snippet.summary.is_empty() {
            println!("   Summary: {}", snippet.summary);
        }
        if let Some(updated) = snippet.updated_at {
            println!("   Updated: {}", updated.format("%Y-%m-%d"));
        }
        for line in snippet.code.lines() {
            println!("   | {}", line);
        }
        println!();
    }
}
