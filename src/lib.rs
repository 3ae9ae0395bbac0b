//! snipscan - code snippet extraction for content drafts
//!
//! This library takes free-form markdown documents ("content drafts") and
//! extracts a sequence of labeled, typed code snippets by scanning section
//! headers and fenced code blocks, inferring a title, summary, and language
//! for each snippet found.

pub mod cli;
pub mod config;
pub mod filter;
pub mod model;
pub mod scan;
pub mod source;

/// Re-export commonly used types
pub use filter::SnippetFilter;
pub use model::{Document, Snippet};
pub use scan::extract;
pub use source::{RawContentItem, SourceError};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "snipscan";
