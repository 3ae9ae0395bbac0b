//! Markdown document decomposition
//!
//! This module turns free-form content drafts into labeled code snippets:
//! - Line classification (headers, fence openers, prose)
//! - A single-pass scanner that emits one snippet per fenced block

pub mod line;
pub mod scanner;

pub use line::{classify, is_fence_close, LineKind};
pub use scanner::{extract, FALLBACK_LANGUAGE};

use sha2::{Digest, Sha256};

/// Compute a stable hash for content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
