//! Single-pass snippet extraction over a document body
//!
//! Walks the body's lines once, tracking the current section title and the
//! prose accumulated since the last header; each fenced block encountered
//! becomes one [`Snippet`]. Extraction is pure and total: malformed structure
//! (unterminated fences, missing language tags) is resolved by fallback
//! policies, never reported as an error.

use tracing::debug;

use super::line::{classify, is_fence_close, LineKind};
use crate::model::{Document, Snippet};

/// Sentinel language for fences with no language token
pub const FALLBACK_LANGUAGE: &str = "markdown";

/// Extract every fenced code block from a document as a labeled snippet.
///
/// Snippets are returned in the order their opening fences appear. Running
/// twice on an unchanged document yields identical results, ids included:
/// ids derive from the document id and the opening fence's line index, not
/// from clocks or random state.
pub fn extract(doc: &Document) -> Vec<Snippet> {
    let lines: Vec<&str> = doc.body.lines().collect();
    let mut snippets = Vec::new();

    // Scan state is local to this call; concurrent extractions over
    // different documents never interfere.
    let mut section_title = doc.title.clone();
    let mut section_buffer: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        match classify(lines[i]) {
            LineKind::Header(text) => {
                // The header line itself never reaches a summary
                section_title = text;
                section_buffer.clear();
                i += 1;
            }
            LineKind::FenceOpen(language) => {
                let fence_line = i;
                let mut body: Vec<&str> = Vec::new();
                let mut j = i + 1;
                while j < lines.len() && !is_fence_close(lines[j]) {
                    body.push(lines[j]);
                    j += 1;
                }

                let language = if language.is_empty() {
                    FALLBACK_LANGUAGE.to_string()
                } else {
                    language
                };

                snippets.push(Snippet {
                    id: format!("{}-{}", doc.id, fence_line),
                    title: section_title.clone(),
                    summary: compose_summary(&section_buffer, &doc.summary),
                    language,
                    code: join_code(&body),
                    created_at: doc.created_at,
                    updated_at: doc.updated_at,
                });

                // Each fence consumes the buffer: a second fence in the same
                // section falls back to the document summary unless new prose
                // appeared in between.
                section_buffer.clear();

                // Resume after the closing fence, or stop at end of document
                // for an unterminated block
                i = if j < lines.len() { j + 1 } else { j };
            }
            LineKind::Text => {
                section_buffer.push(lines[i]);
                i += 1;
            }
        }
    }

    debug!(
        document = %doc.id,
        snippets = snippets.len(),
        "extraction complete"
    );

    snippets
}

/// Join accumulated section prose into a snippet summary, stripping backtick
/// and `#` markers. Empty prose falls back to the document summary, then to
/// an empty string.
fn compose_summary(buffer: &[&str], doc_summary: &str) -> String {
    let joined = buffer.join(" ");
    let stripped: String = joined.chars().filter(|c| !matches!(c, '`' | '#')).collect();
    let trimmed = stripped.trim();
    if !trimmed.is_empty() {
        trimmed.to_string()
    } else {
        doc_summary.to_string()
    }
}

/// Join captured fence lines into the snippet body. Interior whitespace is
/// preserved verbatim; a body that is nothing but blank lines collapses to
/// empty.
fn join_code(body: &[&str]) -> String {
    let code = body.join("\n");
    if code.trim().is_empty() {
        code.trim_end().to_string()
    } else {
        code
    }
}
