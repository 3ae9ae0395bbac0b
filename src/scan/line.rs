//! Line classification for the document scanner
//!
//! Each body line is classified exactly once per pass:
//! - Markdown headers (`#` run, whitespace, text)
//! - Fence openers (three-or-more backticks, optional language token)
//! - Everything else (prose)
//!
//! Closing fences are recognized separately while inside a block, since a
//! fence token only closes a block when one is open.

/// Token that opens or closes a fenced code block
pub const FENCE: &str = "```";

/// Classification of a single body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Ordinary prose, contributes to the current section buffer
    Text,
    /// A markdown header; payload is the trimmed header text
    Header(String),
    /// Opens a fenced code block; payload is the language token (may be empty)
    FenceOpen(String),
}

/// Classify one line of a document body.
pub fn classify(line: &str) -> LineKind {
    if let Some(text) = parse_header(line) {
        return LineKind::Header(text);
    }
    if let Some(language) = parse_fence_open(line) {
        return LineKind::FenceOpen(language);
    }
    LineKind::Text
}

/// Parse a markdown header: one or more `#` at the start of the line,
/// followed by whitespace, followed by non-empty text.
fn parse_header(line: &str) -> Option<String> {
    let rest = line.strip_prefix('#')?;
    let rest = rest.trim_start_matches('#');
    // The `#` run must be followed by whitespace, not more header text
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

/// Parse a fence opener: three or more backticks at the start of the line,
/// optionally followed by a language token. Returns the token, which may be
/// empty for a bare fence.
fn parse_fence_open(line: &str) -> Option<String> {
    let rest = line.strip_prefix(FENCE)?;
    let rest = rest.trim_start_matches('`');
    Some(rest.trim().to_string())
}

/// Whether a line terminates an open fenced block. Any line whose trimmed
/// content begins with a fence token closes the block, including an opener
/// embedded as example text inside the block.
pub fn is_fence_close(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}
