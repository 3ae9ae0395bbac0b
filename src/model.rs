//! Core data model: content drafts and the snippets extracted from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scan::content_hash;

/// A unit of source content (e.g., a blog draft): free-form markdown text
/// plus metadata. Immutable for the duration of an extraction call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier assigned by the content source
    pub id: String,
    /// Draft title, used as the snippet title until a header is seen
    pub title: String,
    /// Draft-level summary, the fallback when a section has no prose
    pub summary: String,
    /// Raw markdown body
    pub body: String,
    /// When the draft was created (if the source provided it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the draft was last updated (if the source provided it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Cache key for callers that memoize extraction results: extraction is
    /// deterministic, so id + body hash fully identifies the output.
    pub fn cache_key(&self) -> String {
        format!("{}:{}", self.id, content_hash(&self.body))
    }
}

/// One extracted, labeled code example derived from a fenced block
/// within a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique within one extraction: document id + opening fence line index
    pub id: String,
    /// Title of the section the fence appeared in, or the document title
    pub title: String,
    /// Prose accumulated since the last header, with markdown markers
    /// stripped; falls back to the document summary, then to empty
    pub summary: String,
    /// Language tag from the opening fence; never empty
    pub language: String,
    /// Fence body, verbatim
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Document {
        Document {
            id: "d1".to_string(),
            title: "Draft".to_string(),
            summary: "A draft".to_string(),
            body: body.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_cache_key_tracks_body() {
        let a = doc("hello");
        let b = doc("world");
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), doc("hello").cache_key());
        assert!(a.cache_key().starts_with("d1:"));
    }
}
