//! Keyword and language filtering over extracted snippets

use crate::model::Snippet;

/// Filter criteria for a snippet listing
#[derive(Debug, Clone, Default)]
pub struct SnippetFilter {
    /// Case-insensitive keyword matched against title and summary
    pub keyword: Option<String>,
    /// Exact language tag
    pub language: Option<String>,
}

impl SnippetFilter {
    /// Create an empty filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword criterion
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    /// Set the language criterion
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Check whether a snippet satisfies every set criterion
    pub fn matches(&self, snippet: &Snippet) -> bool {
        let matches_keyword = match &self.keyword {
            Some(keyword) if !keyword.is_empty() => {
                let needle = keyword.to_lowercase();
                snippet.title.to_lowercase().contains(&needle)
                    || snippet.summary.to_lowercase().contains(&needle)
            }
            _ => true,
        };

        let matches_language = match &self.language {
            Some(language) => snippet.language == *language,
            None => true,
        };

        matches_keyword && matches_language
    }

    /// Apply the filter, preserving extraction order
    pub fn apply<'a>(&self, snippets: &'a [Snippet]) -> Vec<&'a Snippet> {
        snippets.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Distinct languages across a snippet listing, sorted
pub fn languages(snippets: &[Snippet]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for snippet in snippets {
        if !seen.contains(&snippet.language) {
            seen.push(snippet.language.clone());
        }
    }
    seen.sort();
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(title: &str, summary: &str, language: &str) -> Snippet {
        Snippet {
            id: format!("{}-0", title),
            title: title.to_string(),
            summary: summary.to_string(),
            language: language.to_string(),
            code: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_keyword_matches_title_and_summary() {
        let auth = snippet("Authentication", "Sign a user in", "typescript");
        let ws = snippet("WebSockets", "Real-time updates", "javascript");

        let filter = SnippetFilter::new().with_keyword("auth");
        assert!(filter.matches(&auth));
        assert!(!filter.matches(&ws));

        let filter = SnippetFilter::new().with_keyword("REAL-TIME");
        assert!(filter.matches(&ws));
    }

    #[test]
    fn test_language_is_exact() {
        let ws = snippet("WebSockets", "Real-time updates", "javascript");

        assert!(SnippetFilter::new().with_language("javascript").matches(&ws));
        assert!(!SnippetFilter::new().with_language("java").matches(&ws));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let ws = snippet("WebSockets", "Real-time updates", "javascript");
        assert!(SnippetFilter::new().matches(&ws));
        assert!(SnippetFilter::new().with_keyword("").matches(&ws));
    }

    #[test]
    fn test_apply_preserves_order() {
        let snippets = vec![
            snippet("B example", "", "rust"),
            snippet("A example", "", "rust"),
        ];
        let filtered = SnippetFilter::new().with_language("rust").apply(&snippets);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "B example");
    }

    #[test]
    fn test_distinct_languages_sorted() {
        let snippets = vec![
            snippet("a", "", "typescript"),
            snippet("b", "", "bash"),
            snippet("c", "", "typescript"),
        ];
        assert_eq!(languages(&snippets), vec!["bash", "typescript"]);
    }
}
