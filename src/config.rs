//! Scan configuration for snipscan

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name for per-directory configuration
pub const CONFIG_FILE: &str = "snipscan.toml";

/// Configuration for scanning a directory of content drafts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Patterns for draft files (glob patterns)
    #[serde(default = "default_draft_patterns")]
    pub draft_patterns: Vec<String>,

    /// Patterns to ignore (glob patterns)
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
}

fn default_draft_patterns() -> Vec<String> {
    vec![
        "*.md".to_string(),
        "*.mdx".to_string(),
        "drafts/**/*".to_string(),
        "README*".to_string(),
    ]
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        "target/**".to_string(),
        "node_modules/**".to_string(),
        ".git/**".to_string(),
    ]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            draft_patterns: default_draft_patterns(),
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a directory or return defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: ScanConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Check if a path should be ignored
    pub fn should_ignore(&self, path: &str) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| glob_match_simple(pattern, path))
    }

    /// Check if a path counts as a content draft
    pub fn is_draft_file(&self, path: &str) -> bool {
        self.draft_patterns
            .iter()
            .any(|pattern| glob_match_simple(pattern, path))
    }
}

/// Simple glob matching helper
fn glob_match_simple(pattern: &str, path: &str) -> bool {
    if pattern.contains("**") {
        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');
            // The suffix may itself be a single-star pattern (`**/*.md`)
            return (prefix.is_empty() || path.starts_with(prefix))
                && (suffix.is_empty() || glob_match_simple(suffix, path));
        }
    }

    if pattern.contains('*') {
        let parts: Vec<&str> = pattern.split('*').collect();
        if parts.len() == 2 {
            return path.starts_with(parts[0]) && path.ends_with(parts[1]);
        }
    }

    path == pattern || path.ends_with(&format!("/{}", pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!(config.is_draft_file("guide.md"));
        assert!(config.is_draft_file("drafts/2025/launch.md"));
        // Matched by "drafts/**/*", not by any extension pattern
        assert!(config.is_draft_file("drafts/2025/notes.txt"));
        assert!(!config.is_draft_file("notes.txt"));
        assert!(config.should_ignore("node_modules/pkg/readme.md"));
    }

    #[test]
    fn test_glob_matching() {
        assert!(glob_match_simple("*.md", "README.md"));
        assert!(glob_match_simple("drafts/**/*.md", "drafts/api/guide.md"));
        assert!(!glob_match_simple("*.md", "main.rs"));
    }

    #[test]
    fn test_glob_double_star_with_starred_suffix() {
        // A `*` inside the suffix is a pattern, not a literal
        assert!(glob_match_simple("drafts/**/*.md", "drafts/guide.md"));
        assert!(glob_match_simple("drafts/**/*", "drafts/2025/launch.md"));
        assert!(!glob_match_simple("drafts/**/*.md", "drafts/api/guide.rs"));
        assert!(!glob_match_simple("drafts/**/*.md", "posts/api/guide.md"));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = ScanConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: ScanConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.draft_patterns, config.draft_patterns);
    }
}
