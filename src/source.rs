//! Content sources and normalization
//!
//! Raw content items arrive with aliased, optional fields (`summary` vs
//! `excerpt`, `created_at` vs `inserted_at`, numeric or string ids, a body
//! that may not even be text). Everything irregular is resolved here, before
//! a [`Document`] is built, so the scanner's contract stays fixed and total.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::model::Document;

/// Errors from loading or normalizing content
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("content item {id} has a non-text body")]
    NonTextBody { id: String },

    #[error("content item is missing required field `{field}`")]
    MissingField { field: &'static str },
}

/// A content item as delivered by a content source, field aliases and all.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContentItem {
    /// Source-assigned id; some sources send numbers, some strings
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Alias some sources use instead of `summary`
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Markdown body; anything other than a JSON string is a contract
    /// violation
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Alias some sources use instead of `created_at`
    #[serde(default)]
    pub inserted_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RawContentItem {
    /// Resolve aliases and validate the body, producing a scanner-ready
    /// [`Document`].
    pub fn normalize(&self) -> Result<Document, SourceError> {
        let id = match &self.id {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return Err(SourceError::MissingField { field: "id" }),
        };

        let body = match &self.content {
            Value::String(s) => s.clone(),
            _ => return Err(SourceError::NonTextBody { id }),
        };

        let created_at = self
            .created_at
            .as_deref()
            .or(self.inserted_at.as_deref())
            .and_then(parse_timestamp);
        let updated_at = self.updated_at.as_deref().and_then(parse_timestamp);

        Ok(Document {
            id,
            title: self.title.clone().unwrap_or_default(),
            summary: self
                .summary
                .clone()
                .or_else(|| self.excerpt.clone())
                .unwrap_or_default(),
            body,
            created_at,
            updated_at,
        })
    }
}

/// Parse a source timestamp: RFC 3339 first, then the bare
/// `YYYY-MM-DDTHH:MM:SS` shape some sources emit (assumed UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Load a JSON array of raw content items from a file.
pub fn load_batch(path: &Path) -> Result<Vec<RawContentItem>, SourceError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SourceError::Json {
        path: display,
        source,
    })
}

/// Build a document straight from a markdown file: the path becomes the id,
/// the file stem the title. There is no draft-level summary, so snippet
/// summaries fall through to empty when a section has no prose.
pub fn document_from_file(path: &Path) -> Result<Document, SourceError> {
    let body = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Document {
        id: path.display().to_string(),
        title,
        summary: String::new(),
        body,
        created_at: None,
        updated_at: None,
    })
}

/// Collect documents from a markdown file or a directory of drafts, honoring
/// the configured draft and ignore patterns for directories.
pub fn collect_documents(path: &Path, config: &ScanConfig) -> Result<Vec<Document>, SourceError> {
    if !path.is_dir() {
        return Ok(vec![document_from_file(path)?]);
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(path)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();
        if config.should_ignore(&relative) || !config.is_draft_file(&relative) {
            continue;
        }
        debug!(file = %relative, "collecting draft");
        documents.push(document_from_file(entry.path())?);
    }

    Ok(documents)
}
