//! Core data models for the knowledge base and retrieval results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KnowledgeError;
use crate::search::ScoreBreakdown;

/// Languages an entry is written for, and the languages the detector emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Marathi (मराठी).
    Mr,
    /// Hindi (हिन्दी).
    Hi,
    /// English.
    En,
}

impl Language {
    /// Two-letter code as used in config files and API payloads.
    pub fn code(self) -> &'static str {
        match self {
            Language::Mr => "mr",
            Language::Hi => "hi",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mr" => Ok(Language::Mr),
            "hi" => Ok(Language::Hi),
            "en" => Ok(Language::En),
            other => Err(KnowledgeError::UnknownLanguage(other.to_string())),
        }
    }
}

/// One government scheme or agricultural advisory.
///
/// Entries are immutable once loaded into a [`KnowledgeBase`](crate::KnowledgeBase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub details: String,
    /// Issuing authority or provenance.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ISO date (`YYYY-MM-DD`). Informational only.
    pub updated: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// A knowledge-base entry with its relevance score for one query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry<'a> {
    #[serde(flatten)]
    pub entry: &'a KnowledgeEntry,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreBreakdown>,
}
