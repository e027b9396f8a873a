//! Assembles the knowledge base the application serves.
//!
//! The compiled-in catalogue comes first (unless disabled), followed by the
//! entries of the optional `[knowledge].path` file in file order:
//!
//! ```toml
//! [[entries]]
//! id = "mahadbt-farm-mechanization"
//! title = "Farm Mechanization Subsidy"
//! summary = "..."
//! details = "..."
//! source = "Government of Maharashtra"
//! url = "https://mahadbt.maharashtra.gov.in"
//! updated = "2024-07-01"
//! tags = ["tractor", "subsidy"]
//! regions = ["Maharashtra"]
//! languages = ["mr", "en"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use soilsathi_core::{KnowledgeBase, KnowledgeEntry};

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
}

/// Read `[[entries]]` from a TOML file.
pub fn read_entries(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
    let file: KnowledgeFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse knowledge file: {}", path.display()))?;
    Ok(file.entries)
}

/// Build the knowledge base described by `config`.
pub fn load_knowledge_base(config: &Config) -> Result<KnowledgeBase> {
    let Some(path) = &config.knowledge.path else {
        let kb = KnowledgeBase::builtin().clone();
        tracing::debug!(entries = kb.len(), "using built-in knowledge base");
        return Ok(kb);
    };

    let mut entries = if config.knowledge.include_builtin {
        KnowledgeBase::builtin().entries().to_vec()
    } else {
        Vec::new()
    };
    let builtin_count = entries.len();

    let extra = read_entries(path)?;
    entries.extend(extra);

    let kb = KnowledgeBase::from_entries(entries)
        .with_context(|| format!("Invalid knowledge file: {}", path.display()))?;

    tracing::info!(
        builtin = builtin_count,
        from_file = kb.len() - builtin_count,
        path = %path.display(),
        "knowledge base loaded"
    );

    Ok(kb)
}
