//! Prompt-context formatting for retrieval-augmented generation.
//!
//! The output is spliced verbatim into prompts, so the layout is fixed:
//!
//! ```text
//! Source #1: {title}
//! Authority: {source}
//! Updated: {updated}
//! Summary: {summary}
//! Details:
//! {details}
//! Reference URL: {url or "Not available"}
//! ```
//!
//! Blocks are separated by one blank line.

use serde::Serialize;

use crate::knowledge::KnowledgeBase;
use crate::language::detect_language;
use crate::models::{Language, ScoredEntry};
use crate::search::{retrieve, RetrieveOptions};

/// Context text used when retrieval found nothing.
pub const NO_MATCH_CONTEXT: &str =
    "No matching government or agricultural references found in the local knowledge base.";

const MISSING_URL: &str = "Not available";

/// Render ranked entries as a prompt-context block.
pub fn build_context_text(entries: &[ScoredEntry<'_>]) -> String {
    if entries.is_empty() {
        return NO_MATCH_CONTEXT.to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, scored)| {
            let e = scored.entry;
            format!(
                "Source #{}: {}\nAuthority: {}\nUpdated: {}\nSummary: {}\nDetails:\n{}\nReference URL: {}",
                i + 1,
                e.title,
                e.source,
                e.updated,
                e.summary,
                e.details,
                e.url.as_deref().unwrap_or(MISSING_URL),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Everything a prompt builder needs for one farmer query.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeContext<'a> {
    /// Detected language of the query.
    pub language: Language,
    pub entries: Vec<ScoredEntry<'a>>,
    pub context: String,
}

/// Detect the query language, retrieve, and format in one step.
///
/// When `opts.preferred_languages` is empty the detected language is used as
/// the preference, so a Marathi question favours entries written for Marathi
/// readers.
pub fn retrieve_knowledge_context<'a>(
    kb: &'a KnowledgeBase,
    query: &str,
    opts: &RetrieveOptions,
) -> KnowledgeContext<'a> {
    let language = detect_language(query);

    let entries = if opts.preferred_languages.is_empty() {
        let opts = RetrieveOptions {
            preferred_languages: vec![language],
            ..opts.clone()
        };
        retrieve(kb, query, &opts)
    } else {
        retrieve(kb, query, opts)
    };

    let context = build_context_text(&entries);

    KnowledgeContext {
        language,
        entries,
        context,
    }
}
