//! `sathi search` and `sathi context` output.

use anyhow::Result;

use soilsathi_core::{retrieve, retrieve_knowledge_context, KnowledgeBase, RetrieveOptions};

pub fn run_search(kb: &KnowledgeBase, query: &str, opts: &RetrieveOptions, json: bool) -> Result<()> {
    let results = retrieve(kb, query, opts);
    tracing::debug!(query, hits = results.len(), "search");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        let e = result.entry;
        println!("{}. [{:.2}] {}", i + 1, result.score, e.title);
        println!("    id: {}", e.id);
        println!("    authority: {}", e.source);
        println!("    updated: {}", e.updated);
        if let Some(ref url) = e.url {
            println!("    url: {}", url);
        }
        println!("    summary: \"{}\"", e.summary.trim());
        if let Some(ref b) = result.explain {
            println!(
                "    explain: exact={} partial={} tags={} region={} language={}",
                b.exact_matches, b.partial_matches, b.tag_matches, b.region_boost, b.language_boost
            );
        }
        println!();
    }

    Ok(())
}

pub fn run_context(
    kb: &KnowledgeBase,
    query: &str,
    opts: &RetrieveOptions,
    json: bool,
) -> Result<()> {
    let knowledge = retrieve_knowledge_context(kb, query, opts);
    tracing::debug!(
        query,
        language = %knowledge.language,
        hits = knowledge.entries.len(),
        "context"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&knowledge)?);
    } else {
        println!("{}", knowledge.context);
    }

    Ok(())
}
