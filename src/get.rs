//! `sathi get` and `sathi entries`.

use anyhow::{bail, Result};

use soilsathi_core::KnowledgeBase;

fn join_codes<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print one entry in full.
pub fn run_get(kb: &KnowledgeBase, id: &str) -> Result<()> {
    let Some(entry) = kb.get(id) else {
        bail!("entry not found: {}", id);
    };

    println!("--- Entry ---");
    println!("id:        {}", entry.id);
    println!("title:     {}", entry.title);
    println!("authority: {}", entry.source);
    println!("updated:   {}", entry.updated);
    println!("url:       {}", entry.url.as_deref().unwrap_or("(none)"));
    println!("tags:      {}", entry.tags.join(", "));
    println!("regions:   {}", entry.regions.join(", "));
    println!("languages: {}", join_codes(&entry.languages));
    println!();

    println!("--- Summary ---");
    println!("{}", entry.summary);
    println!();

    println!("--- Details ---");
    println!("{}", entry.details);

    Ok(())
}

/// List every entry in tie-break order.
pub fn run_entries(kb: &KnowledgeBase) -> Result<()> {
    if kb.is_empty() {
        println!("Knowledge base is empty.");
        return Ok(());
    }

    println!("{:<32} {:<10} {:<10} TITLE", "ID", "LANGUAGES", "UPDATED");
    for e in kb.entries() {
        println!(
            "{:<32} {:<10} {:<10} {}",
            e.id,
            join_codes(&e.languages),
            e.updated,
            e.title
        );
    }
    println!();
    println!("{} entries", kb.len());

    Ok(())
}
