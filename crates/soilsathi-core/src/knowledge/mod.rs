//! The knowledge base: an ordered, immutable list of scheme and advisory
//! entries.
//!
//! Declaration order is significant. It is the tie-break order for entries
//! with equal retrieval scores, so the list is never re-sorted or deduplicated
//! in place.
//!
//! Each entry's token set (title, summary and details tokens plus lowercase
//! tags taken as whole strings) is computed once at construction and reused
//! by every [`retrieve`](crate::search::retrieve) call.

mod seed;

use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::KnowledgeError;
use crate::models::KnowledgeEntry;
use crate::text::tokenize;

/// Validated, read-only knowledge base.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    token_sets: Vec<HashSet<String>>,
}

impl KnowledgeBase {
    /// The compiled-in scheme catalogue, built on first use.
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::build(seed::entries()))
    }

    /// An empty knowledge base. Every query against it yields no results.
    pub fn empty() -> Self {
        Self::build(Vec::new())
    }

    /// Validate and index `entries`, preserving their order.
    ///
    /// Tags are lowercased. Fails on an empty or duplicate `id`, or an
    /// `updated` value that is not a `YYYY-MM-DD` date.
    pub fn from_entries(mut entries: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(KnowledgeError::EmptyId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(KnowledgeError::DuplicateId(entry.id.clone()));
            }
            if NaiveDate::parse_from_str(&entry.updated, "%Y-%m-%d").is_err() {
                return Err(KnowledgeError::InvalidDate {
                    id: entry.id.clone(),
                    value: entry.updated.clone(),
                });
            }
        }

        for entry in &mut entries {
            for tag in &mut entry.tags {
                *tag = tag.to_lowercase();
            }
        }

        Ok(Self::build(entries))
    }

    fn build(entries: Vec<KnowledgeEntry>) -> Self {
        let token_sets = entries.iter().map(entry_token_set).collect();
        Self {
            entries,
            token_sets,
        }
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their precomputed token sets.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = (&KnowledgeEntry, &HashSet<String>)> {
        self.entries.iter().zip(self.token_sets.iter())
    }
}

fn entry_token_set(entry: &KnowledgeEntry) -> HashSet<String> {
    let mut set: HashSet<String> = HashSet::new();
    set.extend(tokenize(&entry.title));
    set.extend(tokenize(&entry.summary));
    set.extend(tokenize(&entry.details));
    set.extend(entry.tags.iter().map(|t| t.to_lowercase()));
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    fn entry(id: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            title: "Drip Irrigation".to_string(),
            summary: "Subsidy for drip systems".to_string(),
            details: "Apply online".to_string(),
            source: "State Agriculture Department".to_string(),
            url: None,
            updated: "2024-06-01".to_string(),
            tags: vec!["Micro-Irrigation".to_string()],
            regions: vec![],
            languages: vec![Language::En],
        }
    }

    #[test]
    fn builtin_ids_are_unique_and_valid() {
        let builtin = KnowledgeBase::builtin();
        let rebuilt = KnowledgeBase::from_entries(builtin.entries().to_vec());
        assert!(rebuilt.is_ok(), "builtin catalogue invalid: {:?}", rebuilt.err());
        assert!(builtin.len() >= 8);
    }

    #[test]
    fn builtin_tags_are_lowercase() {
        for e in KnowledgeBase::builtin().entries() {
            for tag in &e.tags {
                assert_eq!(tag, &tag.to_lowercase(), "entry {}", e.id);
            }
        }
    }

    #[test]
    fn builtin_contains_pmfby() {
        let e = KnowledgeBase::builtin().get("crop-insurance-pmfby").unwrap();
        assert!(e.tags.iter().any(|t| t == "pmfby"));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = KnowledgeBase::from_entries(vec![entry("a"), entry("b"), entry("a")]).unwrap_err();
        assert_eq!(err, KnowledgeError::DuplicateId("a".to_string()));
    }

    #[test]
    fn empty_id_rejected() {
        let err = KnowledgeBase::from_entries(vec![entry("  ")]).unwrap_err();
        assert_eq!(err, KnowledgeError::EmptyId);
    }

    #[test]
    fn bad_date_rejected() {
        let mut e = entry("a");
        e.updated = "June 2024".to_string();
        let err = KnowledgeBase::from_entries(vec![e]).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidDate { .. }));
    }

    #[test]
    fn order_is_preserved_and_tags_lowercased() {
        let kb = KnowledgeBase::from_entries(vec![entry("z"), entry("a"), entry("m")]).unwrap();
        let ids: Vec<&str> = kb.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert_eq!(kb.entries()[0].tags, vec!["micro-irrigation".to_string()]);
    }

    #[test]
    fn token_set_includes_whole_tags() {
        let kb = KnowledgeBase::from_entries(vec![entry("a")]).unwrap();
        let (_, set) = kb.indexed().next().unwrap();
        assert!(set.contains("drip"));
        assert!(set.contains("subsidy"));
        assert!(set.contains("micro-irrigation"));
        // tags are not re-tokenized
        assert!(!set.contains("micro"));
    }

    #[test]
    fn empty_knowledge_base() {
        let kb = KnowledgeBase::empty();
        assert!(kb.is_empty());
        assert!(kb.get("anything").is_none());
    }
}
