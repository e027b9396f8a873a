//! Lexical retrieval over the knowledge base.
//!
//! # Scoring
//!
//! Every entry is scored independently and the parts are summed:
//!
//! | Signal | Weight |
//! |--------|--------|
//! | query token exactly in the entry token set | +2.0 each |
//! | otherwise, query token longer than 4 chars inside an entry token | +1.0 each |
//! | entry tag listed in the caller's tag filter | +1.5 each |
//! | an entry region (or the summary) contains the region hint | +1.25 once |
//! | entry languages intersect the preferred languages | +0.85 once |
//!
//! Filters only boost text matches. A query with no usable tokens returns
//! nothing, whatever the filters say.
//!
//! Results with a zero score are dropped, the rest are stable-sorted by score
//! (descending, ties in knowledge-base order) and truncated to the limit.

use serde::Serialize;
use std::collections::HashSet;

use crate::knowledge::KnowledgeBase;
use crate::models::{KnowledgeEntry, Language, ScoredEntry};
use crate::text::tokenize;

/// Results returned when the caller does not set a limit.
pub const DEFAULT_LIMIT: usize = 3;

const EXACT_WEIGHT: f64 = 2.0;
const PARTIAL_WEIGHT: f64 = 1.0;
const PARTIAL_MIN_CHARS: usize = 5;
const TAG_WEIGHT: f64 = 1.5;
const REGION_BOOST: f64 = 1.25;
const LANGUAGE_BOOST: f64 = 0.85;

/// Optional filters and tuning for a single [`retrieve`] call.
#[derive(Debug, Clone, Default)]
pub struct RetrieveOptions {
    /// Maximum results; [`DEFAULT_LIMIT`] when `None`.
    pub limit: Option<usize>,
    /// Locality used as a boost, never as a hard filter.
    pub region_hint: Option<String>,
    pub preferred_languages: Vec<Language>,
    /// Tags that earn a boost when present on an entry. Case-insensitive.
    pub tags: Vec<String>,
    /// If true, populate [`ScoreBreakdown`] on each result.
    pub explain: bool,
}

/// How an entry's score was assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub exact_matches: usize,
    pub partial_matches: usize,
    pub tag_matches: usize,
    pub region_boost: bool,
    pub language_boost: bool,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        let mut score = EXACT_WEIGHT * self.exact_matches as f64
            + PARTIAL_WEIGHT * self.partial_matches as f64
            + TAG_WEIGHT * self.tag_matches as f64;
        if self.region_boost {
            score += REGION_BOOST;
        }
        if self.language_boost {
            score += LANGUAGE_BOOST;
        }
        score
    }
}

/// Caller filters, normalized once per query.
struct Filters {
    tags: HashSet<String>,
    region: Option<String>,
    languages: HashSet<Language>,
}

impl Filters {
    fn new(opts: &RetrieveOptions) -> Self {
        Self {
            tags: opts.tags.iter().map(|t| t.trim().to_lowercase()).collect(),
            region: opts
                .region_hint
                .as_deref()
                .map(|r| r.trim().to_lowercase())
                .filter(|r| !r.is_empty()),
            languages: opts.preferred_languages.iter().copied().collect(),
        }
    }
}

/// Rank knowledge-base entries against `query`.
///
/// Pure and total: empty queries, empty filters, and an empty knowledge base
/// all produce an empty result rather than an error.
pub fn retrieve<'a>(
    kb: &'a KnowledgeBase,
    query: &str,
    opts: &RetrieveOptions,
) -> Vec<ScoredEntry<'a>> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let filters = Filters::new(opts);

    let mut results: Vec<ScoredEntry<'a>> = kb
        .indexed()
        .filter_map(|(entry, token_set)| {
            let breakdown = score_entry(entry, token_set, &query_tokens, &filters);
            let score = breakdown.total();
            if score <= 0.0 {
                return None;
            }
            Some(ScoredEntry {
                entry,
                score,
                explain: opts.explain.then_some(breakdown),
            })
        })
        .collect();

    // sort_by is stable: equal scores keep knowledge-base order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results.truncate(opts.limit.unwrap_or(DEFAULT_LIMIT));
    results
}

fn score_entry(
    entry: &KnowledgeEntry,
    token_set: &HashSet<String>,
    query_tokens: &[String],
    filters: &Filters,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for token in query_tokens {
        if token_set.contains(token) {
            breakdown.exact_matches += 1;
        } else if token.chars().count() >= PARTIAL_MIN_CHARS
            && token_set.iter().any(|t| t.contains(token.as_str()))
        {
            breakdown.partial_matches += 1;
        }
    }

    if !filters.tags.is_empty() {
        breakdown.tag_matches = entry
            .tags
            .iter()
            .filter(|t| filters.tags.contains(&t.to_lowercase()))
            .count();
    }

    if let Some(region) = &filters.region {
        breakdown.region_boost = entry
            .regions
            .iter()
            .any(|r| r.to_lowercase().contains(region.as_str()))
            || entry.summary.to_lowercase().contains(region.as_str());
    }

    breakdown.language_boost = entry
        .languages
        .iter()
        .any(|l| filters.languages.contains(l));

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(id: &str, title: &str, summary: &str, tags: &[&str]) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            details: String::new(),
            source: "Test Authority".to_string(),
            url: None,
            updated: "2024-01-01".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            regions: Vec::new(),
            languages: vec![Language::En],
        }
    }

    fn kb(entries: Vec<KnowledgeEntry>) -> KnowledgeBase {
        KnowledgeBase::from_entries(entries).unwrap()
    }

    fn ids<'a>(results: &[ScoredEntry<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.entry.id.as_str()).collect()
    }

    fn score_of(kb: &KnowledgeBase, query: &str, opts: &RetrieveOptions) -> f64 {
        retrieve(kb, query, opts).first().map(|r| r.score).unwrap_or(0.0)
    }

    #[test]
    fn exact_token_scores_two() {
        let kb = kb(vec![entry("a", "Drip irrigation", "", &[])]);
        assert_eq!(score_of(&kb, "drip", &RetrieveOptions::default()), 2.0);
    }

    #[test]
    fn partial_match_needs_more_than_four_chars() {
        let kb = kb(vec![entry("a", "Irrigation subsidy", "", &[])]);
        let opts = RetrieveOptions::default();
        // "irrig" (5 chars) is inside "irrigation"
        assert_eq!(score_of(&kb, "irrig", &opts), 1.0);
        // "irri" (4 chars) is too short for a partial hit
        assert!(retrieve(&kb, "irri", &opts).is_empty());
    }

    #[test]
    fn exact_match_takes_priority_over_partial() {
        let kb = kb(vec![entry("a", "water watering", "", &[])]);
        // "water" is exact; it must not also add a partial point for "watering"
        assert_eq!(score_of(&kb, "water", &RetrieveOptions::default()), 2.0);
    }

    #[test]
    fn duplicate_query_tokens_each_count() {
        let kb = kb(vec![entry("a", "soil", "", &[])]);
        assert_eq!(score_of(&kb, "soil soil", &RetrieveOptions::default()), 4.0);
    }

    #[test]
    fn tag_is_matched_as_whole_string() {
        let kb = kb(vec![entry("a", "Insurance", "", &["crop-loss"])]);
        let opts = RetrieveOptions::default();
        // the query sanitizer splits "crop-loss", so only the tag string could match
        assert!(retrieve(&kb, "crop", &opts).is_empty());
        // "croploss" (8 chars) is not a substring of "crop-loss"
        assert!(retrieve(&kb, "croploss", &opts).is_empty());
    }

    #[test]
    fn tag_filter_boost_is_case_insensitive() {
        let kb = kb(vec![entry("a", "Solar pump", "", &["solar", "pump", "energy"])]);
        let opts = RetrieveOptions {
            tags: vec!["SOLAR".to_string(), "Energy".to_string(), "drip".to_string()],
            ..Default::default()
        };
        // "pump" exact (2.0) + two tag hits (3.0)
        assert_eq!(score_of(&kb, "pump", &opts), 5.0);
    }

    #[test]
    fn region_boost_from_regions_or_summary() {
        let mut with_region = entry("a", "Farm ponds", "", &[]);
        with_region.regions = vec!["Marathwada".to_string()];
        let in_summary = entry("b", "Farm ponds", "Support for Vidarbha villages", &[]);
        let kb = kb(vec![with_region, in_summary]);

        let opts = RetrieveOptions {
            region_hint: Some("marath".to_string()),
            ..Default::default()
        };
        let results = retrieve(&kb, "ponds", &opts);
        assert_eq!(results[0].score, 3.25);
        assert_eq!(results[1].score, 2.0);

        let opts = RetrieveOptions {
            region_hint: Some("VIDARBHA".to_string()),
            ..Default::default()
        };
        let results = retrieve(&kb, "ponds", &opts);
        assert_eq!(ids(&results), vec!["b", "a"]);
        assert_eq!(results[0].score, 3.25);
    }

    #[test]
    fn blank_region_hint_is_ignored() {
        let kb = kb(vec![entry("a", "ponds", "", &[])]);
        let opts = RetrieveOptions {
            region_hint: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(score_of(&kb, "ponds", &opts), 2.0);
    }

    #[test]
    fn language_boost_applies_once() {
        let mut e = entry("a", "loan waiver", "", &[]);
        e.languages = vec![Language::Mr, Language::En];
        let kb = kb(vec![e]);
        let opts = RetrieveOptions {
            preferred_languages: vec![Language::Mr, Language::En],
            ..Default::default()
        };
        assert!((score_of(&kb, "loan", &opts) - 2.85).abs() < 1e-9);
    }

    #[test]
    fn filters_alone_never_match() {
        let kb = kb(vec![entry("a", "solar", "Maharashtra", &["solar"])]);
        let opts = RetrieveOptions {
            tags: vec!["solar".to_string()],
            region_hint: Some("maharashtra".to_string()),
            preferred_languages: vec![Language::En],
            ..Default::default()
        };
        assert!(retrieve(&kb, "", &opts).is_empty());
        assert!(retrieve(&kb, "? ! a", &opts).is_empty());
    }

    #[test]
    fn filters_boost_entries_without_text_match() {
        // a non-empty query enables scoring; boosts alone can then surface an entry
        let kb = kb(vec![entry("a", "solar", "", &["solar"])]);
        let opts = RetrieveOptions {
            tags: vec!["solar".to_string()],
            ..Default::default()
        };
        let results = retrieve(&kb, "groundnut", &opts);
        assert_eq!(ids(&results), vec!["a"]);
        assert_eq!(results[0].score, 1.5);
    }

    #[test]
    fn ties_keep_knowledge_base_order() {
        let kb = kb(vec![
            entry("first", "urea", "", &[]),
            entry("second", "urea", "", &[]),
            entry("third", "urea", "", &[]),
        ]);
        let opts = RetrieveOptions {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(ids(&retrieve(&kb, "urea", &opts)), vec!["first", "second", "third"]);
    }

    #[test]
    fn sorted_descending_and_positive() {
        let kb = KnowledgeBase::builtin();
        let opts = RetrieveOptions {
            limit: Some(20),
            ..Default::default()
        };
        let results = retrieve(kb, "crop loan interest fertilizer soil maharashtra", &opts);
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(results.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn zero_scores_removed_before_truncation() {
        let kb = kb(vec![
            entry("miss1", "tractor", "", &[]),
            entry("hit", "urea", "", &[]),
            entry("miss2", "tractor", "", &[]),
        ]);
        let results = retrieve(&kb, "urea", &RetrieveOptions::default());
        assert_eq!(ids(&results), vec!["hit"]);
    }

    #[test]
    fn limit_defaults_to_three_and_zero_yields_nothing() {
        let kb = kb((0..5).map(|i| entry(&format!("e{}", i), "urea", "", &[])).collect());
        assert_eq!(retrieve(&kb, "urea", &RetrieveOptions::default()).len(), DEFAULT_LIMIT);
        let opts = RetrieveOptions {
            limit: Some(0),
            ..Default::default()
        };
        assert!(retrieve(&kb, "urea", &opts).is_empty());
    }

    #[test]
    fn pmfby_query_finds_crop_insurance() {
        let opts = RetrieveOptions {
            limit: Some(1),
            ..Default::default()
        };
        let results = retrieve(KnowledgeBase::builtin(), "PMFBY", &opts);
        assert_eq!(ids(&results), vec!["crop-insurance-pmfby"]);
    }

    #[test]
    fn drip_query_ranks_micro_irrigation_first() {
        let results = retrieve(
            KnowledgeBase::builtin(),
            "drip irrigation subsidy",
            &RetrieveOptions::default(),
        );
        assert_eq!(results[0].entry.id, "pmksy-micro-irrigation");
        assert_eq!(results[0].score, 6.0);
    }

    #[test]
    fn devanagari_query_matches_devanagari_details() {
        let results = retrieve(
            KnowledgeBase::builtin(),
            "कर्जमुक्ती",
            &RetrieveOptions::default(),
        );
        assert_eq!(results[0].entry.id, "maharashtra-crop-loan-waiver");
    }

    #[test]
    fn explain_breakdown_matches_score() {
        let mut e = entry("a", "drip irrigation", "", &["drip"]);
        e.regions = vec!["Maharashtra".to_string()];
        let kb = kb(vec![e]);
        let opts = RetrieveOptions {
            tags: vec!["drip".to_string()],
            region_hint: Some("Maharashtra".to_string()),
            preferred_languages: vec![Language::En],
            explain: true,
            ..Default::default()
        };
        let results = retrieve(&kb, "drip irrigat", &opts);
        let breakdown = results[0].explain.clone().unwrap();
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                exact_matches: 1,
                partial_matches: 1,
                tag_matches: 1,
                region_boost: true,
                language_boost: true,
            }
        );
        assert_eq!(results[0].score, breakdown.total());
        assert!((results[0].score - 6.6).abs() < 1e-9);
    }

    #[test]
    fn explain_off_by_default() {
        let results = retrieve(KnowledgeBase::builtin(), "urea", &RetrieveOptions::default());
        assert!(results.iter().all(|r| r.explain.is_none()));
    }

    #[test]
    fn scoring_is_repeatable() {
        let opts = RetrieveOptions {
            region_hint: Some("Vidarbha".to_string()),
            preferred_languages: vec![Language::Mr],
            tags: vec!["drought".to_string()],
            limit: Some(10),
            explain: false,
        };
        let kb = KnowledgeBase::builtin();
        let first: Vec<(String, f64)> = retrieve(kb, "drought farm ponds", &opts)
            .iter()
            .map(|r| (r.entry.id.clone(), r.score))
            .collect();
        let second: Vec<(String, f64)> = retrieve(kb, "drought farm ponds", &opts)
            .iter()
            .map(|r| (r.entry.id.clone(), r.score))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_knowledge_base_yields_nothing() {
        let kb = KnowledgeBase::empty();
        assert!(retrieve(&kb, "soil", &RetrieveOptions::default()).is_empty());
    }
}
