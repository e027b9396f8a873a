//! Heuristic script-language detection for farmer queries.
//!
//! This is a keyword classifier, not a general language identifier. Latin
//! text is English; Devanagari text is Marathi unless it carries a Hindi-only
//! hint word. Marathi hints are checked first, so the shared word "योजना"
//! classifies as Marathi.

use crate::models::Language;
use crate::text::is_devanagari;

/// Words that mark a Devanagari query as Marathi. Checked before [`HINDI_HINTS`].
pub const MARATHI_HINTS: &[&str] = &[
    "शेत",
    "शेतकरी",
    "महाराष्ट्र",
    "कर्ज",
    "योजना",
    "उत्पादन",
    "खत",
    "पाऊस",
    "माती",
    "सल्ला",
    "अनुदान",
];

/// Words that mark a Devanagari query as Hindi.
pub const HINDI_HINTS: &[&str] = &[
    "किसान",
    "योजना",
    "ऋण",
    "उर्वरक",
    "मौसम",
    "पैदावार",
    "फसल",
    "खरीफ",
    "रबी",
    "बीमा",
];

fn has_hint(text: &str, hints: &[&str]) -> bool {
    hints.iter().any(|hint| text.contains(hint))
}

/// Classify `text` as Marathi, Hindi, or English.
pub fn detect_language(text: &str) -> Language {
    if text.is_empty() || !text.chars().any(is_devanagari) {
        return Language::En;
    }

    if has_hint(text, MARATHI_HINTS) {
        Language::Mr
    } else if has_hint(text, HINDI_HINTS) {
        Language::Hi
    } else {
        Language::Mr
    }
}
