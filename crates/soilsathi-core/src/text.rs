//! Text normalization shared by queries and knowledge-base entries.
//!
//! Sanitizing keeps ASCII letters and digits, whitespace, and the Devanagari
//! block (U+0900–U+097F). Everything else becomes a separator, so
//! `"PM-KISAN"` tokenizes as `["pm", "kisan"]`.

/// Returns true for characters in the Devanagari Unicode block.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || is_devanagari(c)
}

/// Lowercase, strip unsupported characters, and collapse whitespace.
pub fn sanitize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize and split into tokens longer than one character.
///
/// Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    sanitize(text)
        .split(' ')
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_lowercases_and_collapses() {
        assert_eq!(sanitize("  Soil   Health\tCard \n"), "soil health card");
    }

    #[test]
    fn sanitize_replaces_punctuation_with_separator() {
        assert_eq!(sanitize("PM-KISAN: ₹6,000/year!"), "pm kisan 6 000 year");
    }

    #[test]
    fn sanitize_keeps_devanagari_including_matras() {
        assert_eq!(sanitize("शेतकरी, योजना."), "शेतकरी योजना");
        // the danda sits inside the Devanagari block and survives
        assert_eq!(sanitize("माती।"), "माती।");
    }

    #[test]
    fn sanitize_drops_non_ascii_latin() {
        assert_eq!(sanitize("café"), "caf");
    }

    #[test]
    fn tokenize_drops_single_character_tokens() {
        assert_eq!(tokenize("a soil b health c"), vec!["soil", "health"]);
    }

    #[test]
    fn tokenize_counts_characters_not_bytes() {
        // "खत" is two characters but six bytes
        assert_eq!(tokenize("खत क"), vec!["खत"]);
    }

    #[test]
    fn tokenize_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ??? ---").is_empty());
    }

    #[test]
    fn tokenize_keeps_duplicates() {
        assert_eq!(tokenize("soil soil"), vec!["soil", "soil"]);
    }
}
