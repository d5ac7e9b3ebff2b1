//! Language resolution and text normalization.

use aura_core::Language;
use regex::Regex;

/// Bengali Unicode block.
const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Whether any character of `text` falls in the Bengali block.
pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(|c| BENGALI_BLOCK.contains(&c))
}

/// Resolve the language of a message.
///
/// An explicit hint always wins. Otherwise any Bengali character selects
/// Bengali; everything else, including empty input, is English.
pub fn resolve_language(text: &str, hint: Option<Language>) -> Language {
    if let Some(language) = hint {
        return language;
    }
    if contains_bengali(text) {
        Language::Bn
    } else {
        Language::En
    }
}

/// Decompose the precomposed nukta letters (ড়, ঢ়, য়) so that both
/// keyboard encodings of the same word compare equal.
pub fn fold_nukta(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{09DC}' => out.push_str("\u{09A1}\u{09BC}"),
            '\u{09DD}' => out.push_str("\u{09A2}\u{09BC}"),
            '\u{09DF}' => out.push_str("\u{09AF}\u{09BC}"),
            other => out.push(other),
        }
    }
    out
}

/// Trim the message and lower-case it unless it is Bengali.
pub fn normalize(text: &str, language: Language) -> String {
    let trimmed = fold_nukta(text.trim());
    match language {
        Language::En => trimmed.to_lowercase(),
        Language::Bn => trimmed,
    }
}

/// Compile a trigger phrase into a matcher.
///
/// Latin phrases match case-insensitively on word boundaries. Bengali
/// phrases match as plain substrings so inflected forms (দামটা, অর্ডারটা)
/// still hit.
pub fn phrase_regex(phrase: &str) -> Regex {
    let folded = fold_nukta(phrase);
    let escaped = regex::escape(&folded);
    let pattern = if contains_bengali(&folded) {
        escaped
    } else {
        format!(r"(?i)\b{}\b", escaped)
    };
    Regex::new(&pattern).expect("Invalid phrase regex")
}
