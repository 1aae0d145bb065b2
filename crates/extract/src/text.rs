// ABOUTME: Text normalization helpers shared by every extractor.
// ABOUTME: Collapses whitespace, repairs known mis-encoded sequences, truncates by chars.

//! Text normalization.
//!
//! Key behaviors:
//! - Runs of whitespace (including non-breaking spaces) collapse to single spaces.
//! - Leading/trailing whitespace is trimmed.
//! - Known mis-encoded sequences are repaired before collapsing: the
//!   UTF-8-as-Latin-1 rupee sign and the curly apostrophe.
//! - `clean_text` is idempotent: cleaning twice equals cleaning once.

/// Cleans and normalizes a text fragment pulled out of a markup tree.
pub fn clean_text(text: &str) -> String {
    let fixed = text
        .replace("â‚¹", "₹")
        .replace('\u{a0}', " ")
        .replace('\u{2019}', "'");
    fixed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Title-cases a phrase: first letter of each word uppercased, the rest lowered.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
