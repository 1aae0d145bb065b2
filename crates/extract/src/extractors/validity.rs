// ABOUTME: Boolean accept/reject classifier for candidate articles.
// ABOUTME: Rejects navigation chrome, promos, section headers, and bare-name titles.

//! Validity classification.
//!
//! Given a candidate title with optional summary and link, decide whether it
//! is a genuine article. The rejections run as a chain of negative checks;
//! a candidate that survives all of them is accepted.
//!
//! Key behaviors:
//! - Titles normalize before any check; length gates count chars.
//! - Whole-title sets (navigation, trivial, section-header titles) compare
//!   the lowercased title exactly.
//! - Phrase sets (noise keywords, generic summaries, section indicators)
//!   match as substrings anywhere in the lowercased text.
//! - The bare-name heuristic intentionally rejects short capitalized titles
//!   with no digits and no headline punctuation, even though that loses a
//!   few legitimate two-word headlines.

use crate::phrases::{
    GENERIC_SUMMARY_MATCHER, NAVIGATION_TITLES, NOISE_MATCHER, SECTION_HEADER_TITLES,
    SECTION_INDICATOR_MATCHER, SHORT_FILLER_MATCHER, TRIVIAL_TITLES,
};
use crate::text::clean_text;

/// Returns true when the candidate looks like a real article.
pub fn is_valid_article(title: &str, summary: Option<&str>, link: Option<&str>) -> bool {
    let title = clean_text(title);
    if title.chars().count() < 15 {
        return false;
    }

    let title_lower = title.to_lowercase();
    let summary = summary.map(clean_text).unwrap_or_default();
    let summary_lower = summary.to_lowercase();

    if NAVIGATION_TITLES.contains(&title_lower.as_str()) {
        return false;
    }

    if NOISE_MATCHER.is_match(&title_lower) || NOISE_MATCHER.is_match(&summary_lower) {
        return false;
    }

    if TRIVIAL_TITLES.contains(&title_lower.as_str()) {
        return false;
    }

    if SECTION_HEADER_TITLES.contains(&title_lower.as_str()) {
        return false;
    }

    // Bare company or brand names: at most two words, no digits, and either
    // shouted or capitalized without any headline punctuation.
    let word_count = title.split_whitespace().count();
    let has_digit = title.chars().any(|c| c.is_ascii_digit());
    if word_count <= 2 && !has_digit {
        let starts_upper = title
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);
        let has_headline_punct = title.chars().any(|c| matches!(c, ':' | '-' | '?' | '!'));
        if is_all_uppercase(&title) || (starts_upper && !has_headline_punct) {
            return false;
        }
    }

    // Must have either a link or a meaningful summary.
    let has_link = link.map(|l| !l.trim().is_empty()).unwrap_or(false);
    if !has_link && summary.chars().count() < 20 {
        return false;
    }

    if !summary.is_empty() {
        if GENERIC_SUMMARY_MATCHER.is_match(&summary_lower) {
            return false;
        }
        if summary.chars().count() < 30 && SHORT_FILLER_MATCHER.is_match(&summary_lower) {
            return false;
        }
    }

    // Shouted or near-empty titles without punctuation read as navigation.
    if (is_all_uppercase(&title) || word_count <= 2)
        && !title.chars().any(|c| matches!(c, ':' | '-' | '?' | '!' | ','))
    {
        return false;
    }

    if SECTION_INDICATOR_MATCHER.is_match(&title_lower) {
        return false;
    }

    true
}

/// True when the string has at least one cased char and no lowercase chars.
fn is_all_uppercase(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
