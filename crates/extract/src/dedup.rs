// ABOUTME: Title-keyed dedup across extraction passes and sources.
// ABOUTME: First-seen record per normalized lowercased title wins; later duplicates drop.

//! Dedup/aggregation across extraction passes.
//!
//! Different passes rediscover the same article, and a multi-source run sees
//! the same story syndicated under one title. The aggregator keys every
//! record by its normalized, lowercased title and keeps the first one seen.
//! The seen-key set is owned by the orchestrating caller for the duration of
//! one run; per-source parallel extraction needs one set per source plus a
//! final merge through a shared set.
//!
//! Known limitation: unrelated articles sharing a title collide and only the
//! first survives.

use std::collections::HashSet;

use crate::records::ExtractedArticle;
use crate::text::clean_text;

/// The cross-pass, cross-source seen-title set.
#[derive(Debug, Clone, Default)]
pub struct SeenTitles {
    seen: HashSet<String>,
}

impl SeenTitles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a title, returning true exactly once per distinct key.
    ///
    /// The key is the normalized, lowercased title; an empty title is never
    /// admitted.
    pub fn admit(&mut self, title: &str) -> bool {
        let key = clean_text(title).to_lowercase();
        if key.is_empty() {
            return false;
        }
        self.seen.insert(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Merges batches of articles from multiple passes or sources into a unique
/// list, dropping any article whose title key was already seen.
pub fn merge_articles<I>(seen: &mut SeenTitles, batches: I) -> Vec<ExtractedArticle>
where
    I: IntoIterator<Item = Vec<ExtractedArticle>>,
{
    let mut merged = Vec::new();
    for batch in batches {
        for article in batch {
            if seen.admit(&article.title) {
                merged.push(article);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, source: &str) -> ExtractedArticle {
        ExtractedArticle {
            title: title.to_string(),
            source: source.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_same_title_from_two_passes_yields_one_record() {
        let mut seen = SeenTitles::new();
        let merged = merge_articles(
            &mut seen,
            vec![
                vec![article("Sensex climbs 500 points on bank rally", "a")],
                vec![article("Sensex climbs 500 points on bank rally", "b")],
            ],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].source, "a");
    }

    #[test]
    fn test_title_key_is_case_and_whitespace_insensitive() {
        let mut seen = SeenTitles::new();
        assert!(seen.admit("Sensex  Climbs 500 Points"));
        assert!(!seen.admit("sensex climbs 500 points"));
        assert!(!seen.admit("  SENSEX CLIMBS 500 POINTS  "));
    }

    #[test]
    fn test_empty_title_never_admitted() {
        let mut seen = SeenTitles::new();
        assert!(!seen.admit(""));
        assert!(!seen.admit("   "));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_set_persists_across_merges() {
        let mut seen = SeenTitles::new();
        let first = merge_articles(&mut seen, vec![vec![article("RBI holds rates steady", "a")]]);
        let second = merge_articles(&mut seen, vec![vec![article("RBI holds rates steady", "b")]]);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }
}
