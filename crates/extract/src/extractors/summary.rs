// ABOUTME: Summary selection for a candidate article container.
// ABOUTME: Class-based selectors gather candidates, paragraphs are the fallback, longest wins.

//! Summary selection.
//!
//! Key behaviors:
//! - Candidates come from a prioritized selector list: exact class matches
//!   for summary/excerpt/description/lead/intro first, then partial class
//!   matches for the same names. At most two elements are inspected per
//!   selector, counted before qualification.
//! - A candidate qualifies when its normalized length is over 40 and under
//!   500 chars and it contains no generic-summary phrase.
//! - When no selector yields a qualifier, the first three paragraphs are
//!   scanned in document order and the first qualifier wins outright.
//! - With selector candidates in hand, the longest qualifier wins; ties keep
//!   the earliest.
//! - Truncation to the 400-char record limit happens at assembly, not here.

use crate::dom::{self, DomNode};
use crate::phrases::GENERIC_SUMMARY_MATCHER;
use crate::text::clean_text;

const SUMMARY_CLASSES: &[&str] = &["summary", "excerpt", "description", "lead", "intro"];
const MAX_MATCHES_PER_SELECTOR: usize = 2;
const FALLBACK_PARAGRAPHS: usize = 3;

/// Picks the best descriptive passage inside `container`, or returns an
/// empty string when nothing qualifies.
pub fn select_summary<N: DomNode>(container: &N) -> String {
    let mut candidates: Vec<String> = Vec::new();

    for class in SUMMARY_CLASSES {
        collect_candidates(container, |n: &N| n.has_class(class), &mut candidates);
    }
    for class in SUMMARY_CLASSES {
        collect_candidates(container, |n: &N| n.class_contains(class), &mut candidates);
    }

    if candidates.is_empty() {
        for paragraph in dom::find_all(container, &["p"])
            .into_iter()
            .take(FALLBACK_PARAGRAPHS)
        {
            let text = clean_text(&paragraph.text_content());
            if qualifies(&text) {
                candidates.push(text);
                break;
            }
        }
    }

    let mut best = String::new();
    for candidate in candidates {
        if candidate.chars().count() > best.chars().count() {
            best = candidate;
        }
    }
    best
}

fn collect_candidates<N: DomNode, F: Fn(&N) -> bool>(
    container: &N,
    matches: F,
    out: &mut Vec<String>,
) {
    for el in dom::find_all_where(container, matches)
        .into_iter()
        .take(MAX_MATCHES_PER_SELECTOR)
    {
        let text = clean_text(&el.text_content());
        if qualifies(&text) {
            out.push(text);
        }
    }
}

fn qualifies(text: &str) -> bool {
    let len = text.chars().count();
    if len <= 40 || len >= 500 {
        return false;
    }
    !GENERIC_SUMMARY_MATCHER.is_match(&text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn container(html: &str) -> Html {
        Html::parse_document(html)
    }

    // 60 chars
    const SHORT: &str = "The index rose after upbeat earnings from two large lenders";
    // 120 chars
    const LONG: &str = "The benchmark index extended gains for a third straight session \
after upbeat earnings reports from two large lenders etc";

    #[test]
    fn test_longest_qualifying_candidate_wins() {
        let html = format!(
            r#"<article>
                <p class="summary">{SHORT}</p>
                <p class="summary">{LONG}</p>
            </article>"#
        );
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        assert_eq!(select_summary(&article), LONG);
    }

    #[test]
    fn test_candidates_gathered_across_selectors() {
        let html = format!(
            r#"<article>
                <p class="excerpt">{SHORT}</p>
                <div class="story-description">{LONG}</div>
            </article>"#
        );
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        assert_eq!(select_summary(&article), LONG);
    }

    #[test]
    fn test_generic_phrases_disqualify() {
        let html = r#"<article>
            <p class="summary">Download the mint app to read premium stories every single day</p>
        </article>"#;
        let doc = container(html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        assert_eq!(select_summary(&article), "");
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        // exactly 40 chars does not qualify
        let at_forty = "a".repeat(40);
        let html = format!(r#"<article><p class="summary">{at_forty}</p></article>"#);
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        assert_eq!(select_summary(&article), "");
    }

    #[test]
    fn test_paragraph_fallback_takes_first_qualifier() {
        let html = format!(
            r#"<article>
                <p>short one</p>
                <p>{SHORT}</p>
                <p>{LONG}</p>
            </article>"#
        );
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        // fallback stops at the first qualifier even though a longer one follows
        assert_eq!(select_summary(&article), SHORT);
    }

    #[test]
    fn test_paragraph_fallback_limited_to_first_three() {
        let html = format!(
            r#"<article>
                <p>one</p>
                <p>two</p>
                <p>three</p>
                <p>{LONG}</p>
            </article>"#
        );
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        assert_eq!(select_summary(&article), "");
    }

    #[test]
    fn test_selector_match_cap_counts_before_qualification() {
        // two unqualifying .summary elements use up the per-selector budget,
        // so a third qualifying one is never inspected
        let html = format!(
            r#"<article>
                <p class="summary">tiny</p>
                <p class="summary">tiny too</p>
                <p class="summary">{LONG}</p>
            </article>"#
        );
        let doc = container(&html);
        let root = doc.root_element();
        let article = dom::find_first(&root, &["article"]).unwrap();
        // both selector passes budget out, so the paragraph fallback finds it
        assert_eq!(select_summary(&article), LONG);
    }
}
