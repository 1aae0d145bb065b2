// ABOUTME: Article assembly passes: container, headline, and listing strategies.
// ABOUTME: Each pass walks the tree, assembles candidates, and gates them on validity.

//! Article assembly.
//!
//! Three independent strategies rediscover articles on a page; a caller
//! usually runs all of them and merges through the title dedup:
//! - [`container_pass`] walks `<article>` elements and reads the title from
//!   their first `h1`/`h2`/`h3`.
//! - [`headline_pass`] scans bare `h1` through `h4` headings and takes the
//!   next paragraph as the summary.
//! - [`listing_pass`] applies the listing-page selectors (story containers
//!   and headline anchors) used by category and index pages.
//!
//! Every pass keeps its own lowercased-title set so one strategy never emits
//! the same headline twice; cross-pass and cross-source dedup belongs to the
//! caller-owned [`crate::dedup::SeenTitles`].

use std::collections::HashSet;

use chrono::Utc;
use url::Url;

use crate::dedup::{merge_articles, SeenTitles};
use crate::dom::{self, DomNode};
use crate::extractors::category::extract_category;
use crate::extractors::date::extract_date;
use crate::extractors::summary::select_summary;
use crate::extractors::validity::is_valid_article;
use crate::records::ExtractedArticle;
use crate::text::{clean_text, truncate_chars};

const TITLE_TAGS: &[&str] = &["h1", "h2", "h3"];
const HEADLINE_TAGS: &[&str] = &["h1", "h2", "h3", "h4"];
const SUMMARY_CAP_CHARS: usize = 400;
const MIN_TITLE_CHARS: usize = 15;

/// Runs all three passes over one page and merges them through a fresh
/// title-dedup set. Cross-page aggregation stays with the caller.
pub fn extract_articles<N: DomNode>(root: &N, base: &Url) -> Vec<ExtractedArticle> {
    let mut seen = SeenTitles::new();
    merge_articles(
        &mut seen,
        [
            container_pass(root, base),
            headline_pass(root, base),
            listing_pass(root, base),
        ],
    )
}

/// Extracts articles from `<article>` containers.
pub fn container_pass<N: DomNode>(root: &N, base: &Url) -> Vec<ExtractedArticle> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles = Vec::new();

    for container in dom::find_all(root, &["article"]) {
        let Some(title_el) = dom::find_first(&container, TITLE_TAGS) else {
            continue;
        };
        let title = clean_text(&title_el.text_content());
        if title.is_empty() || !seen.insert(title.to_lowercase()) {
            continue;
        }

        let link_el = dom::find_first(&title_el, &["a"])
            .or_else(|| dom::find_first_where(&container, anchor_with_href));
        let link = resolve_href(link_el.as_ref(), base);

        let summary = select_summary(&container);
        let date = extract_date(root, Some(&container));
        let category = extract_category(root, pick_url(&link, base));

        if is_valid_article(&title, non_empty(&summary), non_empty(&link)) {
            articles.push(assemble(title, link, summary, date, category, base));
        }
    }

    articles
}

/// Extracts articles from bare headings, `h1` through `h4`.
pub fn headline_pass<N: DomNode>(root: &N, base: &Url) -> Vec<ExtractedArticle> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles = Vec::new();

    for &tag in HEADLINE_TAGS {
        for heading in dom::find_all(root, &[tag]) {
            let title = clean_text(&heading.text_content());
            if title.chars().count() < MIN_TITLE_CHARS || !seen.insert(title.to_lowercase()) {
                continue;
            }

            let link_el = dom::find_first_where(&heading, anchor_with_href);
            let link = resolve_href(link_el.as_ref(), base);

            // the heading itself carries no body text; the next paragraph does
            let summary = dom::following(root, &heading, "p")
                .map(|p| clean_text(&p.text_content()))
                .unwrap_or_default();

            let parent = heading.parent_element();
            let date = extract_date(root, parent.as_ref());
            let category = extract_category(root, pick_url(&link, base));

            if is_valid_article(&title, non_empty(&summary), non_empty(&link)) {
                articles.push(assemble(title, link, summary, date, category, base));
            }
        }
    }

    articles
}

/// Extracts articles through the listing-page selectors, in order: story
/// containers (`article`, `li.article`, `div.article`, `div.story`), then
/// headline anchors (`h2 a`, `h3 a`, `.headline a`, `.title a`,
/// `[class*='news'] a`).
pub fn listing_pass<N: DomNode>(root: &N, base: &Url) -> Vec<ExtractedArticle> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles = Vec::new();

    for matches in listing_selector_matches(root) {
        for el in matches {
            let tag = el.tag_name().unwrap_or_default();
            let title_el = if tag == "h2" || tag == "h3" {
                el.clone()
            } else {
                dom::find_first(&el, &["h2", "h3", "a"]).unwrap_or_else(|| el.clone())
            };

            let title = clean_text(&title_el.text_content());
            if title.chars().count() < MIN_TITLE_CHARS || !seen.insert(title.to_lowercase()) {
                continue;
            }

            let link_el = if tag == "a" {
                Some(el.clone())
            } else {
                dom::find_first_where(&el, anchor_with_href)
            };
            let link = resolve_href(link_el.as_ref(), base);

            let summary = dom::following(root, &el, "p")
                .or_else(|| dom::find_first(&el, &["p"]))
                .map(|p| clean_text(&p.text_content()))
                .unwrap_or_default();

            let date = extract_date(root, Some(&el));
            let category = extract_category(root, pick_url(&link, base));

            if is_valid_article(&title, non_empty(&summary), non_empty(&link)) {
                articles.push(assemble(title, link, summary, date, category, base));
            }
        }
    }

    articles
}

fn listing_selector_matches<N: DomNode>(root: &N) -> Vec<Vec<N>> {
    vec![
        dom::find_all(root, &["article"]),
        dom::find_all_where(root, |n: &N| n.is_tag("li") && n.has_class("article")),
        dom::find_all_where(root, |n: &N| n.is_tag("div") && n.has_class("article")),
        dom::find_all_where(root, |n: &N| n.is_tag("div") && n.has_class("story")),
        anchors_under(root, |a: &N| a.is_tag("h2")),
        anchors_under(root, |a: &N| a.is_tag("h3")),
        anchors_under(root, |a: &N| a.has_class("headline")),
        anchors_under(root, |a: &N| a.has_class("title")),
        anchors_under(root, |a: &N| a.class_contains("news")),
    ]
}

fn anchors_under<N: DomNode, F: Fn(&N) -> bool>(root: &N, ancestor: F) -> Vec<N> {
    dom::find_all_where(root, |n: &N| {
        n.is_tag("a") && dom::has_matching_ancestor(n, &ancestor)
    })
}

fn anchor_with_href<N: DomNode>(node: &N) -> bool {
    node.is_tag("a") && node.attribute("href").is_some()
}

/// Resolves an anchor's destination the way listing pages expect: absolute
/// destinations pass through, protocol-relative ones get `https:`,
/// root-relative ones join the base, anything else stays verbatim.
fn resolve_href<N: DomNode>(link_el: Option<&N>, base: &Url) -> String {
    let Some(href) = link_el
        .and_then(|el| el.attribute("href"))
        .filter(|h| !h.is_empty())
    else {
        return String::new();
    };

    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with("//") {
        format!("https:{href}")
    } else if href.starts_with('/') {
        base.join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    } else {
        href.to_string()
    }
}

fn pick_url<'a>(link: &'a str, base: &'a Url) -> &'a str {
    if link.is_empty() {
        base.as_str()
    } else {
        link
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn assemble(
    title: String,
    link: String,
    summary: String,
    date: String,
    category: String,
    base: &Url,
) -> ExtractedArticle {
    ExtractedArticle {
        title,
        link,
        summary: truncate_chars(&summary, SUMMARY_CAP_CHARS),
        date,
        category,
        source: base.to_string(),
        scraped_at: Utc::now().to_rfc3339(),
    }
}
