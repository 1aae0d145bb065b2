// ABOUTME: Outbound link filtering, resolution, and internal/external classification.
// ABOUTME: Skips scripting/auth/social destinations and bare-glyph anchor texts.

//! Link classification.
//!
//! Key behaviors:
//! - Anchors without a destination, or whose destination contains a skip
//!   pattern (fragments, `javascript:`/`mailto:`/`tel:` schemes, auth paths,
//!   social-network hosts), never appear in the output.
//! - Anchor text must normalize to at least 2 chars and not be a bare
//!   symbol or arrow glyph.
//! - Destinations resolve to absolute URLs against the page base; resolved
//!   URLs deduplicate within the pass, first occurrence wins.
//! - A link is `internal` when its resolved host equals the base host,
//!   `external` otherwise.

use std::collections::HashSet;

use url::Url;

use crate::dom::{self, DomNode};
use crate::phrases::{BARE_LINK_GLYPHS, LINK_SKIP_MATCHER};
use crate::records::{LinkKind, LinkRecord};
use crate::text::clean_text;

/// Extracts the meaningful links under `root`, resolved against `base`.
pub fn extract_links<N: DomNode>(root: &N, base: &Url) -> Vec<LinkRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    let anchors = dom::find_all_where(root, |n: &N| {
        n.is_tag("a") && n.attribute("href").is_some()
    });
    for anchor in anchors {
        let href = anchor.attribute("href").unwrap_or_default();
        if href.is_empty() {
            continue;
        }
        if LINK_SKIP_MATCHER.is_match(&href.to_lowercase()) {
            continue;
        }

        let text = clean_text(&anchor.text_content());
        if text.chars().count() < 2 || BARE_LINK_GLYPHS.contains(&text.as_str()) {
            continue;
        }

        let Ok(resolved) = base.join(href) else {
            continue;
        };
        let url = resolved.to_string();
        if !seen.insert(url.clone()) {
            continue;
        }

        let kind = if resolved.host_str() == base.host_str() {
            LinkKind::Internal
        } else {
            LinkKind::External
        };
        links.push(LinkRecord { text, url, kind });
    }

    links
}
