// ABOUTME: Label/value fact-pair harvesting from definition-like structures.
// ABOUTME: dt/label/strong/b labels resolve values through a sibling cascade.

//! Key-value extraction.
//!
//! Label-like elements (`dt`, `label`, `strong`, `b`) with a normalized text
//! of at most 100 chars become candidate keys. The value resolves through a
//! cascade, stopping at the first non-empty candidate:
//! 1. the nearest following `dd` sibling;
//! 2. the immediate next element sibling, unless it is itself a label tag;
//! 3. the parent's next element sibling.
//! The cascade's winner must normalize to under 500 chars or the key is
//! dropped without retrying later steps. A repeated key overwrites its
//! earlier value.

use crate::dom::{self, DomNode};
use crate::records::OrderedMap;
use crate::text::clean_text;

const LABEL_TAGS: &[&str] = &["dt", "label", "strong", "b"];

/// Harvests label/value pairs from every definition-like structure under `root`.
pub fn extract_key_values<N: DomNode>(root: &N) -> OrderedMap {
    let mut pairs = OrderedMap::new();

    for label in dom::find_all(root, LABEL_TAGS) {
        let key = clean_text(&label.text_content());
        if key.is_empty() || key.chars().count() > 100 {
            continue;
        }

        if let Some(value) = resolve_value(&label) {
            if value.chars().count() < 500 {
                pairs.insert(key, value);
            }
        }
    }

    pairs
}

fn resolve_value<N: DomNode>(label: &N) -> Option<String> {
    // nearest following dd sibling
    let mut sibling = label.next_element_sibling();
    while let Some(node) = sibling {
        if node.is_tag("dd") {
            let value = clean_text(&node.text_content());
            if !value.is_empty() {
                return Some(value);
            }
            break;
        }
        sibling = node.next_element_sibling();
    }

    // immediate next sibling, unless it is another label
    if let Some(next) = label.next_element_sibling() {
        if !LABEL_TAGS.contains(&next.tag_name().unwrap_or("")) {
            let value = clean_text(&next.text_content());
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    // parent's next sibling
    if let Some(parent_next) = label.parent_element().and_then(|p| p.next_element_sibling()) {
        let value = clean_text(&parent_next.text_content());
        if !value.is_empty() {
            return Some(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn pairs(html: &str) -> OrderedMap {
        let doc = Html::parse_document(html);
        let root = doc.root_element();
        extract_key_values(&root)
    }

    #[test]
    fn test_definition_list_pairs() {
        let map = pairs(
            r#"<dl>
                <dt>Issue Size</dt><dd>₹5,000 Cr</dd>
                <dt>Price Band</dt><dd>100 to 120</dd>
            </dl>"#,
        );
        assert_eq!(map.get("Issue Size"), Some("₹5,000 Cr"));
        assert_eq!(map.get("Price Band"), Some("100 to 120"));
    }

    #[test]
    fn test_dd_found_past_intervening_sibling() {
        let map = pairs(r#"<dl><dt>Registrar</dt><span>note</span><dd>Link Intime</dd></dl>"#);
        assert_eq!(map.get("Registrar"), Some("Link Intime"));
    }

    #[test]
    fn test_label_with_value_sibling() {
        let map = pairs(r#"<div><label>Listing At</label><span>BSE, NSE</span></div>"#);
        assert_eq!(map.get("Listing At"), Some("BSE, NSE"));
    }

    #[test]
    fn test_label_sibling_skipped_when_also_a_label() {
        // strong followed by strong resolves through the parent's next sibling
        let map = pairs(
            r#"<div><p><strong>Open Date</strong><strong>Close Date</strong></p><div>May 5</div></div>"#,
        );
        assert_eq!(map.get("Open Date"), Some("May 5"));
    }

    #[test]
    fn test_parent_next_sibling_fallback() {
        let map = pairs(r#"<div><div><b>Face Value</b></div><div>₹10 per share</div></div>"#);
        assert_eq!(map.get("Face Value"), Some("₹10 per share"));
    }

    #[test]
    fn test_overlong_key_skipped() {
        let long_key = "k".repeat(101);
        let map = pairs(&format!("<div><strong>{long_key}</strong><span>v</span></div>"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_overlong_value_drops_key() {
        let long_value = "v".repeat(600);
        let map = pairs(&format!(
            "<dl><dt>About</dt><dd>{long_value}</dd><dd>short</dd></dl>"
        ));
        // the first dd wins the cascade and then fails the length gate
        assert!(map.get("About").is_none());
    }

    #[test]
    fn test_repeated_key_overwrites() {
        let map = pairs(
            r#"<dl>
                <dt>Status</dt><dd>Open</dd>
                <dt>Status</dt><dd>Closed</dd>
            </dl>"#,
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Status"), Some("Closed"));
    }

    #[test]
    fn test_label_with_no_value_dropped() {
        let map = pairs("<div><p><strong>Dangling</strong></p></div>");
        assert!(map.is_empty());
    }
}
