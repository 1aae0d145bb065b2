// ABOUTME: Publication date extraction and validation.
// ABOUTME: Searches time elements, data attributes, text patterns, then page metadata.

//! Date extraction.
//!
//! Candidate sources are tried in a fixed order; the first one whose value
//! validates wins and is returned cleaned:
//! 1. a `time` element's `datetime` attribute, or its text;
//! 2. date-bearing attributes on the candidate node itself;
//! 3. regex scan of the candidate node's full text;
//! 4. page-level metadata tags.
//!
//! Validation requires a plausible year token (2020 through 2030) and
//! rejects zeroed day/month sequences. Cleaning strips a trailing numeric
//! offset or `Z` so downstream consumers get a naive-looking local stamp.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{self, DomNode};
use crate::text::clean_text;

/// Attributes on a candidate node that sites use to carry the publish date.
const DATE_ATTRS: &[&str] = &["data-date", "data-published", "data-time", "pubdate"];

/// Page-level metadata tags consulted as a last resort, in priority order.
const META_DATE_TAGS: &[(&str, &str)] = &[
    ("property", "article:published_time"),
    ("name", "publish-date"),
    ("name", "date"),
    ("name", "publishdate"),
];

static TEXT_DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "15 Jan 2024" / "3 September 2025"
        r"(?i)\d{1,2}\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}",
        // "15/01/2024"
        r"\d{1,2}/\d{1,2}/\d{4}",
        // "2024-01-15"
        r"\d{4}-\d{2}-\d{2}",
        // "15 Jan 2024, 10:30"
        r"(?i)\d{1,2}\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4},\s+\d{1,2}:\d{2}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"20[2-3][0-9]").unwrap());
static TZ_OFFSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]\d{2}:\d{2}$").unwrap());

/// Extracts a publication date from the candidate node and the page, or
/// returns an empty string when nothing validates.
pub fn extract_date<N: DomNode>(root: &N, candidate: Option<&N>) -> String {
    if let Some(node) = candidate {
        if let Some(time_el) = dom::find_first(node, &["time"]) {
            let raw = match time_el.attribute("datetime") {
                Some(dt) if !dt.is_empty() => dt.to_string(),
                _ => clean_text(&time_el.text_content()),
            };
            if !raw.is_empty() && validate_date(&raw) {
                return clean_date(&raw);
            }
        }

        for attr in DATE_ATTRS {
            if let Some(value) = node.attribute(attr) {
                if !value.is_empty() && validate_date(value) {
                    return clean_date(value);
                }
            }
        }

        let text = node.text_content();
        for pattern in TEXT_DATE_PATTERNS.iter() {
            if let Some(hit) = pattern.find(&text) {
                if validate_date(hit.as_str()) {
                    return clean_date(hit.as_str());
                }
            }
        }
    }

    for (attr, value) in META_DATE_TAGS {
        if let Some(content) = dom::meta_content(root, attr, value) {
            if validate_date(&content) {
                return clean_date(&content);
            }
        }
    }

    String::new()
}

/// Returns true when the string plausibly names a recent date.
pub fn validate_date(date_str: &str) -> bool {
    if date_str.is_empty() {
        return false;
    }

    if date_str.contains("00-00") || date_str.contains("00/00") {
        return false;
    }

    let Some(year_match) = YEAR_RE.find(date_str) else {
        return false;
    };
    let year: i32 = match year_match.as_str().parse() {
        Ok(y) => y,
        Err(_) => return false,
    };
    (2020..=2030).contains(&year)
}

/// Strips a trailing numeric timezone offset or `Z` and trims.
pub fn clean_date(date_str: &str) -> String {
    let stripped = TZ_OFFSET_RE.replace(date_str, "");
    stripped.trim_end_matches('Z').trim().to_string()
}
