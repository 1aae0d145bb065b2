// ABOUTME: Whole-page extraction combining every component into one PageExtract.
// ABOUTME: Title, meta description, headings by level, key/values, tables, sections, links.

use std::collections::BTreeMap;

use chrono::Utc;
use url::Url;

use crate::dom::{self, DomNode};
use crate::error::ExtractError;
use crate::extractors::{keyvalue, links, section, table};
use crate::records::PageExtract;
use crate::text::clean_text;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Runs every structural extractor over one page.
///
/// The only failure is a source URL that does not parse as an absolute URL;
/// every heuristic miss inside the page shows up as an empty field.
pub fn extract_page<N: DomNode>(root: &N, url: &str) -> Result<PageExtract, ExtractError> {
    let base = Url::parse(url).map_err(|source| ExtractError::InvalidBaseUrl {
        url: url.to_string(),
        source,
    })?;

    let title = dom::find_first(root, &["title"])
        .map(|t| clean_text(&t.text_content()))
        .unwrap_or_default();

    let meta_description = dom::meta_content(root, "name", "description")
        .map(|content| clean_text(&content))
        .unwrap_or_default();

    let mut headings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for &tag in HEADING_TAGS {
        let texts: Vec<String> = dom::find_all(root, &[tag])
            .iter()
            .map(|h| clean_text(&h.text_content()))
            .filter(|t| !t.is_empty())
            .collect();
        if !texts.is_empty() {
            headings.insert(tag.to_string(), texts);
        }
    }

    Ok(PageExtract {
        url: url.to_string(),
        title,
        meta_description,
        headings,
        key_value_pairs: keyvalue::extract_key_values(root),
        tables: table::extract_tables(root),
        content_sections: section::extract_sections(root),
        links: links::extract_links(root, &base),
        scraped_at: Utc::now().to_rfc3339(),
    })
}
