// ABOUTME: Topical category derivation from page metadata or URL structure.
// ABOUTME: Metadata wins; otherwise the first URL path segment is title-cased.

use url::Url;

use crate::dom::{self, DomNode};
use crate::text::title_case;

/// Derives a category for a candidate, preferring page metadata
/// (`article:section`, then a `category` meta name) and falling back to the
/// first non-empty path segment of `url` with hyphens spaced and the result
/// title-cased. Returns an empty string when neither source yields a value.
pub fn extract_category<N: DomNode>(root: &N, url: &str) -> String {
    if let Some(content) = dom::meta_content(root, "property", "article:section")
        .or_else(|| dom::meta_content(root, "name", "category"))
    {
        return content;
    }

    category_from_url(url)
}

fn category_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    parsed
        .path()
        .split('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| title_case(&segment.replace('-', " ")))
        .unwrap_or_default()
}
