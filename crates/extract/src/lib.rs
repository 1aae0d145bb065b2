// ABOUTME: Main library entry point for the FinSight content-extraction engine.
// ABOUTME: Re-exports the record types, the DomNode seam, and every extractor.

//! FinSight extract - heuristic content extraction from parsed web pages.
//!
//! Given a parsed markup tree and the page's source URL, this crate turns
//! noisy markup into validated, structured records: candidate news articles,
//! data tables, key/value fact pairs, heading-organized content sections,
//! and classified links. The heuristics are purely structural and lexical;
//! there is no fetching, no persistence, and no site-specific adapter.
//!
//! Extractors are generic over the [`dom::DomNode`] capability trait; the
//! crate implements it for [`scraper::ElementRef`], so the usual entry point
//! is a [`scraper::Html`] document:
//!
//! ```
//! use finsight_extract::{extract_articles, SeenTitles};
//! use scraper::Html;
//! use url::Url;
//!
//! let doc = Html::parse_document("<article><h2>...</h2></article>");
//! let base = Url::parse("https://news.example.com/markets/").unwrap();
//! let articles = extract_articles(&doc.root_element(), &base);
//!
//! // cross-page aggregation is caller-owned
//! let mut seen = SeenTitles::new();
//! let merged = finsight_extract::merge_articles(&mut seen, [articles]);
//! assert!(merged.is_empty());
//! ```
//!
//! Every extractor treats "found nothing" as a normal outcome and returns an
//! empty value; the only error in the crate is an unparseable base URL.

pub mod dedup;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod phrases;
pub mod records;
pub mod text;

pub use crate::dedup::{merge_articles, SeenTitles};
pub use crate::dom::DomNode;
pub use crate::error::ExtractError;
pub use crate::extractors::article::{container_pass, extract_articles, headline_pass, listing_pass};
pub use crate::extractors::category::extract_category;
pub use crate::extractors::date::{clean_date, extract_date, validate_date};
pub use crate::extractors::keyvalue::extract_key_values;
pub use crate::extractors::links::extract_links;
pub use crate::extractors::page::extract_page;
pub use crate::extractors::section::extract_sections;
pub use crate::extractors::summary::select_summary;
pub use crate::extractors::table::{extract_table, extract_tables};
pub use crate::extractors::validity::is_valid_article;
pub use crate::records::{
    ExtractedArticle, LinkKind, LinkRecord, OrderedMap, PageExtract, Section, TableRecord,
    TableRow,
};
pub use crate::text::clean_text;
