// ABOUTME: Output record types produced by the extraction engine.
// ABOUTME: Articles, tables, sections, links, key/value harvests, and whole-page results.

//! Record types.
//!
//! Every extractor returns immutable value records built from these types.
//! All of them serialize with serde; the shapes match what the serialization
//! collaborators (JSON/CSV writers) consume.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A candidate news article that survived the validity classifier.
///
/// `summary` is truncated to 400 chars at assembly time; `date` is either a
/// validated, cleaned date string or empty; `scraped_at` is an RFC 3339 UTC
/// timestamp stamped when the record was assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub date: String,
    pub category: String,
    pub source: String,
    pub scraped_at: String,
}

/// An insertion-ordered string-to-string mapping.
///
/// Keys are unique; inserting an existing key overwrites its value in place,
/// keeping the position of the first insertion. Serializes as a JSON object
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap {
    entries: Vec<(String, String)>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair; an existing key keeps its position but takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// One materialized table row.
///
/// Rows whose cell count matches the header count become an ordered
/// header-to-cell mapping; everything else stays a plain cell sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Keyed(OrderedMap),
    Cells(Vec<String>),
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TableRow::Keyed(map) => map.serialize(serializer),
            TableRow::Cells(cells) => cells.serialize(serializer),
        }
    }
}

/// A markup table converted to headers plus typed rows.
///
/// Only emitted when it has at least one header or one row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableRecord {
    pub caption: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// A run of body paragraphs grouped under their governing heading.
///
/// Never emitted with empty `content`; `level` is the heading depth 1 to 6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub level: u8,
    pub content: Vec<String>,
}

/// Whether a link points at the page's own host or elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Internal,
    External,
}

/// A classified outbound link with its resolved absolute destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub text: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

/// Everything harvested from one page in a single whole-page pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageExtract {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    /// Non-empty heading texts grouped by tag, `"h1"` through `"h6"`.
    /// Levels with no headings are absent.
    pub headings: BTreeMap<String, Vec<String>>,
    pub key_value_pairs: OrderedMap,
    pub tables: Vec<TableRecord>,
    pub content_sections: Vec<Section>,
    pub links: Vec<LinkRecord>,
    pub scraped_at: String,
}
