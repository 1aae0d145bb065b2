// ABOUTME: Table extraction into captions, headers, and typed rows.
// ABOUTME: Explicit header groups win; else the first row may be consumed as headers.

//! Table extraction.
//!
//! Key behaviors:
//! - The caption, when present, is captured normalized.
//! - Headers come from the first row of an explicit `thead`; without one,
//!   the first row is treated as headers when it has at least one `th` cell
//!   or more than two cells.
//! - Body rows come from `tbody` when present; otherwise from all rows,
//!   excluding header-group rows and a consumed first row.
//! - A row whose cell count equals the header count zips into an ordered
//!   header-to-cell mapping (duplicate header text keeps its position, last
//!   value wins); any other row stays a plain cell sequence.
//! - A table is emitted only when it has at least one header or one row.

use crate::dom::{self, DomNode};
use crate::records::{OrderedMap, TableRecord, TableRow};
use crate::text::clean_text;

/// Extracts every table under `root`, skipping ones with no headers and no rows.
pub fn extract_tables<N: DomNode>(root: &N) -> Vec<TableRecord> {
    dom::find_all(root, &["table"])
        .iter()
        .filter_map(extract_table)
        .collect()
}

/// Converts one table element, or returns `None` when it holds nothing.
pub fn extract_table<N: DomNode>(table: &N) -> Option<TableRecord> {
    let caption = dom::find_first(table, &["caption"])
        .map(|c| clean_text(&c.text_content()))
        .unwrap_or_default();

    let thead = dom::find_first(table, &["thead"]);
    let mut headers: Vec<String> = Vec::new();
    let mut consumed_first_row = false;

    if let Some(ref thead) = thead {
        if let Some(header_row) = dom::find_first(thead, &["tr"]) {
            headers = cell_texts(&header_row);
        }
    } else if let Some(first_row) = dom::find_first(table, &["tr"]) {
        let cells = dom::find_all(&first_row, &["th", "td"]);
        if cells.iter().any(|c| c.is_tag("th")) || cells.len() > 2 {
            headers = cells
                .iter()
                .map(|c| clean_text(&c.text_content()))
                .collect();
            consumed_first_row = true;
        }
    }

    let body_rows: Vec<N> = match dom::find_first(table, &["tbody"]) {
        Some(tbody) => dom::find_all(&tbody, &["tr"]),
        None => dom::find_all(table, &["tr"])
            .into_iter()
            .filter(|tr| !dom::has_ancestor_within(tr, table, "thead"))
            .collect(),
    };

    let skip = if consumed_first_row { 1 } else { 0 };
    let mut rows: Vec<TableRow> = Vec::new();
    for row in body_rows.into_iter().skip(skip) {
        let cells = cell_texts(&row);
        if cells.is_empty() {
            continue;
        }
        if !headers.is_empty() && cells.len() == headers.len() {
            let mut mapped = OrderedMap::new();
            for (header, cell) in headers.iter().zip(cells) {
                mapped.insert(header.clone(), cell);
            }
            rows.push(TableRow::Keyed(mapped));
        } else {
            rows.push(TableRow::Cells(cells));
        }
    }

    if headers.is_empty() && rows.is_empty() {
        return None;
    }

    Some(TableRecord {
        caption,
        headers,
        rows,
    })
}

fn cell_texts<N: DomNode>(row: &N) -> Vec<String> {
    dom::find_all(row, &["td", "th"])
        .iter()
        .map(|cell| clean_text(&cell.text_content()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    fn first_table(html: &str) -> Option<TableRecord> {
        let doc = Html::parse_document(html);
        let root = doc.root_element();
        let table = dom::find_first(&root, &["table"])?;
        extract_table(&table)
    }

    fn keyed(row: &TableRow) -> &OrderedMap {
        match row {
            TableRow::Keyed(map) => map,
            TableRow::Cells(cells) => panic!("expected keyed row, got cells {:?}", cells),
        }
    }

    #[test]
    fn test_matching_row_zips_into_mapping() {
        let record = first_table(
            r#"<table>
                <tr><th>A</th><th>B</th></tr>
                <tr><td>1</td><td>2</td></tr>
            </table>"#,
        )
        .unwrap();
        assert_eq!(record.headers, vec!["A", "B"]);
        assert_eq!(record.rows.len(), 1);
        let map = keyed(&record.rows[0]);
        assert_eq!(map.get("A"), Some("1"));
        assert_eq!(map.get("B"), Some("2"));
    }

    #[test]
    fn test_thead_and_tbody_groups() {
        let record = first_table(
            r#"<table>
                <caption> Quarterly Results </caption>
                <thead><tr><th>Quarter</th><th>Revenue</th></tr></thead>
                <tbody>
                    <tr><td>Q1</td><td>100</td></tr>
                    <tr><td>Q2</td><td>120</td></tr>
                </tbody>
            </table>"#,
        )
        .unwrap();
        assert_eq!(record.caption, "Quarterly Results");
        assert_eq!(record.headers, vec!["Quarter", "Revenue"]);
        assert_eq!(record.rows.len(), 2);
        assert_eq!(keyed(&record.rows[1]).get("Revenue"), Some("120"));
    }

    #[test]
    fn test_thead_without_tbody_excludes_header_row_from_body() {
        let record = first_table(
            r#"<table>
                <thead><tr><th>A</th><th>B</th></tr></thead>
                <tr><td>1</td><td>2</td></tr>
            </table>"#,
        )
        .unwrap();
        assert_eq!(record.headers, vec!["A", "B"]);
        assert_eq!(record.rows.len(), 1);
        assert_eq!(keyed(&record.rows[0]).get("A"), Some("1"));
    }

    #[test]
    fn test_first_row_consumed_when_it_has_th_cells() {
        let record = first_table(
            r#"<table>
                <tr><th>Name</th><td>Value</td></tr>
                <tr><td>Price</td><td>₹120</td></tr>
            </table>"#,
        )
        .unwrap();
        assert_eq!(record.headers, vec!["Name", "Value"]);
        assert_eq!(record.rows.len(), 1);
    }

    #[test]
    fn test_first_row_consumed_when_wide_enough() {
        // no th cells, but more than two columns
        let record = first_table(
            r#"<table>
                <tr><td>A</td><td>B</td><td>C</td></tr>
                <tr><td>1</td><td>2</td><td>3</td></tr>
            </table>"#,
        )
        .unwrap();
        assert_eq!(record.headers, vec!["A", "B", "C"]);
        assert_eq!(record.rows.len(), 1);
    }

    #[test]
    fn test_narrow_td_first_row_stays_a_row() {
        let record = first_table(
            r#"<table>
                <tr><td>label</td><td>value</td></tr>
                <tr><td>other</td><td>thing</td></tr>
            </table>"#,
        )
        .unwrap();
        assert!(record.headers.is_empty());
        assert_eq!(record.rows.len(), 2);
        assert_eq!(
            record.rows[0],
            TableRow::Cells(vec!["label".to_string(), "value".to_string()])
        );
    }

    #[test]
    fn test_mismatched_row_stays_cells() {
        let record = first_table(
            r#"<table>
                <thead><tr><th>A</th><th>B</th></tr></thead>
                <tbody><tr><td>only one</td></tr></tbody>
            </table>"#,
        )
        .unwrap();
        assert_eq!(
            record.rows[0],
            TableRow::Cells(vec!["only one".to_string()])
        );
    }

    #[test]
    fn test_duplicate_header_last_value_wins() {
        let record = first_table(
            r#"<table>
                <thead><tr><th>X</th><th>X</th></tr></thead>
                <tbody><tr><td>first</td><td>second</td></tr></tbody>
            </table>"#,
        )
        .unwrap();
        let map = keyed(&record.rows[0]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("X"), Some("second"));
    }

    #[test]
    fn test_empty_table_not_emitted() {
        assert!(first_table("<table></table>").is_none());
        assert!(first_table("<table><tr></tr></table>").is_none());
    }

    #[test]
    fn test_headers_only_table_emitted() {
        let record = first_table(
            r#"<table><thead><tr><th>A</th><th>B</th></tr></thead></table>"#,
        )
        .unwrap();
        assert_eq!(record.headers, vec!["A", "B"]);
        assert!(record.rows.is_empty());
    }

    #[test]
    fn test_extract_tables_skips_empty_keeps_rest() {
        let html = r#"<div>
            <table></table>
            <table><tr><th>A</th></tr><tr><td>1</td></tr></table>
        </div>"#;
        let doc = Html::parse_document(html);
        let root = doc.root_element();
        let tables = extract_tables(&root);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["A"]);
    }
}
