// ABOUTME: Groups body paragraphs under their governing heading.
// ABOUTME: Single-pass traversal with an explicit open-section accumulator.

//! Section building.
//!
//! One pre-order pass over the tree drives a single-slot state value: either
//! no section is open, or one is open with its heading, level, and a buffer
//! of qualifying paragraph texts. A new heading commits the open section
//! (when its buffer is non-empty) and opens the next one. Paragraphs and
//! containers append to the open buffer when their normalized text is over
//! 20 chars and free of boilerplate phrases. Headings that gather no content
//! are dropped, never emitted empty.

use crate::dom::{self, DomNode};
use crate::phrases::BOILERPLATE_MATCHER;
use crate::records::Section;
use crate::text::clean_text;

const BLOCK_TAGS: &[&str] = &["p", "div"];
const MIN_BLOCK_CHARS: usize = 20;

/// The open-section accumulator threaded through the traversal.
struct OpenSection {
    heading: String,
    level: u8,
    buffer: Vec<String>,
}

impl OpenSection {
    fn commit(self, sections: &mut Vec<Section>) {
        if !self.buffer.is_empty() {
            sections.push(Section {
                heading: self.heading,
                level: self.level,
                content: self.buffer,
            });
        }
    }
}

/// Builds heading-organized content sections from the tree under `root`.
pub fn extract_sections<N: DomNode>(root: &N) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<OpenSection> = None;

    for node in dom::descendants(root) {
        let Some(tag) = node.tag_name() else { continue };
        if let Some(level) = heading_level(tag) {
            if let Some(open) = current.take() {
                open.commit(&mut sections);
            }
            current = Some(OpenSection {
                heading: clean_text(&node.text_content()),
                level,
                buffer: Vec::new(),
            });
        } else if BLOCK_TAGS.contains(&tag) {
            if let Some(open) = current.as_mut() {
                let text = clean_text(&node.text_content());
                if text.chars().count() > MIN_BLOCK_CHARS
                    && !BOILERPLATE_MATCHER.is_match(&text.to_lowercase())
                {
                    open.buffer.push(text);
                }
            }
        }
    }

    if let Some(open) = current {
        open.commit(&mut sections);
    }

    sections
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    fn sections(html: &str) -> Vec<Section> {
        let doc = Html::parse_document(html);
        let root = doc.root_element();
        extract_sections(&root)
    }

    const PARA: &str = "The company reported a sharp rise in quarterly profit.";

    #[test]
    fn test_heading_with_no_content_is_dropped() {
        let got = sections(&format!(
            r#"<body><h2>Empty one</h2><h2>Kept one</h2><p>{PARA}</p></body>"#
        ));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].heading, "Kept one");
        assert_eq!(got[0].level, 2);
        assert_eq!(got[0].content, vec![PARA.to_string()]);
    }

    #[test]
    fn test_blocks_before_any_heading_are_ignored() {
        let got = sections(&format!(r#"<body><p>{PARA}</p><h2>After</h2></body>"#));
        assert!(got.is_empty());
    }

    #[test]
    fn test_short_blocks_filtered() {
        let got = sections(r#"<body><h2>Heading here</h2><p>too short</p></body>"#);
        assert!(got.is_empty());
    }

    #[test]
    fn test_boilerplate_blocks_filtered() {
        let got = sections(
            r#"<body>
                <h2>Heading here</h2>
                <p>This site uses cookies to improve your browsing experience.</p>
                <p>Please review our privacy statement before continuing on.</p>
            </body>"#,
        );
        assert!(got.is_empty());
    }

    #[test]
    fn test_trailing_section_committed() {
        let got = sections(&format!(
            r#"<body>
                <h3>First block</h3><p>{PARA}</p>
                <h4>Second block</h4><p>{PARA}</p>
            </body>"#
        ));
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].level, 3);
        assert_eq!(got[1].heading, "Second block");
        assert_eq!(got[1].level, 4);
    }

    #[test]
    fn test_multiple_paragraphs_accumulate_in_order() {
        let got = sections(&format!(
            r#"<body><h1>Top story</h1>
                <p>{PARA}</p>
                <p>Margins improved on the back of lower input costs this quarter.</p>
            </body>"#
        ));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].content.len(), 2);
        assert_eq!(got[0].content[0], PARA);
    }
}
