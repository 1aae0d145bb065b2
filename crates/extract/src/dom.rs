// ABOUTME: Small DOM capability trait the extractors are generic over, plus traversal helpers.
// ABOUTME: Ships one implementation for scraper::ElementRef; any parser can substitute its own.

//! DOM capability seam.
//!
//! The extractors only need a handful of tree operations: tag name, attribute
//! lookup, concatenated text, element children, sibling/parent navigation,
//! and node identity. [`DomNode`] captures exactly that surface so the engine
//! is not tied to one parsing library. The crate implements it for
//! [`scraper::ElementRef`]; tests and callers parse with [`scraper::Html`].
//!
//! Traversal helpers here mirror the handful of query shapes the extractors
//! use: pre-order descendant walks, first-match lookups, and "next element of
//! this tag after that node in document order".

use scraper::ElementRef;

/// The tree-node surface an extractor can rely on.
///
/// Implementations hand out cheap clones (the scraper implementation is a
/// `Copy` reference into the parsed tree).
pub trait DomNode: Clone {
    /// Lowercase tag name of this element.
    fn tag_name(&self) -> Option<&str>;

    /// Attribute value, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Concatenated text of all descendant text nodes, unnormalized.
    fn text_content(&self) -> String;

    /// Element children in document order.
    fn element_children(&self) -> Vec<Self>;

    /// Next sibling that is an element, skipping text and comment nodes.
    fn next_element_sibling(&self) -> Option<Self>;

    /// Parent element, if any.
    fn parent_element(&self) -> Option<Self>;

    /// True when both handles point at the same tree node.
    fn same_node(&self, other: &Self) -> bool;

    fn is_tag(&self, name: &str) -> bool {
        self.tag_name() == Some(name)
    }

    /// True when the `class` attribute contains `class` as a whole token.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|attr| attr.split_whitespace().any(|token| token == class))
            .unwrap_or(false)
    }

    /// True when the `class` attribute contains `needle` as a substring.
    fn class_contains(&self, needle: &str) -> bool {
        self.attribute("class")
            .map(|attr| attr.contains(needle))
            .unwrap_or(false)
    }
}

impl<'a> DomNode for ElementRef<'a> {
    fn tag_name(&self) -> Option<&str> {
        Some(self.value().name())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.next_siblings().find_map(ElementRef::wrap)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// All element descendants of `node` in pre-order, excluding `node` itself.
pub fn descendants<N: DomNode>(node: &N) -> Vec<N> {
    let mut out = Vec::new();
    collect_descendants(node, &mut out);
    out
}

fn collect_descendants<N: DomNode>(node: &N, out: &mut Vec<N>) {
    for child in node.element_children() {
        out.push(child.clone());
        collect_descendants(&child, out);
    }
}

/// First descendant whose tag is one of `tags`, in document order.
pub fn find_first<N: DomNode>(node: &N, tags: &[&str]) -> Option<N> {
    find_first_where(node, |n| tags.iter().any(|t| n.is_tag(t)))
}

/// All descendants whose tag is one of `tags`, in document order.
pub fn find_all<N: DomNode>(node: &N, tags: &[&str]) -> Vec<N> {
    find_all_where(node, |n| tags.iter().any(|t| n.is_tag(t)))
}

/// First descendant matching `pred`, in document order.
pub fn find_first_where<N: DomNode, F: Fn(&N) -> bool>(node: &N, pred: F) -> Option<N> {
    fn walk<N: DomNode, F: Fn(&N) -> bool>(node: &N, pred: &F) -> Option<N> {
        for child in node.element_children() {
            if pred(&child) {
                return Some(child);
            }
            if let Some(hit) = walk(&child, pred) {
                return Some(hit);
            }
        }
        None
    }
    walk(node, &pred)
}

/// All descendants matching `pred`, in document order.
pub fn find_all_where<N: DomNode, F: Fn(&N) -> bool>(node: &N, pred: F) -> Vec<N> {
    let mut out = Vec::new();
    fn walk<N: DomNode, F: Fn(&N) -> bool>(node: &N, pred: &F, out: &mut Vec<N>) {
        for child in node.element_children() {
            if pred(&child) {
                out.push(child.clone());
            }
            walk(&child, pred, out);
        }
    }
    walk(node, &pred, &mut out);
    out
}

/// First element with tag `tag` that comes strictly after `after` in the
/// pre-order traversal of `root`. Descendants of `after` are after it.
pub fn following<N: DomNode>(root: &N, after: &N, tag: &str) -> Option<N> {
    fn walk<N: DomNode>(node: &N, after: &N, tag: &str, passed: &mut bool) -> Option<N> {
        if *passed && node.is_tag(tag) {
            return Some(node.clone());
        }
        if node.same_node(after) {
            *passed = true;
        }
        for child in node.element_children() {
            if let Some(hit) = walk(&child, after, tag, passed) {
                return Some(hit);
            }
        }
        None
    }
    let mut passed = false;
    walk(root, after, tag, &mut passed)
}

/// True when some ancestor of `node`, strictly below `stop`, has tag `tag`.
pub fn has_ancestor_within<N: DomNode>(node: &N, stop: &N, tag: &str) -> bool {
    let mut cur = node.parent_element();
    while let Some(parent) = cur {
        if parent.same_node(stop) {
            return false;
        }
        if parent.is_tag(tag) {
            return true;
        }
        cur = parent.parent_element();
    }
    false
}

/// True when any ancestor of `node` matches `pred`.
pub fn has_matching_ancestor<N: DomNode, F: Fn(&N) -> bool>(node: &N, pred: F) -> bool {
    let mut cur = node.parent_element();
    while let Some(parent) = cur {
        if pred(&parent) {
            return true;
        }
        cur = parent.parent_element();
    }
    false
}

/// Content of the first `meta` element whose attribute `attr` equals `value`,
/// when that content is non-empty.
pub fn meta_content<N: DomNode>(root: &N, attr: &str, value: &str) -> Option<String> {
    let meta = find_first_where(root, |n| n.is_tag("meta") && n.attribute(attr) == Some(value))?;
    meta.attribute("content")
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}
