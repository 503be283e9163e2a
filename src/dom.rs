//! DOM helpers over `dom_query`.
//!
//! Thin functions for the handful of tree operations the extractor needs:
//! tag names, own text, hidden-element checks and a line-aware text renderer
//! that keeps `<br>` and block boundaries visible to the normalizer.

pub use dom_query::{Document, NodeRef, Selection};

/// Tags whose content never contributes text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Tags rendered as paragraph boundaries.
const BLOCK_TAGS: &[&str] = &["p", "div", "li", "blockquote", "section", "article"];

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Whether an element is hidden with an inline `display: none`.
#[must_use]
pub fn is_hidden(node: &NodeRef) -> bool {
    if !node.is_element() {
        return false;
    }
    Selection::from(*node).attr("style").is_some_and(|style| {
        let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        compact.to_ascii_lowercase().contains("display:none")
    })
}

/// Text of the direct text children only, ignoring nested elements.
///
/// `<h1><span>Title<br><span class="sub">Sub</span></span></h1>` yields
/// `"Title"` for the outer span.
#[must_use]
pub fn own_text(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    node.children()
        .iter()
        .filter(|c| c.is_text())
        .map(|c| c.text().to_string())
        .collect()
}

/// Render the text of a node and its descendants, keeping line structure.
///
/// `<br>` becomes a newline and block elements are wrapped in blank lines so
/// paragraph boundaries survive for [`crate::normalize`]. Hidden elements and
/// script-like tags are skipped.
#[must_use]
pub fn block_text(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in node.children() {
        render(&child, &mut out);
    }
    out
}

/// Render the loose siblings following `start`, up to the first sibling
/// element whose tag is in `stop_tags`.
#[must_use]
pub fn text_after(start: &NodeRef, stop_tags: &[&str]) -> String {
    let mut out = String::new();
    let mut current = start.next_sibling();

    while let Some(node) = current {
        if let Some(tag) = tag_name(&node) {
            if stop_tags.contains(&tag.as_str()) {
                break;
            }
        }
        render(&node, &mut out);
        current = node.next_sibling();
    }

    out
}

fn render(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text());
        return;
    }

    let Some(tag) = tag_name(node) else {
        return;
    };

    if SKIPPED_TAGS.contains(&tag.as_str()) || is_hidden(node) {
        return;
    }

    if tag == "br" {
        out.push('\n');
        return;
    }

    let block = BLOCK_TAGS.contains(&tag.as_str());
    if block {
        out.push_str("\n\n");
    }
    for child in node.children() {
        render(&child, out);
    }
    if block {
        out.push_str("\n\n");
    }
}
