//! Information panel field extraction.
//!
//! The sidebar of a catalog page is a flat run of
//! `<div><span class="dark_text">Label:</span> value</div>` rows. Row order and
//! wrapper markup shift between templates, so fields are found by label text
//! instead of position: every label element in the panel is compared against
//! the accepted spellings and the first exact match wins.
//!
//! ```html
//! <div class="spaceit_pad">
//!   <span class="dark_text">Genres:</span>
//!   <span itemprop="genre" style="display: none">Comedy</span>
//!   <a href="/anime/genre/4/Comedy" title="Comedy">Comedy</a>
//! </div>
//! ```

use dom_query::{Document, NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::normalize::collapse_whitespace as collapse;
use crate::url_utils;
use crate::vocabulary::{LABEL_SELECTOR, PANEL_SELECTORS};

/// Image attributes that may carry a poster reference.
const IMAGE_ATTRIBUTES: &[&str] = &["data-src", "src"];

/// Image attributes holding `srcset` candidate lists.
const SRCSET_ATTRIBUTES: &[&str] = &["data-srcset", "srcset"];

/// One value node following a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    /// Whitespace-collapsed text of the node.
    pub text: String,
    /// Link target when the node is an anchor.
    pub href: Option<String>,
}

/// The located information panel of one document.
pub struct InfoPanel<'a> {
    root: Selection<'a>,
}

impl<'a> InfoPanel<'a> {
    /// Locate the panel, trying each known container in order.
    ///
    /// Returns `None` when none of the containers is present.
    #[must_use]
    pub fn locate(doc: &'a Document) -> Option<Self> {
        PANEL_SELECTORS.iter().find_map(|selector| {
            let root = doc.select_single(selector);
            if root.exists() {
                tracing::trace!(selector, "located information panel");
                Some(Self { root })
            } else {
                None
            }
        })
    }

    /// Label texts present in the panel, colon stripped, in document order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.root
            .select(LABEL_SELECTOR)
            .nodes()
            .iter()
            .map(label_text)
            .collect()
    }

    /// Text value of the first field whose label equals one of `labels`.
    ///
    /// The value is the visible text following the label inside its row,
    /// whitespace-collapsed and trimmed. Returns `None` for a missing label or
    /// an empty value.
    #[must_use]
    pub fn field(&self, labels: &[&str]) -> Option<String> {
        let label = self.find_label(labels)?;

        let mut raw = String::new();
        let mut current = label.next_sibling();
        while let Some(node) = current {
            if node.is_text() {
                raw.push_str(&node.text());
            } else if node.is_element() && !dom::is_hidden(&node) {
                raw.push_str(&node.text());
            }
            current = node.next_sibling();
        }

        let value = collapse(&raw);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Value nodes of a multi-valued field in document order.
    ///
    /// Every element following the label in its row is a value node, hidden
    /// ones included, so duplicates are preserved. When the row has no element
    /// values the plain text value is returned as a single entry.
    #[must_use]
    pub fn field_values(&self, labels: &[&str]) -> Vec<FieldValue> {
        let Some(label) = self.find_label(labels) else {
            return Vec::new();
        };

        let mut values = Vec::new();
        let mut current = label.next_sibling();
        while let Some(node) = current {
            if node.is_element() {
                let text = collapse(&node.text());
                if !text.is_empty() {
                    let href = match dom::tag_name(&node).as_deref() {
                        Some("a") => dom::get_attribute(&Selection::from(node), "href"),
                        _ => None,
                    };
                    values.push(FieldValue { text, href });
                }
            }
            current = node.next_sibling();
        }

        if values.is_empty() {
            if let Some(text) = self.field(labels) {
                values.push(FieldValue { text, href: None });
            }
        }

        values
    }

    /// Absolute URLs of every image candidate in the panel, document order.
    ///
    /// Candidates come from `data-src`/`src` and every entry of
    /// `data-srcset`/`srcset`. Duplicates are dropped.
    #[must_use]
    pub fn image_candidates(&self, base: &Url) -> Vec<Url> {
        let mut candidates: Vec<Url> = Vec::new();

        for node in self.root.select("img").nodes() {
            let img = Selection::from(*node);

            let direct = IMAGE_ATTRIBUTES.iter().filter_map(|a| dom::get_attribute(&img, a));
            let from_srcset = SRCSET_ATTRIBUTES
                .iter()
                .filter_map(|a| dom::get_attribute(&img, a))
                .flat_map(|set| parse_srcset(&set));

            for reference in direct.chain(from_srcset) {
                if let Some(url) = url_utils::resolve(&reference, base) {
                    if !candidates.contains(&url) {
                        candidates.push(url);
                    }
                }
            }
        }

        candidates
    }

    fn find_label(&self, labels: &[&str]) -> Option<NodeRef<'a>> {
        let found = self
            .root
            .select(LABEL_SELECTOR)
            .nodes()
            .iter()
            .find(|node| labels.contains(&label_text(node).as_str()))
            .copied();

        if found.is_none() {
            tracing::trace!(?labels, "label not present in panel");
        }
        found
    }
}

/// Label text with surrounding whitespace and the trailing colon removed.
fn label_text(node: &NodeRef) -> String {
    let text = node.text();
    let trimmed = text.trim();
    trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end().to_string()
}

/// URLs listed in a `srcset` attribute, descriptors dropped.
fn parse_srcset(srcset: &str) -> Vec<String> {
    srcset
        .split(',')
        .filter_map(|entry| entry.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
