//! Free-text normalization.
//!
//! Synopsis and background blocks arrive with `<br>`-driven line structure,
//! stray indentation from the page template and a trailing attribution such as
//! `(Source: ANN)` or `[Written by MAL Rewrite]`. [`normalize`] reduces them to
//! clean paragraphs separated by a single blank line.

use crate::patterns::{CITATION_MARKER, PARAGRAPH_BREAK, WHITESPACE_RUN};

/// Normalize a raw free-text field.
///
/// 1. Everything from the first citation marker onward is dropped, whichever
///    line it starts on.
/// 2. Whitespace inside each paragraph collapses to single spaces; paragraphs
///    are rejoined with `"\n\n"`.
/// 3. The result is trimmed.
///
/// Returns `None` when nothing is left. The function is idempotent.
///
/// # Example
///
/// ```rust
/// use mal_scraper::normalize;
///
/// let raw = "First  line\ncontinues.\n\n  Second paragraph.\n\n(Source: ANN)";
/// assert_eq!(
///     normalize(raw).as_deref(),
///     Some("First line continues.\n\nSecond paragraph.")
/// );
/// assert_eq!(normalize("   \n\n "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let body = strip_citation(raw);

    let paragraphs: Vec<String> = PARAGRAPH_BREAK
        .split(body)
        .map(collapse_whitespace)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        return None;
    }

    Some(paragraphs.join("\n\n"))
}

/// Collapse every whitespace run to one space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Cut `text` at the first citation marker.
#[must_use]
pub fn strip_citation(text: &str) -> &str {
    match CITATION_MARKER.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}
