//! Compiled regex patterns used across extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Free-text Cleaning Patterns
// =============================================================================

/// Start of a trailing citation block: "Source: ..." or the rewrite notice,
/// optionally opened by a bracket. The marker must begin a word, so
/// "Resource:" and "open-source:" are prose.
pub static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s\(\[])[\(\[]?\s*(?:source\s*:|written\s+by\s+mal\s+rewrite)")
        .expect("CITATION_MARKER regex")
});

/// Blank line separating two paragraphs.
pub static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").expect("PARAGRAPH_BREAK regex")
});

/// Matches whitespace runs for collapsing.
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_RUN regex")
});

/// Stub text the site renders in place of an empty synopsis or background.
pub static PLACEHOLDER_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^no (?:synopsis|background)(?: information)? (?:has|have) been added (?:to this title|for this series)",
    )
    .expect("PLACEHOLDER_TEXT regex")
});

// =============================================================================
// Panel Value Patterns
// =============================================================================

/// Stand-in text of an empty list field ("No genres have been added yet.",
/// "None found, add some").
pub static EMPTY_LIST_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:no \w+ (?:has|have) been added|none found)").expect("EMPTY_LIST_TEXT regex")
});

/// Numeric genre id in a genre link (`/anime/genre/22/Romance`).
pub static GENRE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/genre/(\d+)(?:/|$)").expect("GENRE_ID regex")
});

/// Duration components (`1 hr. 46 min.`, `24 min. per ep.`, `45 sec.`).
pub static DURATION_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*hr").expect("DURATION_HOURS regex")
});

pub static DURATION_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*min").expect("DURATION_MINUTES regex")
});

pub static DURATION_SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*sec").expect("DURATION_SECONDS regex")
});

/// Separator between the two ends of an aired/published range.
pub static DATE_RANGE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+to\s+").expect("DATE_RANGE_SEPARATOR regex")
});

/// Month and year without a day (`Apr 1999`, `April 1999`).
pub static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{3,9})\.?\s+(\d{4})$").expect("MONTH_YEAR regex")
});

/// Bare year (`2016`).
pub static YEAR_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})$").expect("YEAR_ONLY regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_marker_matches_both_notices() {
        assert!(CITATION_MARKER.is_match("(Source: ANN)"));
        assert!(CITATION_MARKER.is_match("[Written by MAL Rewrite]"));
        assert!(CITATION_MARKER.is_match("SOURCE : Wikipedia"));
        assert!(!CITATION_MARKER.is_match("a resourceful hero"));
        assert!(!CITATION_MARKER.is_match("The Human Resource: Department"));
        assert!(!CITATION_MARKER.is_match("Open-source: a hacker story"));
        assert!(CITATION_MARKER.is_match("Story.( Source: ANN)"));
    }

    #[test]
    fn placeholder_matches_site_stubs() {
        assert!(PLACEHOLDER_TEXT.is_match(
            "No synopsis information has been added to this title. Help improve our database by adding a synopsis here."
        ));
        assert!(PLACEHOLDER_TEXT.is_match("No background information has been added to this title."));
        assert!(!PLACEHOLDER_TEXT.is_match("No one expected the war to end."));
    }

    #[test]
    fn empty_list_text_matches_stubs() {
        assert!(EMPTY_LIST_TEXT.is_match("No genres have been added yet."));
        assert!(EMPTY_LIST_TEXT.is_match("None found, add some"));
        assert!(!EMPTY_LIST_TEXT.is_match("Nonsense"));
    }

    #[test]
    fn genre_id_reads_numeric_segment() {
        let caps = GENRE_ID.captures("https://myanimelist.net/anime/genre/22/Romance");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("22"));
    }
}
