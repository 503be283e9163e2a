//! Static label vocabulary per document family.
//!
//! The catalog renders anime and manga pages from different templates. Both
//! carry the same kind of sidebar, but the labels differ ("Aired" against
//! "Published", "Episodes" against "Chapters") and so does the set of type
//! names. Everything that has to follow the upstream markup lives here.

use serde::{Deserialize, Serialize};

use crate::classify::Subtype;

/// Whether a page describes an anime or a manga entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Anime,
    Manga,
}

impl Family {
    /// Match a URL path segment (`anime`, `manga`).
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "anime" => Some(Self::Anime),
            "manga" => Some(Self::Manga),
            _ => None,
        }
    }

    /// Label table for this family's information panel.
    #[must_use]
    pub fn labels(self) -> &'static LabelTable {
        match self {
            Self::Anime => &ANIME_LABELS,
            Self::Manga => &MANGA_LABELS,
        }
    }

    /// Type names recognised for this family, lowercase.
    #[must_use]
    pub fn subtype_names(self) -> &'static [(&'static str, Subtype)] {
        match self {
            Self::Anime => ANIME_SUBTYPES,
            Self::Manga => MANGA_SUBTYPES,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted label texts for each panel field.
///
/// A label matches when its text, minus the trailing colon, equals one of the
/// listed strings exactly. Several spellings exist for fields whose label
/// switches between singular and plural with the value count.
#[derive(Debug)]
pub struct LabelTable {
    pub kind: &'static [&'static str],
    pub english: &'static [&'static str],
    pub native: &'static [&'static str],
    pub synonyms: &'static [&'static str],
    pub genres: &'static [&'static str],
    pub status: &'static [&'static str],
    pub dates: &'static [&'static str],
    pub episodes: &'static [&'static str],
    pub duration: &'static [&'static str],
    pub rating: &'static [&'static str],
    pub chapters: &'static [&'static str],
    pub volumes: &'static [&'static str],
}

pub static ANIME_LABELS: LabelTable = LabelTable {
    kind: &["Type"],
    english: &["English"],
    native: &["Japanese"],
    synonyms: &["Synonyms"],
    genres: &["Genres", "Genre"],
    status: &["Status"],
    dates: &["Aired"],
    episodes: &["Episodes"],
    duration: &["Duration"],
    rating: &["Rating"],
    chapters: &[],
    volumes: &[],
};

pub static MANGA_LABELS: LabelTable = LabelTable {
    kind: &["Type"],
    english: &["English"],
    native: &["Japanese"],
    synonyms: &["Synonyms"],
    genres: &["Genres", "Genre"],
    status: &["Status"],
    dates: &["Published"],
    episodes: &[],
    duration: &[],
    rating: &[],
    chapters: &["Chapters"],
    volumes: &["Volumes"],
};

/// "Type" values on anime pages.
///
/// ONA has no counterpart in the subtype set and classifies as unknown.
static ANIME_SUBTYPES: &[(&str, Subtype)] = &[
    ("tv", Subtype::Tv),
    ("movie", Subtype::Movie),
    ("ova", Subtype::Ova),
    ("special", Subtype::Special),
    ("tv special", Subtype::Special),
    ("music", Subtype::Music),
];

/// "Type" values on manga pages.
static MANGA_SUBTYPES: &[(&str, Subtype)] = &[
    ("manga", Subtype::Manga),
    ("manhwa", Subtype::Manga),
    ("manhua", Subtype::Manga),
    ("oel", Subtype::Manga),
    ("novel", Subtype::Novel),
    ("light novel", Subtype::Novel),
    ("web novel", Subtype::Novel),
    ("one-shot", Subtype::OneShot),
    ("one shot", Subtype::OneShot),
    ("oneshot", Subtype::OneShot),
    ("doujinshi", Subtype::Doujinshi),
    ("doujin", Subtype::Doujinshi),
];

/// Containers tried, in order, when locating the information panel.
///
/// The first is the classic two-column table layout; the second the later
/// `leftside` sidebar.
pub static PANEL_SELECTORS: &[&str] = &["td.borderClass", "div.leftside"];

/// Label elements inside the panel.
pub const LABEL_SELECTOR: &str = "span.dark_text";

/// Canonical title heading, most specific first.
pub static HEADING_SELECTORS: &[&str] = &[
    "h1 span[itemprop='name']",
    "h1.title-name",
    "h1",
];

/// Synopsis container.
pub const SYNOPSIS_SELECTOR: &str = "[itemprop='description']";

/// Section headings introducing free text that follows as loose siblings.
pub const SYNOPSIS_HEADING: &str = "Synopsis";
pub const BACKGROUND_HEADING: &str = "Background";
