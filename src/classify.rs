//! Subtype classification.
//!
//! The family (from the URL) fixes which type names are eligible; the panel's
//! "Type" value picks one of them. Anything else is [`Subtype::Unknown`],
//! which is a normal outcome rather than an error.

use serde::{Deserialize, Serialize};

use crate::panel::InfoPanel;
use crate::vocabulary::Family;

/// Media subtype over the closed set shared by both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    Tv,
    Movie,
    Ova,
    Special,
    Music,
    Manga,
    Novel,
    OneShot,
    Doujinshi,
    Unknown,
}

impl Subtype {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Movie => "movie",
            Self::Ova => "ova",
            Self::Special => "special",
            Self::Music => "music",
            Self::Manga => "manga",
            Self::Novel => "novel",
            Self::OneShot => "one_shot",
            Self::Doujinshi => "doujinshi",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a "Type" value to a subtype within `family`.
///
/// Matching is case-insensitive on the trimmed value. Names belonging to the
/// other family do not match.
///
/// # Example
///
/// ```rust
/// use mal_scraper::{classify_type, Family, Subtype};
///
/// assert_eq!(classify_type(Family::Anime, Some(" Movie ")), Subtype::Movie);
/// assert_eq!(classify_type(Family::Manga, Some("Light Novel")), Subtype::Novel);
/// assert_eq!(classify_type(Family::Anime, Some("Novel")), Subtype::Unknown);
/// assert_eq!(classify_type(Family::Manga, None), Subtype::Unknown);
/// ```
#[must_use]
pub fn classify_type(family: Family, type_value: Option<&str>) -> Subtype {
    let Some(value) = type_value else {
        return Subtype::Unknown;
    };

    let key = value.trim().to_lowercase();
    family
        .subtype_names()
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(Subtype::Unknown, |(_, subtype)| *subtype)
}

/// Classify a document from its panel's "Type" field.
#[must_use]
pub fn classify(family: Family, panel: &InfoPanel) -> Subtype {
    let type_value = panel.field(family.labels().kind);
    let subtype = classify_type(family, type_value.as_deref());

    if subtype == Subtype::Unknown {
        tracing::debug!(%family, ?type_value, "unrecognized media type");
    }
    subtype
}
