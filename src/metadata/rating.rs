//! Age rating and release status.

use serde::{Deserialize, Serialize};

/// Coarse age rating.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgeRating {
    G,
    PG,
    R,
    R18,
}

/// Rating code and the guide text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub rating: AgeRating,
    pub guide: Option<String>,
}

/// Parse a "Rating" value such as `PG-13 - Teens 13 or older`.
///
/// The site's six codes fold into four ratings: `G` and `PG` (children) are
/// both `G`, `PG-13` is `PG`, `R` and `R+` are `R`, `Rx` is `R18`.
///
/// # Example
///
/// ```rust
/// use mal_scraper::metadata::{parse_rating, AgeRating};
///
/// let rating = parse_rating("PG-13 - Teens 13 or older").unwrap();
/// assert_eq!(rating.rating, AgeRating::PG);
/// assert_eq!(rating.guide.as_deref(), Some("Teens 13 or older"));
/// assert!(parse_rating("None").is_none());
/// ```
#[must_use]
pub fn parse_rating(value: &str) -> Option<Rating> {
    let (code, guide) = match value.split_once(" - ") {
        Some((code, guide)) => (code.trim(), Some(guide.trim())),
        None => (value.trim(), None),
    };

    let rating = match code {
        "G" | "PG" => AgeRating::G,
        "PG-13" => AgeRating::PG,
        "R" | "R+" => AgeRating::R,
        "Rx" => AgeRating::R18,
        _ => return None,
    };

    Some(Rating {
        rating,
        guide: guide.filter(|g| !g.is_empty()).map(str::to_string),
    })
}

/// Release status of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    Finished,
    Current,
    Upcoming,
    Hiatus,
    Discontinued,
}

/// Parse a "Status" value from either family.
#[must_use]
pub fn parse_status(value: &str) -> Option<ReleaseStatus> {
    match value.trim().to_lowercase().as_str() {
        "finished airing" | "finished" => Some(ReleaseStatus::Finished),
        "currently airing" | "publishing" => Some(ReleaseStatus::Current),
        "not yet aired" | "not yet published" => Some(ReleaseStatus::Upcoming),
        "on hiatus" => Some(ReleaseStatus::Hiatus),
        "discontinued" => Some(ReleaseStatus::Discontinued),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_codes() {
        let cases = [
            ("G - All Ages", AgeRating::G),
            ("PG - Children", AgeRating::G),
            ("PG-13 - Teens 13 or older", AgeRating::PG),
            ("R - 17+ (violence & profanity)", AgeRating::R),
            ("R+ - Mild Nudity", AgeRating::R),
            ("Rx - Hentai", AgeRating::R18),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_rating(raw).map(|r| r.rating), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_rating_guide_kept_verbatim() {
        let rating = parse_rating("R - 17+ (violence & profanity)").unwrap();
        assert_eq!(rating.guide.as_deref(), Some("17+ (violence & profanity)"));
    }

    #[test]
    fn test_rating_without_guide() {
        let rating = parse_rating("Rx").unwrap();
        assert_eq!(rating.rating, AgeRating::R18);
        assert!(rating.guide.is_none());
    }

    #[test]
    fn test_status_both_families() {
        assert_eq!(parse_status("Finished Airing"), Some(ReleaseStatus::Finished));
        assert_eq!(parse_status("Publishing"), Some(ReleaseStatus::Current));
        assert_eq!(parse_status("Not yet aired"), Some(ReleaseStatus::Upcoming));
        assert_eq!(parse_status("On Hiatus"), Some(ReleaseStatus::Hiatus));
        assert_eq!(parse_status("Discontinued"), Some(ReleaseStatus::Discontinued));
        assert_eq!(parse_status("Cancelled?"), None);
    }
}
