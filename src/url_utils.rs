//! URL Utility Functions
//!
//! Parsing of the caller-supplied source URL and resolution of image
//! references found in the page.

use url::Url;

use crate::error::{Error, Result};
use crate::vocabulary::Family;

/// A parsed source URL with its document family and catalog id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub url: Url,
    pub family: Family,
    pub external_id: Option<u64>,
}

/// Parse a source URL and locate its family segment.
///
/// The family is the first path segment equal to `anime` or `manga`; the
/// segment after it is the numeric catalog id when it parses as one.
///
/// # Errors
///
/// `InvalidUrl` when the string is not an absolute URL, `UnknownFamily` when
/// no family segment is present.
///
/// # Example
///
/// ```rust
/// use mal_scraper::url_utils::parse_source;
/// use mal_scraper::Family;
///
/// let source = parse_source("https://myanimelist.net/anime/32281/Kimi_no_Na_wa")?;
/// assert_eq!(source.family, Family::Anime);
/// assert_eq!(source.external_id, Some(32281));
/// # Ok::<(), mal_scraper::Error>(())
/// ```
pub fn parse_source(url_str: &str) -> Result<Source> {
    let url = Url::parse(url_str.trim()).map_err(|e| Error::InvalidUrl(format!("{url_str}: {e}")))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let (position, family) = segments
        .iter()
        .enumerate()
        .find_map(|(i, seg)| Family::from_segment(seg).map(|f| (i, f)))
        .ok_or_else(|| Error::UnknownFamily(url_str.to_string()))?;

    let external_id = segments.get(position + 1).and_then(|s| s.parse().ok());

    Ok(Source { url, family, external_id })
}

/// Resolve an image reference against the page URL.
///
/// Protocol-relative and relative references are joined onto `base`;
/// `data:` URIs and unparsable references yield `None`.
#[must_use]
pub fn resolve(reference: &str, base: &Url) -> Option<Url> {
    let reference = reference.trim();

    if reference.is_empty() || reference.starts_with("data:") {
        return None;
    }

    base.join(reference)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}

/// Last path segment of a URL, without query or fragment.
///
/// # Examples
///
/// ```
/// use mal_scraper::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://cdn.example.net/images/anime/5/87048l.jpg?s=1"), "87048l.jpg");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let filename = without_query.rsplit('/').next().unwrap_or("").trim();

    if filename == "." || filename == ".." {
        return "";
    }
    filename
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_manga_family() {
        let source = parse_source("https://myanimelist.net/manga/13/One_Piece").unwrap();
        assert_eq!(source.family, Family::Manga);
        assert_eq!(source.external_id, Some(13));
    }

    #[test]
    fn test_parse_source_without_id() {
        let source = parse_source("https://myanimelist.net/anime/Your_Name").unwrap();
        assert_eq!(source.family, Family::Anime);
        assert_eq!(source.external_id, None);
    }

    #[test]
    fn test_parse_source_unknown_family() {
        let err = parse_source("https://myanimelist.net/people/1/Someone").unwrap_err();
        assert!(matches!(err, Error::UnknownFamily(_)));
    }

    #[test]
    fn test_parse_source_invalid_url() {
        let err = parse_source("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_resolve_relative_and_protocol_relative() {
        let base = Url::parse("https://myanimelist.net/anime/1/x").unwrap();
        assert_eq!(
            resolve("//cdn.myanimelist.net/images/a.jpg", &base).map(String::from),
            Some("https://cdn.myanimelist.net/images/a.jpg".to_string())
        );
        assert_eq!(
            resolve("/images/b.jpg", &base).map(String::from),
            Some("https://myanimelist.net/images/b.jpg".to_string())
        );
        assert!(resolve("data:image/gif;base64,R0lGOD", &base).is_none());
        assert!(resolve("  ", &base).is_none());
    }

    #[test]
    fn test_extract_filename_strips_query_and_fragment() {
        assert_eq!(extract_filename("/a/b/c.png#frag"), "c.png");
        assert_eq!(extract_filename("https://x.net/a/87048t.webp?v=2"), "87048t.webp");
    }
}
