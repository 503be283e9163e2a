//! Poster variant selection.
//!
//! The CDN stores several renditions of one poster next to each other, told
//! apart by a size code glued to the numeric asset id:
//!
//! ```text
//! images/anime/5/87048t.jpg   thumbnail
//! images/anime/5/87048.jpg    base
//! images/anime/5/87048l.jpg   large
//! ```
//!
//! Candidates are grouped by asset key (the URL with its size code removed);
//! the first group in document order is the poster, and within it the variant
//! ranked highest by [`Options::image_size_codes`] wins.

use url::Url;

use crate::options::Options;
use crate::url_utils::extract_filename;

/// A candidate split into asset key and size code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedVariant {
    /// Candidate URL with the size code removed from its filename.
    pub asset_key: String,
    /// Size code, `""` for the uncoded base file.
    pub code: String,
    pub url: Url,
}

impl SizedVariant {
    /// Split a candidate URL using the configured size codes.
    ///
    /// A code is recognised only directly after a digit, so a filename like
    /// `title.jpg` is never mistaken for the `e` variant of `titl`.
    #[must_use]
    pub fn from_url(url: Url, opts: &Options) -> Self {
        let path = url.path();
        let filename = extract_filename(path);
        let (stem, ext) = filename.rfind('.').map_or((filename, ""), |i| filename.split_at(i));

        for code in opts.coded_suffixes() {
            if let Some(base) = stem.strip_suffix(code) {
                if base.ends_with(|c: char| c.is_ascii_digit()) {
                    let dir = &path[..path.len() - filename.len()];
                    let mut key = url.clone();
                    key.set_path(&format!("{dir}{base}{ext}"));
                    return Self { asset_key: key.into(), code: code.to_string(), url };
                }
            }
        }

        Self { asset_key: url.to_string(), code: String::new(), url }
    }
}

/// Pick the largest variant of the first asset among `candidates`.
///
/// Returns `None` only for an empty candidate list. A single uncoded image is
/// returned as-is.
#[must_use]
pub fn pick_largest(candidates: Vec<Url>, opts: &Options) -> Option<Url> {
    let variants: Vec<SizedVariant> = candidates
        .into_iter()
        .map(|url| SizedVariant::from_url(url, opts))
        .collect();

    let poster_key = variants.first()?.asset_key.clone();

    variants
        .into_iter()
        .filter(|v| v.asset_key == poster_key)
        .enumerate()
        // Unlisted codes rank below everything; ties keep the earliest.
        .max_by_key(|(i, v)| (opts.size_rank(&v.code).map_or(0, |r| r + 1), std::cmp::Reverse(*i)))
        .map(|(_, v)| v.url)
}
