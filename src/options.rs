//! Configuration options for page extraction.
//!
//! The `Options` struct carries the few conventions that are expected to drift
//! with the upstream site's markup: the image size-code ladder and the synonym
//! list delimiter. The per-family label tables are static data in
//! [`crate::vocabulary`].

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use mal_scraper::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Prefer a hypothetical extra-large "x" variant over "l"
/// let options = Options {
///     image_size_codes: vec!["t".into(), "".into(), "l".into(), "x".into()],
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Image size codes, ordered from smallest to largest variant.
    ///
    /// A size code is the suffix glued to the numeric asset id in a poster
    /// filename (`87048l.jpg` is the `l` variant of asset `87048`). The empty
    /// string stands for the uncoded base file (`87048.jpg`). Codes missing
    /// from this list rank below every listed code.
    ///
    /// Default: `["t", "v", "", "l"]`
    pub image_size_codes: Vec<String>,

    /// Delimiter between entries of the "Synonyms" field.
    ///
    /// Default: `','`
    pub synonym_delimiter: char,

    /// Treat the site's "no information has been added" stubs as absent text.
    ///
    /// Default: `true`
    pub drop_placeholders: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            image_size_codes: ["t", "v", "", "l"].into_iter().map(String::from).collect(),
            synonym_delimiter: ',',
            drop_placeholders: true,
        }
    }
}

impl Options {
    /// Rank of a size code in the configured ladder (higher is larger).
    ///
    /// Unlisted codes return `None`.
    #[must_use]
    pub fn size_rank(&self, code: &str) -> Option<usize> {
        self.image_size_codes.iter().position(|c| c == code)
    }

    /// Non-empty size codes, longest first, for suffix matching.
    pub(crate) fn coded_suffixes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .image_size_codes
            .iter()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .collect();
        codes.sort_by_key(|c| std::cmp::Reverse(c.len()));
        codes
    }
}
