//! The media page facade.
//!
//! [`MediaPage`] owns one parsed document and exposes every extracted field as
//! an accessor. Each accessor runs its extraction on first use and stores the
//! result in the page's [`FieldCache`], so repeated calls are free and the
//! order of calls does not matter.

use std::cell::OnceCell;

use dom_query::{Document, Selection};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::classify::{self, Subtype};
use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::image;
use crate::metadata::{
    parse_count, parse_date_range, parse_duration_minutes, parse_rating, parse_status, AgeRating,
    DateRange, Rating, ReleaseStatus,
};
use crate::normalize::{collapse_whitespace, normalize};
use crate::options::Options;
use crate::panel::{FieldValue, InfoPanel};
use crate::patterns::{EMPTY_LIST_TEXT, GENRE_ID, PLACEHOLDER_TEXT};
use crate::result::{Genre, MediaRecord, TitleSet, EN_JP, EN_US, JA_JP};
use crate::url_utils::{self, Source};
use crate::vocabulary::{
    Family, BACKGROUND_HEADING, HEADING_SELECTORS, SYNOPSIS_HEADING, SYNOPSIS_SELECTOR,
};

/// Elements that end a loose free-text section.
const SECTION_STOP_TAGS: &[&str] = &["h1", "h2", "h3", "div", "table", "section", "ul"];

/// Per-page memo of extracted fields.
///
/// Cells are filled at most once. The cache is not synchronized, which makes
/// [`MediaPage`] `!Sync`; share a [`MediaRecord`] across threads instead.
#[derive(Default)]
struct FieldCache {
    titles: OnceCell<TitleSet>,
    poster_image: OnceCell<Option<Url>>,
    subtype: OnceCell<Subtype>,
    synopsis: OnceCell<Option<String>>,
    background: OnceCell<Option<String>>,
    genres: OnceCell<Vec<Genre>>,
    abbreviated_titles: OnceCell<Vec<String>>,
    status: OnceCell<Option<ReleaseStatus>>,
    dates: OnceCell<DateRange>,
    episode_count: OnceCell<Option<u32>>,
    episode_length: OnceCell<Option<u32>>,
    chapter_count: OnceCell<Option<u32>>,
    volume_count: OnceCell<Option<u32>>,
    rating: OnceCell<Option<Rating>>,
}

/// A catalog page for one anime or manga entry.
///
/// # Example
///
/// ```rust
/// use mal_scraper::{MediaPage, Subtype};
///
/// let html = r#"<html><body>
///   <h1><span itemprop="name">Kimi no Na wa.</span></h1>
///   <table><tr><td class="borderClass">
///     <img src="https://cdn.myanimelist.net/images/anime/5/87048l.jpg">
///     <div><span class="dark_text">English:</span> Your Name.</div>
///     <div><span class="dark_text">Type:</span> <a href="/x">Movie</a></div>
///   </td></tr></table>
/// </body></html>"#;
///
/// let page = MediaPage::new("https://myanimelist.net/anime/32281/Kimi_no_Na_wa", html)?;
/// assert_eq!(page.titles()?.get("en_jp"), Some("Kimi no Na wa."));
/// assert_eq!(page.titles()?.get("en_us"), Some("Your Name."));
/// assert_eq!(page.subtype()?, Subtype::Movie);
/// assert_eq!(page.synopsis()?, None);
/// # Ok::<(), mal_scraper::Error>(())
/// ```
pub struct MediaPage {
    source: Source,
    document: Document,
    options: Options,
    cache: FieldCache,
}

impl std::fmt::Debug for MediaPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPage")
            .field("source", &self.source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl MediaPage {
    /// Parse a page with default options.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` or `UnknownFamily` when `url` is not a catalog entry URL.
    pub fn new(url: &str, html: &str) -> Result<Self> {
        Self::with_options(url, html, Options::default())
    }

    /// Parse a page with custom options.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` or `UnknownFamily` when `url` is not a catalog entry URL.
    #[instrument(skip(html, options), fields(html_len = html.len()))]
    pub fn with_options(url: &str, html: &str, options: Options) -> Result<Self> {
        let source = url_utils::parse_source(url)?;
        debug!(family = %source.family, external_id = ?source.external_id, "parsing media page");

        Ok(Self {
            source,
            document: dom::parse(html),
            options,
            cache: FieldCache::default(),
        })
    }

    /// Parse a page from raw bytes, honouring a declared charset.
    ///
    /// # Errors
    ///
    /// Same as [`MediaPage::new`].
    pub fn from_bytes(url: &str, html: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(url, html, Options::default())
    }

    /// Parse a page from raw bytes with custom options.
    ///
    /// # Errors
    ///
    /// Same as [`MediaPage::new`].
    pub fn from_bytes_with_options(url: &str, html: &[u8], options: Options) -> Result<Self> {
        let html = encoding::transcode_to_utf8(html);
        Self::with_options(url, &html, options)
    }

    // === Source ===

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.source.url
    }

    #[must_use]
    pub fn family(&self) -> Family {
        self.source.family
    }

    /// Numeric catalog id from the URL, when present.
    #[must_use]
    pub fn external_id(&self) -> Option<u64> {
        self.source.external_id
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    // === Raw panel access ===

    /// Text value of a panel field by exact label, uncached.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn field(&self, label: &str) -> Result<Option<String>> {
        Ok(self.panel()?.field(&[label]))
    }

    /// Value nodes of a multi-valued panel field by exact label, uncached.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn field_values(&self, label: &str) -> Result<Vec<FieldValue>> {
        Ok(self.panel()?.field_values(&[label]))
    }

    // === Core accessors ===

    /// Titles by locale: heading → `en_jp`, "English" → `en_us`,
    /// "Japanese" → `ja_jp`.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn titles(&self) -> Result<&TitleSet> {
        self.cached(&self.cache.titles, |panel| {
            let labels = self.family().labels();
            let mut titles = TitleSet::default();

            if let Some(title) = self.canonical_title() {
                titles.insert(EN_JP, title);
            }
            if let Some(title) = panel.field(labels.english) {
                titles.insert(EN_US, title);
            }
            if let Some(title) = panel.field(labels.native) {
                titles.insert(JA_JP, title);
            }

            if titles.is_empty() {
                warn!(url = %self.source.url, "no title resolved");
            }
            titles
        })
    }

    /// Largest variant of the poster image.
    ///
    /// # Errors
    ///
    /// `MissingImage` when the panel has no image at all, `MalformedDocument`
    /// when the panel is missing.
    pub fn poster_image(&self) -> Result<&Url> {
        let poster = self.cached(&self.cache.poster_image, |panel| {
            let candidates = panel.image_candidates(&self.source.url);
            debug!(candidates = candidates.len(), "resolving poster image");
            image::pick_largest(candidates, &self.options)
        })?;

        poster.as_ref().ok_or(Error::MissingImage)
    }

    /// Media subtype; [`Subtype::Unknown`] when the type is missing or foreign.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn subtype(&self) -> Result<Subtype> {
        self.cached(&self.cache.subtype, |panel| classify::classify(self.family(), panel))
            .copied()
    }

    /// Normalized synopsis, or `None` when the page has none.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn synopsis(&self) -> Result<Option<&str>> {
        self.cached(&self.cache.synopsis, |_| {
            let container = self.document.select_single(SYNOPSIS_SELECTOR);
            let raw = match container.nodes().first() {
                Some(node) => dom::block_text(node),
                None => self.section_text(SYNOPSIS_HEADING)?,
            };
            self.free_text(&raw)
        })
        .map(Option::as_deref)
    }

    /// Normalized background notes, or `None` when the page has none.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn background(&self) -> Result<Option<&str>> {
        self.cached(&self.cache.background, |_| {
            let raw = self.section_text(BACKGROUND_HEADING)?;
            self.free_text(&raw)
        })
        .map(Option::as_deref)
    }

    /// Genres in first-seen order, one entry per normalized name.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn genres(&self) -> Result<&[Genre]> {
        self.cached(&self.cache.genres, |panel| {
            let mut genres: Vec<Genre> = Vec::new();

            for value in panel.field_values(self.family().labels().genres) {
                if EMPTY_LIST_TEXT.is_match(&value.text) {
                    continue;
                }
                let genre = Genre {
                    id: value.href.as_deref().and_then(genre_id),
                    name: value.text,
                };
                let key = genre.key();
                match genres.iter_mut().find(|g| g.key() == key) {
                    // The hidden microdata copy comes first and has no link.
                    Some(existing) => {
                        if existing.id.is_none() {
                            existing.id = genre.id;
                        }
                    }
                    None => genres.push(genre),
                }
            }

            genres
        })
        .map(Vec::as_slice)
    }

    /// Synonym titles split on the configured delimiter; empty when the
    /// field is absent.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn abbreviated_titles(&self) -> Result<&[String]> {
        self.cached(&self.cache.abbreviated_titles, |panel| {
            let values = panel.field_values(self.family().labels().synonyms);
            values
                .iter()
                .flat_map(|v| v.text.split(self.options.synonym_delimiter))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .map(Vec::as_slice)
    }

    // === Secondary accessors ===

    /// Release status.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn status(&self) -> Result<Option<ReleaseStatus>> {
        self.cached(&self.cache.status, |panel| {
            panel
                .field(self.family().labels().status)
                .and_then(|v| parse_status(&v))
        })
        .copied()
    }

    /// First air or publication date.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn start_date(&self) -> Result<Option<chrono::NaiveDate>> {
        self.dates().map(|d| d.start)
    }

    /// Last air or publication date; equal to the start for one-off releases.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn end_date(&self) -> Result<Option<chrono::NaiveDate>> {
        self.dates().map(|d| d.end)
    }

    /// Episode count (anime only).
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn episode_count(&self) -> Result<Option<u32>> {
        self.count(&self.cache.episode_count, self.family().labels().episodes)
    }

    /// Episode length in minutes (anime only).
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn episode_length(&self) -> Result<Option<u32>> {
        self.cached(&self.cache.episode_length, |panel| {
            panel
                .field(self.family().labels().duration)
                .and_then(|v| parse_duration_minutes(&v))
        })
        .copied()
    }

    /// Chapter count (manga only).
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn chapter_count(&self) -> Result<Option<u32>> {
        self.count(&self.cache.chapter_count, self.family().labels().chapters)
    }

    /// Volume count (manga only).
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn volume_count(&self) -> Result<Option<u32>> {
        self.count(&self.cache.volume_count, self.family().labels().volumes)
    }

    /// Age rating (anime only).
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn age_rating(&self) -> Result<Option<AgeRating>> {
        self.rating().map(|r| r.map(|r| r.rating))
    }

    /// Age rating guide text, e.g. "Teens 13 or older".
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    pub fn age_rating_guide(&self) -> Result<Option<&str>> {
        self.rating().map(|r| r.and_then(|r| r.guide.as_deref()))
    }

    // === Record ===

    /// Extract every field into an owned record.
    ///
    /// A missing poster becomes `None` instead of failing the record.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the information panel is missing.
    #[instrument(skip(self), fields(url = %self.source.url))]
    pub fn record(&self) -> Result<MediaRecord> {
        let poster_image = match self.poster_image() {
            Ok(url) => Some(url.to_string()),
            Err(Error::MissingImage) => None,
            Err(err) => return Err(err),
        };

        Ok(MediaRecord {
            url: self.source.url.to_string(),
            family: self.family(),
            external_id: self.external_id(),
            titles: self.titles()?.clone(),
            poster_image,
            subtype: self.subtype()?,
            synopsis: self.synopsis()?.map(str::to_string),
            background: self.background()?.map(str::to_string),
            genres: self.genres()?.to_vec(),
            abbreviated_titles: self.abbreviated_titles()?.to_vec(),
            status: self.status()?,
            start_date: self.start_date()?,
            end_date: self.end_date()?,
            episode_count: self.episode_count()?,
            episode_length: self.episode_length()?,
            chapter_count: self.chapter_count()?,
            volume_count: self.volume_count()?,
            age_rating: self.age_rating()?,
            age_rating_guide: self.age_rating_guide()?.map(str::to_string),
        })
    }

    // === Internals ===

    fn panel(&self) -> Result<InfoPanel<'_>> {
        InfoPanel::locate(&self.document).ok_or_else(|| {
            warn!(url = %self.source.url, "information panel not found");
            Error::MalformedDocument
        })
    }

    /// Return the cached value, computing it against the panel on first use.
    fn cached<'s, T>(
        &'s self,
        cell: &'s OnceCell<T>,
        compute: impl FnOnce(&InfoPanel<'s>) -> T,
    ) -> Result<&'s T> {
        if let Some(value) = cell.get() {
            return Ok(value);
        }
        let panel = self.panel()?;
        Ok(cell.get_or_init(|| compute(&panel)))
    }

    fn count(&self, cell: &OnceCell<Option<u32>>, labels: &[&str]) -> Result<Option<u32>> {
        self.cached(cell, |panel| panel.field(labels).and_then(|v| parse_count(&v)))
            .copied()
    }

    fn dates(&self) -> Result<DateRange> {
        self.cached(&self.cache.dates, |panel| {
            panel
                .field(self.family().labels().dates)
                .map(|v| parse_date_range(&v))
                .unwrap_or_default()
        })
        .copied()
    }

    fn rating(&self) -> Result<Option<&Rating>> {
        self.cached(&self.cache.rating, |panel| {
            panel
                .field(self.family().labels().rating)
                .and_then(|v| parse_rating(&v))
        })
        .map(Option::as_ref)
    }

    /// Page heading title, falling back to `og:title`.
    fn canonical_title(&self) -> Option<String> {
        let from_heading = HEADING_SELECTORS.iter().find_map(|selector| {
            let heading = self.document.select_single(selector);
            if !heading.exists() {
                return None;
            }
            let own = collapse_whitespace(&dom::own_text(&heading));
            let text = if own.is_empty() {
                collapse_whitespace(&heading.text())
            } else {
                own
            };
            (!text.is_empty()).then_some(text)
        });

        from_heading.or_else(|| {
            let meta = self.document.select_single("meta[property='og:title']");
            dom::get_attribute(&meta, "content")
                .map(|t| collapse_whitespace(&t))
                .filter(|t| !t.is_empty())
        })
    }

    /// Raw text following an `<h2>` section heading.
    ///
    /// Newer templates wrap the heading in its own `<div>`; when nothing
    /// follows the heading itself, the wrapper's siblings are read instead.
    fn section_text(&self, heading: &str) -> Option<String> {
        let headings = self.document.select("h2");
        let node = headings.nodes().iter().copied().find(|n| {
            collapse_whitespace(&dom::own_text(&Selection::from(*n))) == heading
        })?;

        let text = dom::text_after(&node, SECTION_STOP_TAGS);
        if !text.trim().is_empty() {
            return Some(text);
        }

        let parent = node.parent()?;
        if dom::tag_name(&parent).as_deref() == Some("div") {
            return Some(dom::text_after(&parent, SECTION_STOP_TAGS));
        }
        None
    }

    fn free_text(&self, raw: &str) -> Option<String> {
        let text = normalize(raw)?;
        if self.options.drop_placeholders && PLACEHOLDER_TEXT.is_match(&text) {
            return None;
        }
        Some(text)
    }
}

fn genre_id(href: &str) -> Option<u32> {
    GENRE_ID.captures(href).and_then(|c| c[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIME_URL: &str = "https://myanimelist.net/anime/1/Test";

    fn page(body: &str) -> MediaPage {
        let html = format!(
            r#"<html><body><h1><span itemprop="name">Test Title</span></h1>
               <table><tr><td class="borderClass">{body}</td>
               <td><span itemprop="description">Body text.</span></td></tr></table></body></html>"#
        );
        MediaPage::new(ANIME_URL, &html).unwrap()
    }

    #[test]
    fn test_missing_panel_fails_every_accessor() {
        let page = MediaPage::new(ANIME_URL, "<html><body><p>Gone</p></body></html>").unwrap();
        assert_eq!(page.titles().unwrap_err(), Error::MalformedDocument);
        assert_eq!(page.subtype().unwrap_err(), Error::MalformedDocument);
        assert_eq!(page.synopsis().unwrap_err(), Error::MalformedDocument);
        assert_eq!(page.genres().unwrap_err(), Error::MalformedDocument);
        assert_eq!(page.poster_image().unwrap_err(), Error::MalformedDocument);
        assert_eq!(page.record().unwrap_err(), Error::MalformedDocument);
    }

    #[test]
    fn test_missing_image_is_its_own_error() {
        let page = page("");
        assert_eq!(page.poster_image().unwrap_err(), Error::MissingImage);
        assert!(page.record().unwrap().poster_image.is_none());
    }

    #[test]
    fn test_accessors_are_cached() {
        let page = page(r#"<div><span class="dark_text">Synonyms:</span> A, B</div>"#);
        let first = page.abbreviated_titles().unwrap().as_ptr();
        let second = page.abbreviated_titles().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_genres_merge_ids_from_links() {
        let page = page(
            r#"<div><span class="dark_text">Genres:</span>
                <span itemprop="genre" style="display: none">Comedy</span>
                <a href="/anime/genre/4/Comedy">Comedy</a>,
                <a href="/anime/genre/4/Comedy">comedy</a>
            </div>"#,
        );
        let genres = page.genres().unwrap();
        assert_eq!(genres, &[Genre { name: "Comedy".to_string(), id: Some(4) }]);
    }

    #[test]
    fn test_genres_ignore_empty_stub() {
        let page = page(r#"<div><span class="dark_text">Genres:</span> No genres have been added yet.</div>"#);
        assert!(page.genres().unwrap().is_empty());
    }

    #[test]
    fn test_custom_synonym_delimiter() {
        let html = r#"<table><tr><td class="borderClass">
            <div><span class="dark_text">Synonyms:</span> A; B, C ;</div>
        </td></tr></table>"#;
        let opts = Options { synonym_delimiter: ';', ..Options::default() };
        let page = MediaPage::with_options(ANIME_URL, html, opts).unwrap();
        assert_eq!(page.abbreviated_titles().unwrap(), &["A", "B, C"]);
    }

    #[test]
    fn test_field_passthrough() {
        let page = page(r#"<div><span class="dark_text">Studios:</span> <a href="/s">CoMix Wave Films</a></div>"#);
        assert_eq!(page.field("Studios").unwrap().as_deref(), Some("CoMix Wave Films"));
        assert_eq!(page.field("Producers").unwrap(), None);
    }

    #[test]
    fn test_placeholder_kept_when_disabled() {
        let html = r#"<table><tr><td class="borderClass"></td><td>
            <span itemprop="description">No synopsis information has been added to this title.</span>
        </td></tr></table>"#;
        let opts = Options { drop_placeholders: false, ..Options::default() };
        let page = MediaPage::with_options(ANIME_URL, html, opts).unwrap();
        assert!(page.synopsis().unwrap().is_some());

        let page = MediaPage::new(ANIME_URL, html).unwrap();
        assert!(page.synopsis().unwrap().is_none());
    }
}
