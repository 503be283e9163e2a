//! # mal-scraper
//!
//! Structured metadata extraction from MyAnimeList anime and manga pages.
//!
//! A catalog page is handed over as HTML together with its URL. The library
//! locates the information panel, reads fields by label and exposes them as
//! typed, memoized accessors on [`MediaPage`].
//!
//! ## Quick Start
//!
//! ```rust
//! use mal_scraper::{MediaPage, Subtype};
//!
//! let html = r#"<html><body>
//!   <h1><span itemprop="name">Kimi no Na wa.</span></h1>
//!   <table><tr>
//!     <td class="borderClass">
//!       <img data-src="https://cdn.myanimelist.net/images/anime/5/87048.jpg"
//!            data-srcset="https://cdn.myanimelist.net/images/anime/5/87048.jpg 1x,
//!                         https://cdn.myanimelist.net/images/anime/5/87048l.jpg 2x">
//!       <div><span class="dark_text">Type:</span> <a href="/topanime.php?type=movie">Movie</a></div>
//!       <div><span class="dark_text">Aired:</span> Aug 26, 2016</div>
//!     </td>
//!     <td><p itemprop="description">Mitsuha Miyamizu is bored of rural life.<br><br>(Source: ANN)</p></td>
//!   </tr></table>
//! </body></html>"#;
//!
//! let page = MediaPage::new("https://myanimelist.net/anime/32281/Kimi_no_Na_wa", html)?;
//! assert_eq!(page.subtype()?, Subtype::Movie);
//! assert_eq!(page.synopsis()?, Some("Mitsuha Miyamizu is bored of rural life."));
//! assert_eq!(
//!     page.poster_image()?.as_str(),
//!     "https://cdn.myanimelist.net/images/anime/5/87048l.jpg"
//! );
//! assert_eq!(page.start_date()?, page.end_date()?);
//! # Ok::<(), mal_scraper::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Titles**: Canonical, English and native titles keyed by locale
//! - **Poster image**: Largest size variant among the panel's image candidates
//! - **Free text**: Synopsis and background with citations and stubs removed
//! - **Panel fields**: Genres, synonyms, dates, counts, status and age rating
//! - **Records**: Owned, serializable [`MediaRecord`] snapshots

mod error;
mod options;
mod page;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Free-text normalization.
pub mod normalize;

/// Information panel location and label lookup.
pub mod panel;

/// Poster image size-variant selection.
pub mod image;

/// Media subtype classification.
pub mod classify;

/// Parsers for panel field values (dates, counts, ratings).
pub mod metadata;

/// Source URL parsing and reference resolution.
pub mod url_utils;

/// Site vocabulary: families, labels and selectors.
pub mod vocabulary;

// Public API - re-exports
pub use classify::{classify_type, Subtype};
pub use error::{Error, Result};
pub use metadata::{AgeRating, ReleaseStatus};
pub use normalize::normalize;
pub use options::Options;
pub use page::MediaPage;
pub use result::{Genre, MediaRecord, TitleSet, EN_JP, EN_US, JA_JP};
pub use vocabulary::Family;

/// Extracts a full record from a page using default options.
///
/// A page without any poster candidate still yields a record, with
/// `poster_image` set to `None`.
///
/// # Example
///
/// ```rust
/// use mal_scraper::{scrape, Family};
///
/// let html = r#"<div class="leftside">
///   <div><span class="dark_text">Type:</span> Manga</div>
///   <div><span class="dark_text">Chapters:</span> Unknown</div>
/// </div>"#;
/// let record = scrape("https://myanimelist.net/manga/13/One_Piece", html)?;
/// assert_eq!(record.family, Family::Manga);
/// assert_eq!(record.external_id, Some(13));
/// assert_eq!(record.chapter_count, None);
/// # Ok::<(), mal_scraper::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn scrape(url: &str, html: &str) -> Result<MediaRecord> {
    scrape_with_options(url, html, Options::default())
}

/// Extracts a full record from a page with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn scrape_with_options(url: &str, html: &str, options: Options) -> Result<MediaRecord> {
    MediaPage::with_options(url, html, options)?.record()
}

/// Extracts a full record from raw page bytes with encoding detection.
///
/// The charset is taken from `<meta charset>` or `http-equiv` declarations,
/// defaulting to UTF-8. Invalid sequences become U+FFFD instead of failing.
///
/// # Example
///
/// ```rust
/// use mal_scraper::scrape_bytes;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\
///   <h1>Pok\xE9mon</h1><div class=\"leftside\"></div></body></html>";
/// let record = scrape_bytes("https://myanimelist.net/anime/527/Pokemon", html)?;
/// assert_eq!(record.titles.get("en_jp"), Some("Pok\u{e9}mon"));
/// # Ok::<(), mal_scraper::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn scrape_bytes(url: &str, html: &[u8]) -> Result<MediaRecord> {
    MediaPage::from_bytes(url, html)?.record()
}
