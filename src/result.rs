//! Result types for page extraction.
//!
//! These are the derived views handed to callers: the locale-keyed title map,
//! genre references and the owned [`MediaRecord`] snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::Subtype;
use crate::metadata::{AgeRating, ReleaseStatus};
use crate::vocabulary::Family;

/// Romanized title locale.
pub const EN_JP: &str = "en_jp";
/// English title locale.
pub const EN_US: &str = "en_us";
/// Native-script title locale.
pub const JA_JP: &str = "ja_jp";

/// Titles keyed by locale tag.
///
/// Only locales the page supplies are present; a missing key is a normal
/// state. Keys are always one of [`EN_JP`], [`EN_US`], [`JA_JP`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleSet(BTreeMap<String, String>);

impl TitleSet {
    pub(crate) fn insert(&mut self, locale: &'static str, title: String) {
        self.0.insert(locale.to_string(), title);
    }

    /// Title for a locale tag.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Locale tags present, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

/// A genre reference. The name is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Display name as shown on the page.
    pub name: String,
    /// Catalog genre id from the genre link, when linked.
    pub id: Option<u32>,
}

impl Genre {
    /// Lowercased, whitespace-collapsed name used for de-duplication.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    }
}

/// Owned snapshot of everything extracted from one page.
///
/// Unlike [`crate::MediaPage`] the record holds no document tree, so it is
/// `Send + Sync` and can be shared or serialized freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub url: String,
    pub family: Family,
    pub external_id: Option<u64>,
    pub titles: TitleSet,
    pub poster_image: Option<String>,
    pub subtype: Subtype,
    pub synopsis: Option<String>,
    pub background: Option<String>,
    pub genres: Vec<Genre>,
    pub abbreviated_titles: Vec<String>,
    pub status: Option<ReleaseStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub episode_count: Option<u32>,
    pub episode_length: Option<u32>,
    pub chapter_count: Option<u32>,
    pub volume_count: Option<u32>,
    pub age_rating: Option<AgeRating>,
    pub age_rating_guide: Option<String>,
}
