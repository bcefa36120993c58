//! Listing-row and enriched record types.

use serde::{Deserialize, Serialize};

/// Broadcast category carried as a CSS class on each listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tv,
    Movie,
    Ova,
    Web,
    AnimeComic,
    Misc,
}

impl Category {
    /// Map a single row class to a category, if it names one.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "tv" => Some(Self::Tv),
            "movie" => Some(Self::Movie),
            "ova" => Some(Self::Ova),
            "web" => Some(Self::Web),
            "anime_comic" => Some(Self::AnimeComic),
            "misc" => Some(Self::Misc),
            _ => None,
        }
    }

    /// The class string this category was parsed from; also the CSV cell value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Movie => "movie",
            Self::Ova => "ova",
            Self::Web => "web",
            Self::AnimeComic => "anime_comic",
            Self::Misc => "misc",
        }
    }
}

/// One row extracted from a listing page.
///
/// Score, score count and rank are kept as raw display strings; normalization
/// belongs to the downstream analysis stage, not ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Primary (original) title.
    pub name: String,
    /// Localized title; empty when the row carries none.
    pub name_cn: String,
    /// Freeform info line (episode count, air date, staff).
    pub info: String,
    /// Raw score string, possibly non-numeric or empty.
    pub score: String,
    /// Raw vote-count string, e.g. "(1234人评分)".
    pub score_count: String,
    /// Raw rank string, e.g. "Rank 42".
    pub rank: String,
    /// Broadcast category, if the row's class list named one.
    pub category: Option<Category>,
    /// Absolute subject-page URL, or empty when the row has no link.
    pub detail_url: String,
}

/// A [`ListingItem`] with its subject-page tags attached.
///
/// `tags` is possibly empty but never absent: rows without a detail URL and
/// rows whose detail fetch failed both carry `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub item: ListingItem,
    pub tags: String,
}
