//! Faceted filter, substring search and ordering over the whole catalog.

use std::{collections::HashSet, fmt::Display, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::collation::CollationKey,
    domain::{
        facet::{FacetValue, Genre, Mood},
        track::Track,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending release year.
    #[default]
    Newest,
    /// Ascending title, locale-aware.
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            other => Err(anyhow!("unknown sort order '{other}'")),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// Filter and sort specification for a single query.
///
/// Empty include sets mean "no restriction" on that facet.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    pub search_text: String,
    pub include_genres: HashSet<Genre>,
    pub include_moods: HashSet<Mood>,
    pub sort_order: SortOrder,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec matching exactly one facet value, no search text, default order.
    pub fn only(facet: FacetValue) -> Self {
        match facet {
            FacetValue::Genre(genre) => Self::new().genre(genre),
            FacetValue::Mood(mood) => Self::new().mood(mood),
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.include_genres.insert(genre);
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.include_moods.insert(mood);
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
}

/// Search, genre and mood predicates of one spec, with the search text
/// lower-cased once.
struct Matcher<'a> {
    needle: String,
    spec: &'a QuerySpec,
}

impl<'a> Matcher<'a> {
    fn new(spec: &'a QuerySpec) -> Self {
        Self {
            needle: spec.search_text.to_lowercase(),
            spec,
        }
    }

    fn matches_search(&self, track: &Track) -> bool {
        self.needle.is_empty()
            || track.title.to_lowercase().contains(&self.needle)
            || track.artist.to_lowercase().contains(&self.needle)
    }

    fn matches_genre(&self, track: &Track) -> bool {
        self.spec.include_genres.is_empty() || self.spec.include_genres.contains(&track.genre)
    }

    fn matches_mood(&self, track: &Track) -> bool {
        self.spec.include_moods.is_empty() || self.spec.include_moods.contains(&track.mood)
    }

    fn matches(&self, track: &Track) -> bool {
        self.matches_search(track) && self.matches_genre(track) && self.matches_mood(track)
    }
}

/// Returns the tracks passing every predicate of `spec`, ordered by
/// `spec.sort_order`.
///
/// Both orderings are stable: tracks that compare equal keep their relative
/// position from `tracks`.
pub fn query<'a>(tracks: &'a [Track], spec: &QuerySpec) -> Vec<&'a Track> {
    let matcher = Matcher::new(spec);
    let mut result = tracks
        .iter()
        .filter(|track| matcher.matches(track))
        .collect::<Vec<_>>();

    match spec.sort_order {
        SortOrder::Newest => result.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortOrder::Alphabetical => result.sort_by_cached_key(|t| CollationKey::new(&t.title)),
    }

    result
}
