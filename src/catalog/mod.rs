//! Read-only catalog built once at startup and shared by every consumer.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{
        error::CatalogError,
        index::CatalogIndex,
        query::{QuerySpec, SortOrder},
        routes::{RouteManifest, RoutePath},
    },
    domain::{
        facet::{FacetKind, FacetValue, Genre, Mood, generic_description},
        slug::decode_facet,
        track::Track,
    },
    store::TrackStore,
};

pub mod collation;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod index;
pub mod query;
pub mod routes;

/// Number of tracks shown on the home page.
pub const FEATURED_LIMIT: usize = 6;

/// Everything a genre or mood browsing page renders.
///
/// A segment that does not resolve to a known facet still yields a page,
/// with no tracks and a generic description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetPage {
    pub name: String,
    pub segment: String,
    pub description: String,
    pub count: usize,
    pub tracks: Vec<Track>,
}

/// Entry point for the presentation layer
#[derive(Debug)]
pub struct Catalog {
    index: CatalogIndex,
}

impl Catalog {
    pub fn build(store: TrackStore) -> Result<Self, CatalogError> {
        Ok(Self {
            index: CatalogIndex::build(store)?,
        })
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn tracks(&self) -> &[Track] {
        self.index.tracks()
    }

    /// Searchable, filterable listing view.
    pub fn listing(&self, spec: &QuerySpec) -> Vec<&Track> {
        query::query(self.index.tracks(), spec)
    }

    /// Single-track view.
    pub fn detail(&self, slug: &str) -> Result<&Track, CatalogError> {
        self.index.lookup(slug)
    }

    /// Tracks carrying exactly one facet value, newest first.
    ///
    /// This is the default listing sort, not the authored order of the
    /// source data. Equal years keep authored order.
    pub fn facet_listing(&self, facet: impl Into<FacetValue>) -> Vec<&Track> {
        self.listing(&QuerySpec::only(facet.into()))
    }

    /// Newest tracks first, at most `limit` of them.
    pub fn featured(&self, limit: usize) -> Vec<&Track> {
        let mut tracks = self.listing(&QuerySpec::new().sort(SortOrder::Newest));
        tracks.truncate(limit);
        tracks
    }

    pub fn genre_counts(&self) -> Vec<(Genre, usize)> {
        self.index.genre_tally().counts().collect()
    }

    pub fn mood_counts(&self) -> Vec<(Mood, usize)> {
        self.index.mood_tally().counts().collect()
    }

    /// Resolves a URL segment of a genre or mood page.
    ///
    /// The segment goes through [`decode_facet`], so a facet whose name
    /// holds a hyphen ("Lo-fi") never resolves from its own segment.
    pub fn facet_page(&self, kind: FacetKind, segment: &str) -> FacetPage {
        let name = decode_facet(segment);

        match FacetValue::resolve(kind, &name) {
            Some(facet) => {
                let tracks = self
                    .facet_listing(facet)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>();
                let count = match facet {
                    FacetValue::Genre(genre) => self.index.count_by_genre(genre),
                    FacetValue::Mood(mood) => self.index.count_by_mood(mood),
                };
                FacetPage {
                    name,
                    segment: segment.to_string(),
                    description: facet.description().to_string(),
                    count,
                    tracks,
                }
            }
            None => {
                log::warn!(
                    "{} segment '{segment}' decoded to unknown name '{name}'",
                    kind.route_prefix()
                );
                FacetPage {
                    description: generic_description(&name),
                    name,
                    segment: segment.to_string(),
                    count: 0,
                    tracks: Vec::new(),
                }
            }
        }
    }

    /// Every page that must exist ahead of time.
    pub fn all_routes(&self) -> RouteManifest {
        routes::enumerate_routes(&self.index)
    }

    /// Route of the page showing `track`.
    pub fn track_route(track: &Track) -> RoutePath {
        RoutePath::Track(track.slug.clone())
    }
}
