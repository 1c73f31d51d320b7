use serde::{Deserialize, Serialize};

use crate::{
    catalog::index::CatalogIndex,
    domain::{
        facet::{Facet, FacetKind},
        slug::encode_facet,
    },
};

/// One page the serving layer must be able to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePath {
    Track(String),
    Genre(String),
    Mood(String),
}

impl RoutePath {
    pub fn facet(kind: FacetKind, segment: String) -> Self {
        match kind {
            FacetKind::Genre => RoutePath::Genre(segment),
            FacetKind::Mood => RoutePath::Mood(segment),
        }
    }

    /// Absolute path of the page, e.g. `/songs/wildfire` or `/genre/lo-fi`.
    pub fn path(&self) -> String {
        match self {
            RoutePath::Track(slug) => format!("/songs/{slug}"),
            RoutePath::Genre(segment) => {
                format!("/{}/{segment}", FacetKind::Genre.route_prefix())
            }
            RoutePath::Mood(segment) => format!("/{}/{segment}", FacetKind::Mood.route_prefix()),
        }
    }
}

/// Every statically generated page, grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifest {
    /// Track slugs, verbatim, in source order.
    pub track_paths: Vec<String>,
    /// Encoded genre segments, in natural genre order.
    pub genre_paths: Vec<String>,
    /// Encoded mood segments, in natural mood order.
    pub mood_paths: Vec<String>,
}

impl RouteManifest {
    /// Tracks first, then genres, then moods.
    pub fn paths(&self) -> Vec<RoutePath> {
        let tracks = self.track_paths.iter().cloned().map(RoutePath::Track);
        let genres = self.genre_paths.iter().cloned().map(RoutePath::Genre);
        let moods = self.mood_paths.iter().cloned().map(RoutePath::Mood);
        tracks.chain(genres).chain(moods).collect()
    }

    pub fn len(&self) -> usize {
        self.track_paths.len() + self.genre_paths.len() + self.mood_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn encode_all<F: Facet>(values: &[F]) -> Vec<String> {
    values.iter().map(|value| encode_facet(value.name())).collect()
}

/// Pure function of the index: the same index always yields the same manifest.
pub fn enumerate_routes(index: &CatalogIndex) -> RouteManifest {
    let manifest = RouteManifest {
        track_paths: index.tracks().iter().map(|t| t.slug.clone()).collect(),
        genre_paths: encode_all(index.genres()),
        mood_paths: encode_all(index.moods()),
    };

    log::debug!(
        "Enumerated {} routes ({} tracks, {} genres, {} moods)",
        manifest.len(),
        manifest.track_paths.len(),
        manifest.genre_paths.len(),
        manifest.mood_paths.len()
    );

    manifest
}
