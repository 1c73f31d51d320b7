use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::facet::{Genre, Mood};

/// Numeric identity of a track. Stable, but never used for display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represent a music track of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    /// Author-supplied, URL-safe and unique across the store.
    pub slug: String,
    pub artist: String,
    pub genre: Genre,
    pub mood: Mood,
    pub release_year: i32,
    /// Opaque URI, possibly unreachable. Placeholder substitution is up to the renderer.
    pub cover_image: String,
    pub external_link: String,
}
