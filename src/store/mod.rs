use std::path::Path;

use crate::{domain::track::Track, store::error::LoadError};

pub mod error;
pub mod loader;

/// Immutable, ordered sequence of tracks exactly as authored.
///
/// The position of a track in this sequence is the "source order" every
/// stable tie-break refers to.
#[derive(Debug, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
}

impl TrackStore {
    /// Reads and parses a JSON track file. No partial store is ever returned.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} tracks from {}",
            store.len(),
            path.to_string_lossy()
        );
        Ok(store)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self {
            tracks: loader::parse_tracks(json)?,
        })
    }

    pub fn from_tracks(tracks: Vec<Track>) -> Result<Self, LoadError> {
        loader::validate(&tracks)?;
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
