use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use crate::{
    catalog::error::CatalogError,
    domain::{
        facet::{Facet, Genre, Mood},
        track::Track,
    },
    store::TrackStore,
};

/// Distinct values of one facet present in the store, with their track counts.
#[derive(Debug)]
pub struct FacetTally<F: Facet> {
    values: Vec<F>,
    counts: BTreeMap<F, usize>,
}

impl<F: Facet> FacetTally<F> {
    fn tally(tracks: &[Track]) -> Self {
        let mut counts = BTreeMap::new();
        for track in tracks {
            *counts.entry(F::of(track)).or_insert(0) += 1;
        }
        let values = counts.keys().copied().collect();
        Self { values, counts }
    }

    /// Distinct values in natural order.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Number of tracks carrying exactly `value`. Zero for absent values.
    pub fn count(&self, value: F) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> impl Iterator<Item = (F, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }
}

/// Lookups derived once from a [`TrackStore`].
///
/// Owns the store; nothing is recomputed per query.
#[derive(Debug)]
pub struct CatalogIndex {
    store: TrackStore,
    by_slug: HashMap<String, usize>,
    genres: FacetTally<Genre>,
    moods: FacetTally<Mood>,
}

impl CatalogIndex {
    /// Fails on the first slug shared by two tracks, naming both of them.
    pub fn build(store: TrackStore) -> Result<Self, CatalogError> {
        let tracks = store.tracks();
        let mut by_slug: HashMap<String, usize> = HashMap::with_capacity(tracks.len());

        for (pos, track) in tracks.iter().enumerate() {
            match by_slug.entry(track.slug.clone()) {
                Entry::Occupied(first) => {
                    return Err(CatalogError::DuplicateSlug {
                        slug: track.slug.clone(),
                        first_id: tracks[*first.get()].id,
                        second_id: track.id,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
            }
        }

        let genres = FacetTally::<Genre>::tally(tracks);
        let moods = FacetTally::<Mood>::tally(tracks);

        log::info!(
            "Catalog index built: {} tracks, {} genres, {} moods",
            tracks.len(),
            genres.values().len(),
            moods.values().len()
        );

        Ok(Self {
            store,
            by_slug,
            genres,
            moods,
        })
    }

    /// Tracks in source order.
    pub fn tracks(&self) -> &[Track] {
        self.store.tracks()
    }

    pub fn lookup(&self, slug: &str) -> Result<&Track, CatalogError> {
        self.by_slug
            .get(slug)
            .map(|pos| &self.store.tracks()[*pos])
            .ok_or_else(|| CatalogError::TrackNotFound(slug.to_string()))
    }

    pub fn genres(&self) -> &[Genre] {
        self.genres.values()
    }

    pub fn moods(&self) -> &[Mood] {
        self.moods.values()
    }

    pub fn count_by_genre(&self, genre: Genre) -> usize {
        self.genres.count(genre)
    }

    pub fn count_by_mood(&self, mood: Mood) -> usize {
        self.moods.count(mood)
    }

    pub fn genre_tally(&self) -> &FacetTally<Genre> {
        &self.genres
    }

    pub fn mood_tally(&self) -> &FacetTally<Mood> {
        &self.moods
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}
