//! Track builders shared by the catalog tests

use crate::{
    domain::{
        facet::{Genre, Mood},
        track::{Track, TrackId},
    },
    store::TrackStore,
};

pub fn track(id: u64, title: &str, artist: &str, genre: Genre, mood: Mood, year: i32) -> Track {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    Track {
        id: TrackId(id),
        title: title.to_string(),
        cover_image: format!("https://images.unsplash.com/{slug}.jpg"),
        external_link: format!("https://open.example.com/track/{slug}"),
        slug,
        artist: artist.to_string(),
        genre,
        mood,
        release_year: year,
    }
}

pub fn sample_tracks() -> Vec<Track> {
    vec![
        track(1, "Sunset Drive", "Marlow Bay", Genre::Indie, Mood::Chill, 2022),
        track(2, "Wildfire", "The Sunners", Genre::Rock, Mood::Energetic, 2019),
        track(3, "Paper Lanterns", "Juniper Coast", Genre::LoFi, Mood::Focus, 2022),
        track(4, "Northern Lights", "Ada Fenn", Genre::Folk, Mood::Sad, 2020),
        track(5, "Brick and Mortar", "Static Pines", Genre::Rock, Mood::Energetic, 2019),
        track(6, "Glass Harbor", "Nora Vale", Genre::Pop, Mood::Chill, 2023),
    ]
}

pub fn sample_store() -> anyhow::Result<TrackStore> {
    Ok(TrackStore::from_tracks(sample_tracks())?)
}

pub fn ids(tracks: &[&Track]) -> Vec<u64> {
    tracks.iter().map(|t| t.id.0).collect()
}
