//! Parses authored track data into the [`Track`] shape

use std::collections::HashSet;

use crate::{domain::track::Track, store::error::LoadError};

/// Parses a JSON array of track records, keeping the authored order.
pub fn parse_tracks(json: &str) -> Result<Vec<Track>, LoadError> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    validate(&tracks)?;
    Ok(tracks)
}

/// Rejects records that parse but do not satisfy the track shape:
/// blank title or artist, and ids used by more than one record.
pub fn validate(tracks: &[Track]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(tracks.len());

    for track in tracks {
        if track.title.trim().is_empty() {
            return Err(LoadError::EmptyField {
                id: track.id,
                field: "title",
            });
        }
        if track.artist.trim().is_empty() {
            return Err(LoadError::EmptyField {
                id: track.id,
                field: "artist",
            });
        }
        if !seen.insert(track.id) {
            return Err(LoadError::DuplicateId(track.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        facet::{Genre, Mood},
        track::TrackId,
    };

    const TWO_TRACKS: &str = r#"[
  {
    "id": 2,
    "title": "Paper Lanterns",
    "slug": "paper-lanterns",
    "artist": "Juniper Coast",
    "genre": "Lo-fi",
    "mood": "Chill",
    "releaseYear": 2021,
    "coverImage": "https://images.unsplash.com/photo-1",
    "externalLink": "https://example.com/paper-lanterns"
  },
  {
    "id": 1,
    "title": "Wildfire",
    "slug": "wildfire",
    "artist": "The Static Pines",
    "genre": "Rock",
    "mood": "Energetic",
    "releaseYear": 2019,
    "coverImage": "https://images.unsplash.com/photo-2",
    "externalLink": "https://example.com/wildfire"
  }
]"#;

    #[test]
    fn test_parse_keeps_authored_order() -> anyhow::Result<()> {
        let tracks = parse_tracks(TWO_TRACKS)?;

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, TrackId(2));
        assert_eq!(tracks[0].genre, Genre::LoFi);
        assert_eq!(tracks[0].release_year, 2021);
        assert_eq!(tracks[1].slug, "wildfire");
        assert_eq!(tracks[1].mood, Mood::Energetic);

        Ok(())
    }

    #[test]
    fn test_parse_missing_field() {
        let json = r#"[{ "id": 1, "title": "No Slug", "artist": "A", "genre": "Pop",
            "mood": "Sad", "releaseYear": 2020, "coverImage": "", "externalLink": "" }]"#;

        assert!(matches!(parse_tracks(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_wrong_type() {
        let json = r#"[{ "id": 1, "title": "T", "slug": "t", "artist": "A", "genre": "Pop",
            "mood": "Sad", "releaseYear": "last year", "coverImage": "", "externalLink": "" }]"#;

        assert!(matches!(parse_tracks(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_unknown_genre() {
        let json = r#"[{ "id": 1, "title": "T", "slug": "t", "artist": "A", "genre": "Jazz",
            "mood": "Sad", "releaseYear": 2020, "coverImage": "", "externalLink": "" }]"#;

        assert!(matches!(parse_tracks(json), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_duplicate_id() -> anyhow::Result<()> {
        let mut tracks = parse_tracks(TWO_TRACKS)?;
        tracks[1].id = TrackId(2);
        tracks[1].slug = "other".to_string();

        match validate(&tracks) {
            Err(LoadError::DuplicateId(id)) => assert_eq!(id, TrackId(2)),
            other => panic!("expected duplicate id error, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_empty_title() -> anyhow::Result<()> {
        let mut tracks = parse_tracks(TWO_TRACKS)?;
        tracks[0].title = "   ".to_string();

        assert!(matches!(
            validate(&tracks),
            Err(LoadError::EmptyField { field: "title", .. })
        ));

        Ok(())
    }

    #[test]
    fn test_empty_collection_is_valid() -> anyhow::Result<()> {
        assert!(parse_tracks("[]")?.is_empty());
        Ok(())
    }
}
