use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use serde::{Deserialize, Serialize};

use super::track::Track;

/// Categorical attribute of a track drawn from a small closed set.
///
/// Variants of every facet are declared in alphabetical order of their
/// display names, so the derived `Ord` is the natural browsing order.
pub trait Facet: Copy + Ord + Hash + Debug + Display + 'static {
    /// Every value of the facet, in natural order.
    const ALL: &'static [Self];

    /// Human-facing display name, as authored in the catalog data.
    fn name(&self) -> &'static str;

    /// Long text shown on the facet browsing page.
    fn description(&self) -> &'static str;

    /// The value of this facet carried by `track`.
    fn of(track: &Track) -> Self;

    /// Exact match on the display name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Which facet a browsing route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Genre,
    Mood,
}

impl FacetKind {
    /// Path prefix of the facet browsing pages, without slashes.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            FacetKind::Genre => "genre",
            FacetKind::Mood => "mood",
        }
    }
}

/// A single value of either facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetValue {
    Genre(Genre),
    Mood(Mood),
}

impl FacetValue {
    /// Resolves a display name within the given facet.
    pub fn resolve(kind: FacetKind, name: &str) -> Option<Self> {
        match kind {
            FacetKind::Genre => Genre::from_name(name).map(FacetValue::Genre),
            FacetKind::Mood => Mood::from_name(name).map(FacetValue::Mood),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FacetValue::Genre(genre) => genre.name(),
            FacetValue::Mood(mood) => mood.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FacetValue::Genre(genre) => genre.description(),
            FacetValue::Mood(mood) => mood.description(),
        }
    }
}

impl From<Genre> for FacetValue {
    fn from(genre: Genre) -> Self {
        FacetValue::Genre(genre)
    }
}

impl From<Mood> for FacetValue {
    fn from(mood: Mood) -> Self {
        FacetValue::Mood(mood)
    }
}

/// Description used when a facet page segment resolves to no known facet.
pub fn generic_description(name: &str) -> String {
    format!("Explore {} indie music tracks.", name.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Folk,
    Indie,
    #[serde(rename = "Lo-fi")]
    LoFi,
    Pop,
    Rock,
}

impl Facet for Genre {
    const ALL: &'static [Self] = &[
        Genre::Alternative,
        Genre::Folk,
        Genre::Indie,
        Genre::LoFi,
        Genre::Pop,
        Genre::Rock,
    ];

    fn name(&self) -> &'static str {
        match self {
            Genre::Alternative => "Alternative",
            Genre::Folk => "Folk",
            Genre::Indie => "Indie",
            Genre::LoFi => "Lo-fi",
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Genre::Alternative => {
                "Bold experimentation and genre-blending sounds. Music that challenges the norm."
            }
            Genre::Folk => {
                "Acoustic storytelling and traditional roots. Folk music with heart and history."
            }
            Genre::Indie => {
                "Independent artists breaking boundaries with creative, authentic sound. Discover emerging talent and unique perspectives."
            }
            Genre::LoFi => {
                "Chill beats and nostalgic vibes. Perfect for studying, relaxing, or just unwinding."
            }
            Genre::Pop => {
                "Catchy melodies and infectious rhythms. Pop tracks that captivate and energize your day."
            }
            Genre::Rock => "Powerful guitars and raw energy. Rock music that speaks to the soul.",
        }
    }

    fn of(track: &Track) -> Self {
        track.genre
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    Chill,
    Energetic,
    Focus,
    Sad,
}

impl Mood {
    /// Short line shown next to the mood badge on a track page.
    pub fn tagline(&self) -> &'static str {
        match self {
            Mood::Chill => "Perfect for relaxing and unwinding.",
            Mood::Energetic => "High energy and uplifting.",
            Mood::Focus => "Ideal for concentration and productivity.",
            Mood::Sad => "Emotional and introspective vibes.",
        }
    }
}

impl Facet for Mood {
    const ALL: &'static [Self] = &[Mood::Chill, Mood::Energetic, Mood::Focus, Mood::Sad];

    fn name(&self) -> &'static str {
        match self {
            Mood::Chill => "Chill",
            Mood::Energetic => "Energetic",
            Mood::Focus => "Focus",
            Mood::Sad => "Sad",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Mood::Chill => {
                "Relax and unwind with our curated collection of chill tracks. Perfect for background listening, studying, or simply taking a break."
            }
            Mood::Energetic => {
                "Get pumped up with high-energy tracks that inspire and motivate. Perfect for workouts, parties, or when you need an adrenaline boost."
            }
            Mood::Focus => {
                "Boost your productivity with focus-friendly tracks designed for concentration. Ideal for work, studying, or creative sessions."
            }
            Mood::Sad => {
                "Dive into emotional, introspective music that speaks to the heart. Songs for reflective moments and deep feelings."
            }
        }
    }

    fn of(track: &Track) -> Self {
        track.mood
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_by_name<F: Facet>() {
        let names = F::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "facet variants must be declared alphabetically");

        let mut by_ord = F::ALL.to_vec();
        by_ord.sort();
        assert_eq!(by_ord, F::ALL.to_vec());
    }

    #[test]
    fn natural_order_is_alphabetical() {
        assert_sorted_by_name::<Genre>();
        assert_sorted_by_name::<Mood>();
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Genre::from_name("Lo-fi"), Some(Genre::LoFi));
        assert_eq!(Genre::from_name("Rock"), Some(Genre::Rock));
        assert_eq!(Genre::from_name("rock"), None);
        assert_eq!(Genre::from_name("Lo Fi"), None);
        assert_eq!(Mood::from_name("Focus"), Some(Mood::Focus));
        assert_eq!(Mood::from_name("Happy"), None);
    }

    #[test]
    fn serde_uses_display_names() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&Genre::LoFi)?, "\"Lo-fi\"");
        let mood: Mood = serde_json::from_str("\"Energetic\"")?;
        assert_eq!(mood, Mood::Energetic);
        assert!(serde_json::from_str::<Genre>("\"Jazz\"").is_err());
        Ok(())
    }

    #[test]
    fn facet_value_resolves_within_kind() {
        assert_eq!(
            FacetValue::resolve(FacetKind::Genre, "Pop"),
            Some(FacetValue::Genre(Genre::Pop))
        );
        assert_eq!(FacetValue::resolve(FacetKind::Mood, "Pop"), None);
        assert_eq!(
            FacetValue::resolve(FacetKind::Mood, "Sad"),
            Some(FacetValue::Mood(Mood::Sad))
        );
    }

    #[test]
    fn generic_description_lowercases_name() {
        assert_eq!(
            generic_description("Lo Fi"),
            "Explore lo fi indie music tracks."
        );
    }
}
