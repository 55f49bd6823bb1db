#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::genre::{Genre, GenreId};
use crate::streaming::StreamingService;

pub type MovieId = u64;

/// Name reported as the primary genre of a movie without genres.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// A fully enriched movie record.
///
/// `genres` keeps provider order; the first entry is the primary genre.
/// `year` and `primaryGenre` are derived on serialization and ignored when
/// deserializing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overview: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub director: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub streaming_services: Vec<StreamingService>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            vote_average: 0.0,
            genres: Vec::new(),
            poster_path: None,
            overview: None,
            director: None,
            streaming_services: Vec::new(),
        }
    }

    /// Release year taken from the first four characters of the release
    /// date, or 0 when the date is absent or malformed.
    pub fn year(&self) -> i32 {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
            .unwrap_or(0)
    }

    pub fn primary_genre(&self) -> &str {
        self.genres
            .first()
            .map(|genre| genre.name.as_str())
            .unwrap_or(UNKNOWN_GENRE)
    }

    pub fn has_genre(&self, genre_id: GenreId) -> bool {
        self.genres.iter().any(|genre| genre.id == genre_id)
    }

    /// Case-insensitive substring match against the director name.
    pub fn directed_by(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.director
            .as_deref()
            .is_some_and(|director| director.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring match against the title.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Movie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Movie", 11)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("releaseDate", &self.release_date)?;
        state.serialize_field("voteAverage", &self.vote_average)?;
        state.serialize_field("genres", &self.genres)?;
        state.serialize_field("posterPath", &self.poster_path)?;
        state.serialize_field("overview", &self.overview)?;
        state.serialize_field("director", &self.director)?;
        state.serialize_field("streamingServices", &self.streaming_services)?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("primaryGenre", self.primary_genre())?;
        state.end()
    }
}
