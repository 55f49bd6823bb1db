use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{Genre, GenreId, MovieId};

use super::tmdb_types::{Credits, ListingPage, PersonSummary, WatchProviders};

pub type PersonId = u64;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid provider base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Read-only access to a movie metadata service.
///
/// Every method is a single upstream request; composition, fallbacks and
/// partial-failure handling belong to the callers.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// One page of the popularity-ordered listing
    async fn popular_movies(&self, page: u32) -> Result<ListingPage, ProviderError>;

    /// One page of movies tagged with `genre_id`
    async fn discover_by_genre(
        &self,
        genre_id: GenreId,
        page: u32,
    ) -> Result<ListingPage, ProviderError>;

    /// One page of movies `person_id` worked on as crew
    async fn discover_by_crew(
        &self,
        person_id: PersonId,
        page: u32,
    ) -> Result<ListingPage, ProviderError>;

    /// The full genre taxonomy, in provider order
    async fn genres(&self) -> Result<Vec<Genre>, ProviderError>;

    /// Free-text person search, best match first
    async fn search_person(&self, name: &str) -> Result<Vec<PersonSummary>, ProviderError>;

    async fn movie_credits(&self, movie_id: MovieId) -> Result<Credits, ProviderError>;

    async fn watch_providers(&self, movie_id: MovieId) -> Result<WatchProviders, ProviderError>;

    /// Get the provider name
    fn name(&self) -> &'static str;
}

/// Runs a provider call under `limit`, reporting expiry as [`ProviderError::Timeout`].
pub async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit)),
    }
}
