#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use marquee_core::providers::{
    Credits, CrewMember, ListingPage, MovieProvider, PersonId, PersonSummary, ProviderError,
    ProviderListing, RawMovie, RegionAvailability, WatchProviders,
};
use marquee_core::{Genre, GenreId, MovieId};

#[derive(Debug, Default)]
pub struct CallCounts {
    pub genres: AtomicUsize,
    pub listings: AtomicUsize,
    pub person_searches: AtomicUsize,
    pub credits: AtomicUsize,
    pub watch_providers: AtomicUsize,
}

impl CallCounts {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// In-memory provider with scripted data, latency and failures.
///
/// Missing credits or watch-provider entries behave as failed lookups.
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub taxonomy: Option<Vec<Genre>>,
    pub popular: Vec<RawMovie>,
    pub by_genre: HashMap<GenreId, Vec<RawMovie>>,
    pub by_crew: HashMap<PersonId, Vec<RawMovie>>,
    pub people: HashMap<String, Vec<PersonSummary>>,
    pub credits: HashMap<MovieId, Credits>,
    pub providers: HashMap<MovieId, WatchProviders>,
    pub latency: HashMap<MovieId, Duration>,
    pub failing_listings: bool,
    pub calls: CallCounts,
}

impl FakeProvider {
    pub fn with_taxonomy(genres: Vec<Genre>) -> Self {
        Self {
            taxonomy: Some(genres),
            ..Self::default()
        }
    }

    pub fn popular(mut self, entries: Vec<RawMovie>) -> Self {
        self.popular = entries;
        self
    }

    pub fn genre_listing(mut self, genre_id: GenreId, entries: Vec<RawMovie>) -> Self {
        self.by_genre.insert(genre_id, entries);
        self
    }

    pub fn person(mut self, name: &str, id: PersonId, entries: Vec<RawMovie>) -> Self {
        self.people.insert(
            name.to_lowercase(),
            vec![PersonSummary {
                id,
                name: name.to_string(),
            }],
        );
        self.by_crew.insert(id, entries);
        self
    }

    pub fn director(mut self, movie_id: MovieId, name: &str) -> Self {
        self.credits.insert(
            movie_id,
            Credits {
                cast: Vec::new(),
                crew: vec![CrewMember::new(900 + movie_id, name, "Director")],
            },
        );
        self
    }

    pub fn no_director(mut self, movie_id: MovieId) -> Self {
        self.credits.insert(movie_id, Credits::default());
        self
    }

    pub fn regions(mut self, movie_id: MovieId, regions: Vec<(&str, RegionAvailability)>) -> Self {
        let mut providers = WatchProviders::default();
        for (code, availability) in regions {
            providers.results.insert(code.to_string(), availability);
        }
        self.providers.insert(movie_id, providers);
        self
    }

    pub fn subscription(self, movie_id: MovieId, listings: Vec<ProviderListing>) -> Self {
        self.regions(
            movie_id,
            vec![(
                "US",
                RegionAvailability {
                    flatrate: Some(listings),
                    ..RegionAvailability::default()
                },
            )],
        )
    }

    pub fn latency(mut self, movie_id: MovieId, delay: Duration) -> Self {
        self.latency.insert(movie_id, delay);
        self
    }

    pub fn failing_listings(mut self) -> Self {
        self.failing_listings = true;
        self
    }

    async fn delay(&self, movie_id: MovieId) {
        if let Some(delay) = self.latency.get(&movie_id) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn listing(&self, entries: Option<&Vec<RawMovie>>) -> Result<ListingPage, ProviderError> {
        self.calls.listings.fetch_add(1, Ordering::SeqCst);
        if self.failing_listings {
            return Err(ProviderError::ApiError("listing unavailable".into()));
        }
        Ok(ListingPage::of(entries.cloned().unwrap_or_default()))
    }
}

#[async_trait]
impl MovieProvider for FakeProvider {
    async fn popular_movies(&self, _page: u32) -> Result<ListingPage, ProviderError> {
        self.listing(Some(&self.popular))
    }

    async fn discover_by_genre(
        &self,
        genre_id: GenreId,
        _page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.listing(self.by_genre.get(&genre_id))
    }

    async fn discover_by_crew(
        &self,
        person_id: PersonId,
        _page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.listing(self.by_crew.get(&person_id))
    }

    async fn genres(&self) -> Result<Vec<Genre>, ProviderError> {
        self.calls.genres.fetch_add(1, Ordering::SeqCst);
        self.taxonomy
            .clone()
            .ok_or_else(|| ProviderError::ApiError("taxonomy unavailable".into()))
    }

    async fn search_person(&self, name: &str) -> Result<Vec<PersonSummary>, ProviderError> {
        self.calls.person_searches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .people
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn movie_credits(&self, movie_id: MovieId) -> Result<Credits, ProviderError> {
        self.calls.credits.fetch_add(1, Ordering::SeqCst);
        self.delay(movie_id).await;
        self.credits
            .get(&movie_id)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    async fn watch_providers(&self, movie_id: MovieId) -> Result<WatchProviders, ProviderError> {
        self.calls.watch_providers.fetch_add(1, Ordering::SeqCst);
        self.delay(movie_id).await;
        self.providers
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| ProviderError::ApiError("watch providers unavailable".into()))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn raw(id: MovieId, title: &str, genre_ids: &[GenreId]) -> RawMovie {
    RawMovie {
        id,
        title: title.to_string(),
        release_date: Some("2001-01-01".to_string()),
        vote_average: 7.5,
        genre_ids: genre_ids.to_vec(),
        ..RawMovie::default()
    }
}

pub fn standard_genres() -> Vec<Genre> {
    vec![
        Genre::new(28, "Action"),
        Genre::new(18, "Drama"),
        Genre::new(80, "Crime"),
        Genre::new(878, "Science Fiction"),
    ]
}
