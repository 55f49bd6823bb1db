#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use marquee_core::providers::{
    Credits, ListingPage, MovieProvider, PersonId, PersonSummary, ProviderError, RawMovie,
    WatchProviders,
};
use marquee_core::{EnrichmentOptions, Genre, GenreId, MovieCatalog, MovieId};
use marquee_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoader, sources::EnvConfig},
};

/// Defaults plus whatever the caller's environment snapshot overrides.
pub fn config_from(env: EnvConfig) -> Config {
    ConfigLoader::new()
        .load_with_env(env)
        .expect("default configuration")
        .config
}

pub fn offline_server() -> TestServer {
    server_for(MovieCatalog::offline())
}

pub fn server_for(catalog: MovieCatalog) -> TestServer {
    let state = AppState::new(catalog, config_from(EnvConfig::default()));
    TestServer::new(create_app(state)).expect("test server")
}

pub fn live_server(provider: StaticProvider) -> TestServer {
    server_for(MovieCatalog::live(
        Arc::new(provider),
        EnrichmentOptions {
            region: "US".into(),
            lookup_timeout: Duration::from_secs(1),
        },
    ))
}

/// Provider answering every listing with the same entries, or failing them all.
#[derive(Debug, Default)]
pub struct StaticProvider {
    pub entries: Vec<RawMovie>,
    pub listing_error: Option<fn() -> ProviderError>,
}

impl StaticProvider {
    pub fn with_entries(entries: Vec<RawMovie>) -> Self {
        Self {
            entries,
            listing_error: None,
        }
    }

    pub fn failing(error: fn() -> ProviderError) -> Self {
        Self {
            entries: Vec::new(),
            listing_error: Some(error),
        }
    }

    fn listing(&self) -> Result<ListingPage, ProviderError> {
        match self.listing_error {
            Some(make) => Err(make()),
            None => Ok(ListingPage::of(self.entries.clone())),
        }
    }
}

#[async_trait]
impl MovieProvider for StaticProvider {
    async fn popular_movies(&self, _page: u32) -> Result<ListingPage, ProviderError> {
        self.listing()
    }

    async fn discover_by_genre(
        &self,
        _genre_id: GenreId,
        _page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.listing()
    }

    async fn discover_by_crew(
        &self,
        _person_id: PersonId,
        _page: u32,
    ) -> Result<ListingPage, ProviderError> {
        self.listing()
    }

    async fn genres(&self) -> Result<Vec<Genre>, ProviderError> {
        Ok(vec![Genre::new(18, "Drama")])
    }

    async fn search_person(&self, _name: &str) -> Result<Vec<PersonSummary>, ProviderError> {
        Ok(Vec::new())
    }

    async fn movie_credits(&self, _movie_id: MovieId) -> Result<Credits, ProviderError> {
        Ok(Credits::default())
    }

    async fn watch_providers(&self, _movie_id: MovieId) -> Result<WatchProviders, ProviderError> {
        Ok(WatchProviders::default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
