//! Aggregation facade over the live provider and the built-in catalog.
//!
//! [`MovieCatalog`] decides once, at construction, whether it serves live
//! data or the fallback set. Every operation then answers from that single
//! source; live and fallback data are never mixed in one resolution.

use std::fmt;
use std::sync::Arc;

use marquee_model::{Genre, GenreId, Movie, MovieId};
use tracing::{debug, info, warn};

use crate::config::ProviderConfig;
use crate::enrichment::{EnrichmentOptions, EnrichmentPipeline};
use crate::error::{CatalogError, ListingKind, Result};
use crate::fallback::FallbackCatalog;
use crate::providers::{MovieProvider, ProviderError, RawMovie, TmdbProvider, bounded};
use crate::selection;
use crate::taxonomy::GenreTaxonomy;

/// Only the first page of any listing is consulted.
const LISTING_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    Live,
    Offline,
}

impl CatalogMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogMode::Live => "live",
            CatalogMode::Offline => "offline",
        }
    }
}

impl fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional filters for candidate resolution and random selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub genre_id: Option<GenreId>,
    pub director: Option<String>,
}

impl MovieFilter {
    pub fn new(genre_id: Option<GenreId>, director: Option<String>) -> Self {
        Self { genre_id, director }
    }

    pub fn with_genre(mut self, genre_id: GenreId) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Director name, with blank values treated as no filter.
    pub fn director(&self) -> Option<&str> {
        self.director
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

enum CatalogSource {
    Live {
        provider: Arc<dyn MovieProvider>,
        pipeline: EnrichmentPipeline,
    },
    Offline(FallbackCatalog),
}

pub struct MovieCatalog {
    source: CatalogSource,
}

impl fmt::Debug for MovieCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("MovieCatalog");
        debug.field("mode", &self.mode());
        if let CatalogSource::Live { pipeline, .. } = &self.source {
            debug.field("pipeline", pipeline);
        }
        debug.finish()
    }
}

impl MovieCatalog {
    /// Builds the catalog for a resolved provider configuration.
    ///
    /// Fails only when a live configuration cannot produce an HTTP client,
    /// for example because its base URL does not parse.
    pub fn from_config(config: &ProviderConfig) -> std::result::Result<Self, ProviderError> {
        match config {
            ProviderConfig::Live(live) => {
                let provider = TmdbProvider::new(live)?;
                info!(base_url = %live.base_url, region = %live.region, "using live movie provider");
                Ok(Self::live(
                    Arc::new(provider),
                    EnrichmentOptions {
                        region: live.region.clone(),
                        lookup_timeout: live.request_timeout,
                    },
                ))
            }
            ProviderConfig::Offline => Ok(Self::offline()),
        }
    }

    pub fn live(provider: Arc<dyn MovieProvider>, options: EnrichmentOptions) -> Self {
        let pipeline = EnrichmentPipeline::new(provider.clone(), options);
        Self {
            source: CatalogSource::Live { provider, pipeline },
        }
    }

    pub fn offline() -> Self {
        warn!("no usable provider credential; serving the built-in fallback catalog");
        Self {
            source: CatalogSource::Offline(FallbackCatalog),
        }
    }

    pub fn mode(&self) -> CatalogMode {
        match self.source {
            CatalogSource::Live { .. } => CatalogMode::Live,
            CatalogSource::Offline(_) => CatalogMode::Offline,
        }
    }

    /// Popular listing, or the whole fallback set.
    pub async fn movies(&self) -> Result<Vec<Movie>> {
        match &self.source {
            CatalogSource::Live { provider, pipeline } => {
                let entries = self
                    .fetch_listing(provider.as_ref(), pipeline, ListingKind::Popular)
                    .await?;
                pipeline.enrich(entries).await
            }
            CatalogSource::Offline(fallback) => Ok(fallback.movies()),
        }
    }

    pub async fn movie_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(selection::find_by_id(self.movies().await?, id))
    }

    pub async fn genres(&self) -> Result<Vec<Genre>> {
        match &self.source {
            CatalogSource::Live { provider, pipeline } => {
                bounded(pipeline.options().lookup_timeout, provider.genres())
                    .await
                    .map_err(CatalogError::Taxonomy)
            }
            CatalogSource::Offline(fallback) => Ok(fallback.genres()),
        }
    }

    pub async fn movies_by_genre(&self, genre_id: GenreId) -> Result<Vec<Movie>> {
        match &self.source {
            CatalogSource::Live { provider, pipeline } => {
                let entries = self
                    .fetch_listing(provider.as_ref(), pipeline, ListingKind::ByGenre(genre_id))
                    .await?;
                pipeline.enrich(entries).await
            }
            CatalogSource::Offline(fallback) => Ok(fallback.by_genre(genre_id)),
        }
    }

    /// Resolves a genre by display name first; an unknown name yields no movies.
    pub async fn movies_by_genre_name(&self, name: &str) -> Result<Vec<Movie>> {
        let taxonomy = GenreTaxonomy::new(self.genres().await?);
        let Some(genre) = taxonomy.find_by_name(name) else {
            debug!(category = name, "unknown genre name");
            return Ok(Vec::new());
        };
        self.movies_by_genre(genre.id).await
    }

    pub async fn movies_by_director(&self, name: &str) -> Result<Vec<Movie>> {
        match &self.source {
            CatalogSource::Live { provider, pipeline } => {
                let timeout = pipeline.options().lookup_timeout;
                let people = bounded(timeout, provider.search_person(name))
                    .await
                    .map_err(|source| CatalogError::PersonSearch {
                        name: name.to_string(),
                        source,
                    })?;

                let Some(person) = people.into_iter().next() else {
                    info!(director = name, "no person matched director name");
                    return Ok(Vec::new());
                };

                debug!(director = name, person_id = person.id, "resolved director");
                let entries = self
                    .fetch_listing(provider.as_ref(), pipeline, ListingKind::ByCrew(person.id))
                    .await?;
                pipeline.enrich(entries).await
            }
            CatalogSource::Offline(fallback) => Ok(fallback.by_director(name)),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        Ok(selection::search_titles(self.movies().await?, query))
    }

    /// Movies satisfying `filter`.
    ///
    /// With both filters set the director listing is resolved first and the
    /// genre is applied afterwards to the enriched result.
    pub async fn candidates(&self, filter: &MovieFilter) -> Result<Vec<Movie>> {
        match (filter.genre_id, filter.director()) {
            (None, None) => self.movies().await,
            (Some(genre_id), None) => self.movies_by_genre(genre_id).await,
            (None, Some(director)) => self.movies_by_director(director).await,
            (Some(genre_id), Some(director)) => {
                let movies = self.movies_by_director(director).await?;
                Ok(selection::filter_by_genre(movies, genre_id))
            }
        }
    }

    /// One uniformly chosen candidate, or `None` when nothing matches.
    pub async fn random_movie(&self, filter: &MovieFilter) -> Result<Option<Movie>> {
        let candidates = self.candidates(filter).await?;
        debug!(count = candidates.len(), ?filter, "selecting random movie");
        Ok(selection::pick_random(candidates))
    }

    async fn fetch_listing(
        &self,
        provider: &dyn MovieProvider,
        pipeline: &EnrichmentPipeline,
        listing: ListingKind,
    ) -> Result<Vec<RawMovie>> {
        let timeout = pipeline.options().lookup_timeout;
        let page = match listing {
            ListingKind::Popular => bounded(timeout, provider.popular_movies(LISTING_PAGE)).await,
            ListingKind::ByGenre(genre_id) => {
                bounded(timeout, provider.discover_by_genre(genre_id, LISTING_PAGE)).await
            }
            ListingKind::ByCrew(person_id) => {
                bounded(timeout, provider.discover_by_crew(person_id, LISTING_PAGE)).await
            }
        }
        .map_err(|source| CatalogError::Listing { listing, source })?;

        debug!(%listing, count = page.results.len(), "fetched listing");
        Ok(page.results)
    }
}
