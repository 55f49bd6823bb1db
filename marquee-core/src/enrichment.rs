//! Joins raw listing entries with genre, director and streaming data.
//!
//! A pipeline run fetches the genre taxonomy once, then resolves credits and
//! watch providers for every entry concurrently. Results are joined back by
//! position, so output order always equals input order. A failed taxonomy
//! fetch fails the batch; failed per-entry lookups only blank that field.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use marquee_model::{Movie, MovieId, StreamingService};
use tracing::{debug, warn};

use crate::config::{DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT};
use crate::error::CatalogError;
use crate::providers::{
    Credits, MovieProvider, ProviderError, RawMovie, RegionAvailability, WatchProviders, bounded,
};
use crate::taxonomy::GenreTaxonomy;

const DIRECTOR_JOB: &str = "director";

/// Result of one per-entry lookup, as interpreted by the pipeline.
#[derive(Debug)]
pub enum LookupOutcome<T> {
    /// The lookup succeeded and produced a value.
    Resolved(T),
    /// The lookup succeeded but the data has nothing to offer.
    Absent,
    /// The lookup errored; the field falls back to its default.
    Failed(ProviderError),
}

impl<T> LookupOutcome<T> {
    pub fn status(&self) -> LookupStatus {
        match self {
            LookupOutcome::Resolved(_) => LookupStatus::Resolved,
            LookupOutcome::Absent => LookupStatus::Absent,
            LookupOutcome::Failed(_) => LookupStatus::Recovered,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            LookupOutcome::Resolved(value) => Some(value),
            LookupOutcome::Absent | LookupOutcome::Failed(_) => None,
        }
    }
}

/// Value-free summary of a [`LookupOutcome`], kept alongside each movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Resolved,
    Absent,
    /// Lookup failed and the field was defaulted.
    Recovered,
}

/// An enriched movie plus how each of its lookups went.
#[derive(Debug, Clone)]
pub struct EnrichedEntry {
    pub movie: Movie,
    pub director: LookupStatus,
    pub streaming: LookupStatus,
}

#[derive(Debug, Clone)]
pub struct EnrichmentOptions {
    /// Region whose availability bundle is preferred
    pub region: String,
    /// Upper bound for each individual upstream call
    pub lookup_timeout: Duration,
}

impl Default for EnrichmentOptions {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            lookup_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

pub struct EnrichmentPipeline {
    provider: Arc<dyn MovieProvider>,
    options: EnrichmentOptions,
}

impl std::fmt::Debug for EnrichmentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentPipeline")
            .field("provider", &self.provider.name())
            .field("options", &self.options)
            .finish()
    }
}

impl EnrichmentPipeline {
    pub fn new(provider: Arc<dyn MovieProvider>, options: EnrichmentOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &EnrichmentOptions {
        &self.options
    }

    pub async fn enrich(&self, entries: Vec<RawMovie>) -> Result<Vec<Movie>, CatalogError> {
        Ok(self
            .enrich_entries(entries)
            .await?
            .into_iter()
            .map(|entry| entry.movie)
            .collect())
    }

    pub async fn enrich_entries(
        &self,
        entries: Vec<RawMovie>,
    ) -> Result<Vec<EnrichedEntry>, CatalogError> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let taxonomy = self.fetch_taxonomy().await?;
        debug!(
            count = entries.len(),
            genres = taxonomy.genres().len(),
            "enriching listing entries"
        );

        // join_all yields results in input order regardless of completion order
        let enriched = join_all(
            entries
                .into_iter()
                .map(|entry| self.enrich_entry(entry, &taxonomy)),
        )
        .await;

        Ok(enriched)
    }

    async fn fetch_taxonomy(&self) -> Result<GenreTaxonomy, CatalogError> {
        bounded(self.options.lookup_timeout, self.provider.genres())
            .await
            .map(GenreTaxonomy::new)
            .map_err(CatalogError::Taxonomy)
    }

    async fn enrich_entry(&self, entry: RawMovie, taxonomy: &GenreTaxonomy) -> EnrichedEntry {
        let (director, streaming) = tokio::join!(
            self.lookup_director(entry.id),
            self.lookup_streaming(entry.id)
        );

        if let LookupOutcome::Failed(err) = &director {
            warn!(movie_id = entry.id, error = %err, "credits lookup failed; director left empty");
        }
        if let LookupOutcome::Failed(err) = &streaming {
            warn!(movie_id = entry.id, error = %err, "watch provider lookup failed; no streaming services");
        }

        let director_status = director.status();
        let streaming_status = streaming.status();
        let genres = taxonomy.genres_for(&entry);

        let movie = Movie {
            id: entry.id,
            title: entry.title,
            release_date: entry.release_date,
            vote_average: entry.vote_average,
            genres,
            poster_path: entry.poster_path,
            overview: entry.overview,
            director: director.into_value(),
            streaming_services: streaming.into_value().unwrap_or_default(),
        };

        EnrichedEntry {
            movie,
            director: director_status,
            streaming: streaming_status,
        }
    }

    pub async fn lookup_director(&self, movie_id: MovieId) -> LookupOutcome<String> {
        match bounded(
            self.options.lookup_timeout,
            self.provider.movie_credits(movie_id),
        )
        .await
        {
            Ok(credits) => match select_director(&credits) {
                Some(name) => LookupOutcome::Resolved(name),
                None => LookupOutcome::Absent,
            },
            Err(err) => LookupOutcome::Failed(err),
        }
    }

    pub async fn lookup_streaming(&self, movie_id: MovieId) -> LookupOutcome<Vec<StreamingService>> {
        match bounded(
            self.options.lookup_timeout,
            self.provider.watch_providers(movie_id),
        )
        .await
        {
            Ok(providers) => match select_region(&providers, &self.options.region) {
                Some(availability) => {
                    LookupOutcome::Resolved(collect_streaming_services(availability))
                }
                None => LookupOutcome::Absent,
            },
            Err(err) => LookupOutcome::Failed(err),
        }
    }
}

/// First crew member whose job is "Director", ignoring case.
pub fn select_director(credits: &Credits) -> Option<String> {
    credits
        .crew
        .iter()
        .find(|member| member.job.to_lowercase() == DIRECTOR_JOB)
        .map(|member| member.name.clone())
}

/// The preferred region's bundle, else the first region by code.
pub fn select_region<'a>(
    providers: &'a WatchProviders,
    preferred: &str,
) -> Option<&'a RegionAvailability> {
    providers
        .results
        .get(preferred)
        .or_else(|| providers.results.values().next())
}

/// Subscription, rental and purchase listings in that order, one entry per
/// provider id; the first occurrence wins.
pub fn collect_streaming_services(availability: &RegionAvailability) -> Vec<StreamingService> {
    let mut seen = HashSet::new();
    [
        &availability.flatrate,
        &availability.rent,
        &availability.buy,
    ]
    .into_iter()
    .flatten()
    .flatten()
    .filter(|listing| seen.insert(listing.provider_id))
    .map(|listing| {
        StreamingService::new(
            listing.provider_id,
            listing.provider_name.clone(),
            listing.logo_path.clone(),
        )
    })
    .collect()
}
