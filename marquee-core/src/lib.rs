pub mod catalog;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod fallback;
pub mod providers;
pub mod selection;
pub mod taxonomy;

pub use catalog::{CatalogMode, MovieCatalog, MovieFilter};
pub use config::{LiveProviderConfig, ProviderConfig};
pub use enrichment::{
    EnrichedEntry, EnrichmentOptions, EnrichmentPipeline, LookupOutcome, LookupStatus,
};
pub use error::{CatalogError, ListingKind, Result};
pub use fallback::FallbackCatalog;
pub use providers::{MovieProvider, ProviderError, TmdbProvider};
pub use taxonomy::GenreTaxonomy;

pub use marquee_model::{Genre, GenreId, Movie, MovieId, StreamingService};
